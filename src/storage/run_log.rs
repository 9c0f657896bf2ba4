//! Plain-text append log for a recon run.

use std::path::{Path, PathBuf};

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::error_handling::StorageError;

/// Human-readable log file scoped to one run.
#[derive(Debug, Clone)]
pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `content` followed by a newline, creating the file if needed.
    pub async fn append(&self, content: &str) -> Result<(), StorageError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(content.as_bytes()).await?;
        file.write_all(b"\n").await?;
        file.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_append_accumulates_entries() {
        let dir = TempDir::new().unwrap();
        let log = RunLog::new(dir.path().join("example_com_20240101-000000.txt"));

        log.append("first").await.unwrap();
        log.append("second\nline").await.unwrap();

        let text = std::fs::read_to_string(log.path()).unwrap();
        assert_eq!(text, "first\nsecond\nline\n");
    }

    #[tokio::test]
    async fn test_append_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let log = RunLog::new(dir.path().join("missing").join("run.txt"));
        assert!(matches!(
            log.append("x").await,
            Err(StorageError::IoError(_))
        ));
    }
}
