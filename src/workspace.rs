//! Per-run workspace naming and setup.
//!
//! Names embed a one-second timestamp, so two runs against the same target in
//! the same second resolve to the same directory and share (and may overwrite)
//! its contents.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::config::{DB_FILE_NAME, TIMESTAMP_FORMAT, WORKSPACE_INFIX};
use crate::error_handling::StorageError;
use crate::storage::{ReconSink, RunLog, Store};
use crate::utils::{sanitize_domain, sanitize_target};

/// Formats a run timestamp (`YYYYMMDD-HHMMSS`).
pub fn run_timestamp(now: DateTime<Local>) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// Directory name for a domain run: `<sanitized-domain>_results_<timestamp>`.
pub fn recon_workspace_name(domain: &str, timestamp: &str) -> String {
    format!(
        "{}_{}_{}",
        sanitize_domain(domain),
        WORKSPACE_INFIX,
        timestamp
    )
}

/// Log file name for a domain run: `<sanitized-domain>_<timestamp>.txt`.
pub fn recon_log_name(domain: &str, timestamp: &str) -> String {
    format!("{}_{}.txt", sanitize_domain(domain), timestamp)
}

/// Directory (and file stem) for a scan run: `<target>_<timestamp>`.
pub fn scan_output_name(target: &str, timestamp: &str) -> String {
    format!("{}_{}", sanitize_target(target), timestamp)
}

/// Ensures `dir` exists and holds a store with all tables.
///
/// Safe to call repeatedly; existing tables are left untouched. Returns the
/// store path.
pub async fn setup_workspace(dir: &Path) -> Result<PathBuf, StorageError> {
    tokio::fs::create_dir_all(dir).await?;

    let db_path = dir.join(DB_FILE_NAME);
    Store::new(&db_path).init_schema().await?;

    log::info!(
        "Workspace '{}' set up with database at {}.",
        dir.display(),
        db_path.display()
    );
    Ok(db_path)
}

/// Directory, store and run log of one domain run.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub dir: PathBuf,
    pub db_path: PathBuf,
    pub log_path: PathBuf,
    pub timestamp: String,
}

impl Workspace {
    /// Creates (or reuses) the workspace for `domain` under `base_dir`.
    pub async fn create(base_dir: &Path, domain: &str, timestamp: &str) -> Result<Self, StorageError> {
        let dir = base_dir.join(recon_workspace_name(domain, timestamp));
        let db_path = setup_workspace(&dir).await?;
        let log_path = dir.join(recon_log_name(domain, timestamp));

        Ok(Self {
            dir,
            db_path,
            log_path,
            timestamp: timestamp.to_string(),
        })
    }

    pub fn sink(&self) -> ReconSink {
        ReconSink::new(Store::new(&self.db_path), RunLog::new(&self.log_path))
    }
}
