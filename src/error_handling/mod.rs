//! Error handling.
//!
//! Errors are split by the boundary they cross:
//! - **Initialization**: logger and HTTP client setup
//! - **Storage**: SQLite store and run log writes
//! - **Process**: spawning, capturing and timing out external programs
//! - **Install**: package manager failures
//! - **Scan**: conditions that end a port scan run
//!
//! Lookup adapters have no error type of their own: they log and return `None`.

mod types;

// Re-export public API
pub use types::{InitializationError, InstallError, ProcessError, ScanError, StorageError};

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_timeout_message_includes_seconds() {
        let err = ProcessError::Timeout {
            command: "rustscan -a 10.0.0.1".to_string(),
            timeout: Duration::from_secs(300),
        };
        assert_eq!(
            err.to_string(),
            "Command 'rustscan -a 10.0.0.1' timed out after 300s"
        );
    }

    #[test]
    fn test_install_error_wraps_process_error() {
        let err: InstallError = ProcessError::NotFound {
            command: "apt".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Command 'apt' not found");
    }

    #[test]
    fn test_scan_error_tool_unavailable_message() {
        let err = ScanError::ToolUnavailable {
            tool: "rustscan".to_string(),
            reason: "not on PATH".to_string(),
        };
        assert!(err.to_string().starts_with("rustscan is not executable"));
    }

    #[test]
    fn test_storage_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = StorageError::from(io);
        assert!(matches!(err, StorageError::IoError(_)));
        assert!(err.to_string().contains("denied"));
    }
}
