//! Error type definitions.
//!
//! This module defines all error types used throughout the library.

use std::path::PathBuf;
use std::time::Duration;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for the SQLite store and the run log.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum StorageError {
    /// SQL execution or connection error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),

    /// Filesystem error while creating the workspace or appending to the run log.
    #[error("Workspace I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Error types for external process execution.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// The program could not be found on the search path.
    #[error("Command '{command}' not found")]
    NotFound {
        /// Program name as passed to the runner
        command: String,
    },

    /// The program could not be spawned or its output could not be collected.
    #[error("Failed to run '{command}': {source}")]
    Spawn {
        /// Rendered command line
        command: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The program exceeded its wall-clock limit and was killed.
    #[error("Command '{command}' timed out after {}s", timeout.as_secs())]
    Timeout {
        /// Rendered command line
        command: String,
        /// Limit that was exceeded
        timeout: Duration,
    },
}

/// Error types for package installation.
#[derive(Error, Debug)]
pub enum InstallError {
    /// Installation is only supported on Linux with apt.
    #[error("Installing packages is not supported on {0}; this tool expects Linux with apt")]
    UnsupportedPlatform(String),

    /// A package manager command exited with a non-zero status.
    #[error("'{command}' exited with status {code:?}: {stderr}")]
    CommandFailed {
        /// Rendered command line
        command: String,
        /// Exit code, if the process exited normally
        code: Option<i32>,
        /// Captured standard error
        stderr: String,
    },

    /// A package manager command could not be run at all.
    #[error(transparent)]
    Process(#[from] ProcessError),
}

/// Error types that end a port scan run.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The scanner is missing and could not be installed.
    #[error("{tool} is not executable. Please ensure it is installed correctly ({reason})")]
    ToolUnavailable {
        /// Binary name
        tool: String,
        /// Why it is unavailable
        reason: String,
    },

    /// The output directory or file could not be written.
    #[error("Failed to write scan output to {}: {source}", path.display())]
    OutputError {
        /// Path being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The scanner could not be spawned.
    #[error(transparent)]
    Process(#[from] ProcessError),
}
