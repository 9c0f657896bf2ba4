//! External process execution.
//!
//! Every external program (recon-ng, rustscan, apt) goes through
//! [`run_command`], which returns a [`ProcessOutcome`] so callers never handle
//! raw child handles.

mod install;

use std::io::ErrorKind;
use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};

use tokio::process::Command;

use crate::error_handling::ProcessError;

pub use install::{ensure_tool, AptInstaller, Capability, PackageInstaller, PathLocator, ToolLocator};

/// Captured result of a finished process.
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    /// Exit status reported by the OS
    pub status: ExitStatus,
    /// Standard output, lossily decoded as UTF-8
    pub stdout: String,
    /// Standard error, lossily decoded as UTF-8
    pub stderr: String,
    /// Wall-clock time from spawn to exit
    pub elapsed: Duration,
}

impl ProcessOutcome {
    /// Whether the process exited with status 0.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Exit code, or `None` if the process was terminated by a signal.
    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Standard output followed by standard error.
    pub fn combined_output(&self) -> String {
        let mut combined = String::with_capacity(self.stdout.len() + self.stderr.len());
        combined.push_str(&self.stdout);
        combined.push_str(&self.stderr);
        combined
    }
}

/// Renders a program and its arguments as a single space-separated line.
pub fn render_command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs `program` with `args` and waits for it to exit, capturing its output.
///
/// Stdin is closed. When `timeout` is set and elapses first, the child is killed
/// and [`ProcessError::Timeout`] is returned; nothing captured so far is kept.
/// A non-zero exit status is not an error: inspect [`ProcessOutcome::status`].
///
/// # Errors
///
/// - [`ProcessError::NotFound`] if the program is not on the search path
/// - [`ProcessError::Spawn`] for any other spawn or I/O failure
/// - [`ProcessError::Timeout`] if the limit is exceeded
pub async fn run_command(
    program: &str,
    args: &[String],
    timeout: Option<Duration>,
) -> Result<ProcessOutcome, ProcessError> {
    let command_line = render_command_line(program, args);
    log::debug!("Running command: {command_line}");

    let mut command = Command::new(program);
    command.args(args).stdin(Stdio::null()).kill_on_drop(true);

    let start = Instant::now();
    let output = match timeout {
        // Dropping the output future on timeout drops the child, and kill_on_drop kills it
        Some(limit) => tokio::time::timeout(limit, command.output())
            .await
            .map_err(|_| ProcessError::Timeout {
                command: command_line.clone(),
                timeout: limit,
            })?,
        None => command.output().await,
    };

    let output = output.map_err(|e| match e.kind() {
        ErrorKind::NotFound => ProcessError::NotFound {
            command: program.to_string(),
        },
        _ => ProcessError::Spawn {
            command: command_line.clone(),
            source: e,
        },
    })?;

    Ok(ProcessOutcome {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        elapsed: start.elapsed(),
    })
}
