//! Port-scan coordinator.
//!
//! Checks that rustscan is available (installing it when missing), builds its
//! command line from [`ScanOptions`], runs it under a wall-clock limit and
//! writes stdout followed by stderr to a timestamped output file.

mod command;

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Local;

use crate::config::{ScanOptions, RUSTSCAN_BINARY};
use crate::error_handling::{ProcessError, ScanError};
use crate::process::{
    ensure_tool, run_command, AptInstaller, Capability, PackageInstaller, PathLocator, ToolLocator,
};
use crate::workspace::{run_timestamp, scan_output_name};

pub use command::ScanCommand;

/// How a scan ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The scanner exited; its output was written whatever the exit code.
    Completed {
        output_file: PathBuf,
        exit_code: Option<i32>,
        elapsed: Duration,
    },
    /// The scanner was killed after exceeding the limit; no output file exists.
    TimedOut { timeout: Duration },
}

/// Result of one scan run.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub target: String,
    pub command_line: String,
    pub output_dir: PathBuf,
    pub outcome: ScanOutcome,
}

impl ScanReport {
    /// True when the scanner exited with status 0.
    pub fn succeeded(&self) -> bool {
        matches!(
            self.outcome,
            ScanOutcome::Completed {
                exit_code: Some(0),
                ..
            }
        )
    }
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            ScanOutcome::Completed {
                output_file,
                exit_code,
                elapsed,
            } => write!(
                f,
                "Scan of {} finished in {:.1}s (return code {}); output saved to {}",
                self.target,
                elapsed.as_secs_f64(),
                exit_code.map_or_else(|| "none".to_string(), |c| c.to_string()),
                output_file.display()
            ),
            ScanOutcome::TimedOut { timeout } => write!(
                f,
                "Scan of {} timed out after {}s",
                self.target,
                timeout.as_secs()
            ),
        }
    }
}

/// Drives rustscan against one target at a time.
pub struct PortScan {
    locator: Box<dyn ToolLocator>,
    installer: Box<dyn PackageInstaller>,
    options: ScanOptions,
}

impl PortScan {
    pub fn new(
        locator: Box<dyn ToolLocator>,
        installer: Box<dyn PackageInstaller>,
        options: ScanOptions,
    ) -> Self {
        Self {
            locator,
            installer,
            options,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(
            Box::new(PathLocator),
            Box::new(AptInstaller::new()),
            ScanOptions::default(),
        )
    }

    /// Scans `target`, writing output under `base_dir`.
    ///
    /// # Errors
    ///
    /// - [`ScanError::ToolUnavailable`] if rustscan is missing after the install attempt
    /// - [`ScanError::OutputError`] if the output directory or file cannot be written
    /// - [`ScanError::Process`] if rustscan cannot be spawned
    ///
    /// A timeout is not an error; it is reported as [`ScanOutcome::TimedOut`].
    pub async fn run(&self, target: &str, base_dir: &Path) -> Result<ScanReport, ScanError> {
        if let Capability::Unavailable(reason) =
            ensure_tool(self.locator.as_ref(), self.installer.as_ref(), RUSTSCAN_BINARY).await
        {
            return Err(ScanError::ToolUnavailable {
                tool: RUSTSCAN_BINARY.to_string(),
                reason,
            });
        }

        let command = ScanCommand::build(target, &self.options);
        let timestamp = run_timestamp(Local::now());
        execute_scan(&command, self.options.timeout, base_dir, target, &timestamp).await
    }
}

/// Runs `command` and stores its output in `<base_dir>/<target>_<timestamp>/`.
///
/// The output directory is created before the process starts. The output file
/// `<target>_<timestamp>.txt` is written only once the process has exited.
pub async fn execute_scan(
    command: &ScanCommand,
    timeout: Duration,
    base_dir: &Path,
    target: &str,
    timestamp: &str,
) -> Result<ScanReport, ScanError> {
    let command_line = command.command_line();
    log::info!("Running command: {command_line}");

    let name = scan_output_name(target, timestamp);
    let output_dir = base_dir.join(&name);
    tokio::fs::create_dir_all(&output_dir)
        .await
        .map_err(|source| ScanError::OutputError {
            path: output_dir.clone(),
            source,
        })?;
    let output_file = output_dir.join(format!("{name}.txt"));

    let outcome = match run_command(&command.program, &command.args, Some(timeout)).await {
        Ok(outcome) => outcome,
        Err(ProcessError::Timeout { command, timeout }) => {
            log::error!("Error: Command '{command}' timed out.");
            return Ok(ScanReport {
                target: target.to_string(),
                command_line,
                output_dir,
                outcome: ScanOutcome::TimedOut { timeout },
            });
        }
        Err(e) => {
            log::error!("An unexpected error occurred: {e}");
            return Err(e.into());
        }
    };

    log::debug!("stdout:\n{}", outcome.stdout);
    log::debug!("stderr:\n{}", outcome.stderr);

    tokio::fs::write(&output_file, outcome.combined_output())
        .await
        .map_err(|source| ScanError::OutputError {
            path: output_file.clone(),
            source,
        })?;

    if outcome.success() {
        log::info!("Command executed: {command_line}");
    } else {
        log::warn!(
            "Error occurred while running {}: exit status {:?}",
            command.program,
            outcome.code()
        );
    }
    log::info!("Output saved to: {}", output_file.display());
    log::info!("Return code: {:?}", outcome.code());

    Ok(ScanReport {
        target: target.to_string(),
        command_line,
        output_dir,
        outcome: ScanOutcome::Completed {
            output_file,
            exit_code: outcome.code(),
            elapsed: outcome.elapsed,
        },
    })
}
