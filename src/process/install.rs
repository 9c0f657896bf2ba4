//! Tool availability check and installation.
//!
//! [`ensure_tool`] is the precondition both coordinators run before invoking
//! an external binary. Locating and installing are behind traits so tests can
//! swap in fakes without touching the real package manager.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::config::{PACKAGE_MANAGER, PRIVILEGE_ESCALATION};
use crate::error_handling::InstallError;

use super::{render_command_line, run_command};

/// Whether an external tool can be invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability {
    /// The tool was found at this path
    Available(PathBuf),
    /// The tool is missing; the string says why
    Unavailable(String),
}

impl Capability {
    pub fn is_available(&self) -> bool {
        matches!(self, Capability::Available(_))
    }
}

/// Finds executables on the search path.
pub trait ToolLocator: Send + Sync {
    fn locate(&self, tool: &str) -> Option<PathBuf>;
}

/// Installs a package by name.
#[async_trait]
pub trait PackageInstaller: Send + Sync {
    async fn install(&self, package: &str) -> Result<(), InstallError>;
}

/// [`ToolLocator`] backed by `which`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathLocator;

impl ToolLocator for PathLocator {
    fn locate(&self, tool: &str) -> Option<PathBuf> {
        which::which(tool).ok()
    }
}

/// [`PackageInstaller`] running `sudo apt update` then `sudo apt install -y`.
///
/// Only Linux is supported; any other OS yields
/// [`InstallError::UnsupportedPlatform`] without running anything.
#[derive(Debug, Clone)]
pub struct AptInstaller {
    os: String,
}

impl AptInstaller {
    pub fn new() -> Self {
        Self::for_os(std::env::consts::OS)
    }

    /// Builds an installer that behaves as if running on `os`.
    pub fn for_os(os: &str) -> Self {
        Self { os: os.to_string() }
    }

    fn steps(package: &str) -> [Vec<String>; 2] {
        [
            vec![PACKAGE_MANAGER.to_string(), "update".to_string()],
            vec![
                PACKAGE_MANAGER.to_string(),
                "install".to_string(),
                "-y".to_string(),
                package.to_string(),
            ],
        ]
    }
}

impl Default for AptInstaller {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PackageInstaller for AptInstaller {
    async fn install(&self, package: &str) -> Result<(), InstallError> {
        if self.os != "linux" {
            return Err(InstallError::UnsupportedPlatform(self.os.clone()));
        }

        for args in Self::steps(package) {
            let outcome = run_command(PRIVILEGE_ESCALATION, &args, None).await?;
            if !outcome.stdout.is_empty() {
                log::debug!("{}", outcome.stdout.trim_end());
            }
            if !outcome.success() {
                return Err(InstallError::CommandFailed {
                    command: render_command_line(PRIVILEGE_ESCALATION, &args),
                    code: outcome.code(),
                    stderr: outcome.stderr.trim().to_string(),
                });
            }
        }

        log::info!("{package} installed successfully.");
        Ok(())
    }
}

/// Makes sure `tool` is on the search path, installing it if needed.
///
/// The tool is looked up once; if missing, the installer runs and the tool is
/// looked up again. Installation errors are logged and turn into
/// [`Capability::Unavailable`]; this function never fails.
pub async fn ensure_tool(
    locator: &dyn ToolLocator,
    installer: &dyn PackageInstaller,
    tool: &str,
) -> Capability {
    if let Some(path) = locator.locate(tool) {
        log::info!("{tool} found at: {}", path.display());
        return Capability::Available(path);
    }

    log::warn!("{tool} is not installed. Installing now...");
    let install_error = match installer.install(tool).await {
        Ok(()) => None,
        Err(e) => {
            log::error!("Error occurred while installing {tool}: {e}");
            Some(e.to_string())
        }
    };

    match locator.locate(tool) {
        Some(path) => {
            log::info!("{tool} found at: {}", path.display());
            Capability::Available(path)
        }
        None => Capability::Unavailable(
            install_error.unwrap_or_else(|| format!("{tool} not found on PATH after install")),
        ),
    }
}
