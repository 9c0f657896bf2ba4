//! recon-ng driver.

use async_trait::async_trait;

use crate::config::{DOMAIN_PLACEHOLDER, RECON_NG_BINARY};
use crate::error_handling::ProcessError;
use crate::process::{
    ensure_tool, run_command, AptInstaller, Capability, PackageInstaller, PathLocator,
    ProcessOutcome, ToolLocator,
};

/// Substitutes `domain` into a module command template.
pub fn render_module_command(template: &str, domain: &str) -> String {
    template.replace(DOMAIN_PLACEHOLDER, domain)
}

/// External reconnaissance framework that runs one module command at a time.
#[async_trait]
pub trait ReconFramework: Send + Sync {
    /// Checks (and if needed installs) the framework before any module runs.
    async fn prepare(&self) -> Capability;

    /// Runs a single module command to completion and captures its output.
    async fn run_module(&self, command: &str) -> Result<ProcessOutcome, ProcessError>;
}

/// [`ReconFramework`] that shells out to `recon-ng -C <command>`.
pub struct ReconNg {
    locator: Box<dyn ToolLocator>,
    installer: Box<dyn PackageInstaller>,
}

impl ReconNg {
    pub fn new(locator: Box<dyn ToolLocator>, installer: Box<dyn PackageInstaller>) -> Self {
        Self { locator, installer }
    }
}

impl Default for ReconNg {
    fn default() -> Self {
        Self::new(Box::new(PathLocator), Box::new(AptInstaller::new()))
    }
}

#[async_trait]
impl ReconFramework for ReconNg {
    async fn prepare(&self) -> Capability {
        ensure_tool(self.locator.as_ref(), self.installer.as_ref(), RECON_NG_BINARY).await
    }

    async fn run_module(&self, command: &str) -> Result<ProcessOutcome, ProcessError> {
        let args = vec!["-C".to_string(), command.to_string()];
        run_command(RECON_NG_BINARY, &args, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_module_command() {
        assert_eq!(
            render_module_command("recon/domains-hosts/geoip -t default -d {domain}", "example.com"),
            "recon/domains-hosts/geoip -t default -d example.com"
        );
    }

    #[test]
    fn test_render_module_command_without_placeholder() {
        assert_eq!(
            render_module_command("recon/hosts-hosts/resolve", "example.com"),
            "recon/hosts-hosts/resolve"
        );
    }
}
