//! rustscan command-line construction.

use crate::config::{ScanOptions, RUSTSCAN_BINARY};
use crate::process::render_command_line;

/// Program and argument vector for one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ScanCommand {
    /// Builds `rustscan -a <target>` followed by each configured option.
    ///
    /// Options that are unset or zero are left off. nmap flags follow a `--`
    /// separator; script flags come last.
    pub fn build(target: &str, options: &ScanOptions) -> Self {
        let mut args = vec!["-a".to_string(), target.to_string()];

        if let Some(range) = options.port_range.as_deref().filter(|r| !r.is_empty()) {
            args.extend(["-r".to_string(), range.to_string()]);
        }
        if let Some(batch_size) = options.batch_size.filter(|&b| b > 0) {
            args.extend(["-b".to_string(), batch_size.to_string()]);
        }
        if let Some(ulimit) = options.ulimit.filter(|&u| u > 0) {
            args.extend(["--ulimit".to_string(), ulimit.to_string()]);
        }
        if let Some(timeout) = options.batch_timeout_ms.filter(|&t| t > 0) {
            args.extend(["-t".to_string(), timeout.to_string()]);
        }
        if let Some(nmap) = options.nmap_options.as_deref().filter(|n| !n.trim().is_empty()) {
            args.push("--".to_string());
            args.extend(nmap.split_whitespace().map(str::to_string));
        }
        if let Some(script) = options.script_options.as_deref() {
            args.extend(script.split_whitespace().map(str::to_string));
        }

        Self {
            program: RUSTSCAN_BINARY.to_string(),
            args,
        }
    }

    pub fn command_line(&self) -> String {
        render_command_line(&self.program, &self.args)
    }
}
