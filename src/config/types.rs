//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and library configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_RECON_MODULES, SCAN_BATCH_SIZE, SCAN_BATCH_TIMEOUT_MS, SCAN_NMAP_OPTIONS,
    SCAN_PORT_RANGE, SCAN_TIMEOUT, SCAN_ULIMIT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Trims a positional argument and rejects it if nothing is left.
fn non_blank(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("must not be empty".to_string());
    }
    Ok(trimmed.to_string())
}

/// Command-line options for the `domain-recon` binary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "domain-recon",
    version,
    about = "WHOIS, DNS, geolocation and recon-ng sweep of a single domain"
)]
pub struct DomainReconOpt {
    /// Domain to investigate (e.g. example.com)
    #[arg(value_name = "DOMAIN", value_parser = non_blank)]
    pub domain: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info, env = "RECON_KIT_LOG_LEVEL")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, env = "RECON_KIT_LOG_FORMAT")]
    pub log_format: LogFormat,
}

/// Command-line options for the `port-scan` binary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "port-scan",
    version,
    about = "Full-range rustscan of a single target with captured output"
)]
pub struct PortScanOpt {
    /// Target IP address or hostname
    #[arg(value_name = "TARGET", value_parser = non_blank)]
    pub target: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info, env = "RECON_KIT_LOG_LEVEL")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, env = "RECON_KIT_LOG_FORMAT")]
    pub log_format: LogFormat,
}

/// Tunable rustscan parameters.
///
/// Every field is optional in the same way the rustscan flags are: a `None`
/// (or zero) value leaves the corresponding flag off the command line.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Port range passed with `-r`
    pub port_range: Option<String>,
    /// Batch size passed with `-b`
    pub batch_size: Option<u32>,
    /// File-descriptor limit passed with `--ulimit`
    pub ulimit: Option<u32>,
    /// Per-batch timeout in milliseconds, passed with `-t`
    pub batch_timeout_ms: Option<u32>,
    /// Whitespace-separated nmap flags appended after `--`
    pub nmap_options: Option<String>,
    /// Extra whitespace-separated flags appended last
    pub script_options: Option<String>,
    /// Wall-clock limit for the rustscan process
    pub timeout: Duration,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            port_range: Some(SCAN_PORT_RANGE.to_string()),
            batch_size: Some(SCAN_BATCH_SIZE),
            ulimit: Some(SCAN_ULIMIT),
            batch_timeout_ms: Some(SCAN_BATCH_TIMEOUT_MS),
            nmap_options: Some(SCAN_NMAP_OPTIONS.to_string()),
            script_options: None,
            timeout: SCAN_TIMEOUT,
        }
    }
}

/// Settings for the recon-ng step of a domain run.
#[derive(Debug, Clone)]
pub struct ReconSettings {
    /// Module command templates, run in order. `{domain}` is substituted.
    pub modules: Vec<String>,
}

impl Default for ReconSettings {
    fn default() -> Self {
        Self {
            modules: DEFAULT_RECON_MODULES
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_scan_options_default() {
        let opts = ScanOptions::default();
        assert_eq!(opts.port_range.as_deref(), Some("1-65535"));
        assert_eq!(opts.batch_size, Some(2000));
        assert_eq!(opts.ulimit, Some(5000));
        assert_eq!(opts.batch_timeout_ms, Some(2000));
        assert_eq!(opts.nmap_options.as_deref(), Some("-sC -sV"));
        assert!(opts.script_options.is_none());
        assert_eq!(opts.timeout, Duration::from_secs(300));
    }

    #[test]
    fn test_recon_settings_default_keeps_order() {
        let settings = ReconSettings::default();
        assert_eq!(settings.modules.len(), DEFAULT_RECON_MODULES.len());
        assert_eq!(settings.modules[0], "recon/domains-hosts/whois -d {domain}");
        assert_eq!(
            settings.modules.last().map(String::as_str),
            Some("recon/domains-contacts/github_commits -d {domain}")
        );
        assert!(settings
            .modules
            .iter()
            .all(|m| m.contains(crate::config::DOMAIN_PLACEHOLDER)));
    }

    #[test]
    fn test_domain_recon_opt_requires_domain() {
        assert!(DomainReconOpt::try_parse_from(["domain-recon"]).is_err());
    }

    #[test]
    fn test_domain_recon_opt_rejects_extra_positional() {
        assert!(DomainReconOpt::try_parse_from(["domain-recon", "a.com", "b.com"]).is_err());
    }

    #[test]
    fn test_port_scan_opt_parses_target() {
        let opt = PortScanOpt::try_parse_from(["port-scan", "10.0.0.1"]).expect("should parse");
        assert_eq!(opt.target, "10.0.0.1");
        assert_eq!(
            log::LevelFilter::from(opt.log_level),
            log::LevelFilter::Info
        );
    }
}
