//! Summary of a domain run.

use std::fmt;
use std::path::PathBuf;

/// Step of a domain run whose result could not be persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconStep {
    Whois,
    Dns,
    Geolocation,
    Framework,
}

impl ReconStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReconStep::Whois => "WHOIS",
            ReconStep::Dns => "DNS",
            ReconStep::Geolocation => "geolocation",
            ReconStep::Framework => "recon-ng",
        }
    }
}

/// A failure absorbed during the run.
#[derive(Debug, Clone)]
pub struct StepFailure {
    pub step: ReconStep,
    /// Domain, IP address or module command the failure relates to
    pub subject: String,
    pub message: String,
}

/// Outcome of a domain run.
#[derive(Debug, Clone)]
pub struct ReconReport {
    pub domain: String,
    pub workspace_dir: PathBuf,
    pub db_path: PathBuf,
    pub log_path: PathBuf,
    /// Whether a WHOIS record was stored
    pub whois_stored: bool,
    /// Number of DNS records stored
    pub dns_records: usize,
    /// Number of geolocation records stored
    pub geolocations: usize,
    /// Number of module captures stored
    pub modules_stored: usize,
    /// Whether the framework step was skipped because recon-ng was unavailable
    pub framework_skipped: bool,
    pub failures: Vec<StepFailure>,
    pub elapsed_seconds: f64,
}

impl ReconReport {
    pub(crate) fn record_failure(&mut self, step: ReconStep, subject: &str, error: impl fmt::Display) {
        log::error!("Failed to store {} result for {subject}: {error}", step.as_str());
        self.failures.push(StepFailure {
            step,
            subject: subject.to_string(),
            message: error.to_string(),
        });
    }
}

impl fmt::Display for ReconReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Recon of {} finished in {:.1}s: WHOIS {}, {} DNS record{}, {} geolocation{}, {} recon-ng capture{}",
            self.domain,
            self.elapsed_seconds,
            if self.whois_stored { "stored" } else { "missing" },
            self.dns_records,
            if self.dns_records == 1 { "" } else { "s" },
            self.geolocations,
            if self.geolocations == 1 { "" } else { "s" },
            self.modules_stored,
            if self.modules_stored == 1 { "" } else { "s" },
        )?;
        if self.framework_skipped {
            write!(f, " (recon-ng unavailable)")?;
        }
        if !self.failures.is_empty() {
            write!(f, ", {} failed write(s)", self.failures.len())?;
        }
        Ok(())
    }
}
