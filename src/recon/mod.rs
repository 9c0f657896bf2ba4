//! Domain-recon coordinator.
//!
//! A run is a fixed, linear sequence:
//! 1. workspace setup (the only fatal step)
//! 2. WHOIS lookup and persist
//! 3. DNS lookup and persist, then geolocation of every resolved address
//! 4. recon-ng module commands, each capture persisted even when empty
//!
//! Lookup misses are skipped and persistence failures are recorded in the
//! report; neither stops the run.

mod framework;
mod report;

use std::path::Path;
use std::time::Instant;

use chrono::Local;

use crate::config::ReconSettings;
use crate::dns::{DnsLookup, HickoryDns};
use crate::error_handling::{InitializationError, StorageError};
use crate::geoip::{GeoLookup, IpApiClient};
use crate::process::Capability;
use crate::storage::ReconSink;
use crate::whois::{WhoisClient, WhoisLookup};
use crate::workspace::{run_timestamp, Workspace};

pub use framework::{render_module_command, ReconFramework, ReconNg};
pub use report::{ReconReport, ReconStep, StepFailure};

/// Drives lookups, persistence and recon-ng for one domain at a time.
pub struct DomainRecon {
    whois: Box<dyn WhoisLookup>,
    dns: Box<dyn DnsLookup>,
    geo: Box<dyn GeoLookup>,
    framework: Box<dyn ReconFramework>,
    settings: ReconSettings,
}

impl DomainRecon {
    pub fn new(
        whois: Box<dyn WhoisLookup>,
        dns: Box<dyn DnsLookup>,
        geo: Box<dyn GeoLookup>,
        framework: Box<dyn ReconFramework>,
        settings: ReconSettings,
    ) -> Self {
        Self {
            whois,
            dns,
            geo,
            framework,
            settings,
        }
    }

    /// Coordinator wired to the real WHOIS, DNS, ip-api and recon-ng backends.
    pub fn with_defaults() -> Result<Self, InitializationError> {
        Ok(Self::new(
            Box::new(WhoisClient::new()),
            Box::new(HickoryDns::new()),
            Box::new(IpApiClient::new()?),
            Box::new(ReconNg::default()),
            ReconSettings::default(),
        ))
    }

    /// Runs against `domain` in a new timestamped workspace under `base_dir`.
    ///
    /// # Errors
    ///
    /// Only workspace setup is fatal; everything after it is absorbed.
    pub async fn run(&self, domain: &str, base_dir: &Path) -> Result<ReconReport, StorageError> {
        let timestamp = run_timestamp(Local::now());
        let workspace = Workspace::create(base_dir, domain, &timestamp).await?;
        Ok(self.run_in(&workspace, domain).await)
    }

    /// Runs steps 2-4 against an existing workspace.
    pub async fn run_in(&self, workspace: &Workspace, domain: &str) -> ReconReport {
        let start = Instant::now();
        let sink = workspace.sink();
        let mut report = ReconReport {
            domain: domain.to_string(),
            workspace_dir: workspace.dir.clone(),
            db_path: workspace.db_path.clone(),
            log_path: workspace.log_path.clone(),
            whois_stored: false,
            dns_records: 0,
            geolocations: 0,
            modules_stored: 0,
            framework_skipped: false,
            failures: Vec::new(),
            elapsed_seconds: 0.0,
        };

        self.whois_step(&sink, domain, &mut report).await;
        self.dns_step(&sink, domain, &mut report).await;
        self.framework_step(&sink, domain, &mut report).await;

        report.elapsed_seconds = start.elapsed().as_secs_f64();
        report
    }

    async fn whois_step(&self, sink: &ReconSink, domain: &str, report: &mut ReconReport) {
        let Some(record) = self.whois.lookup(domain).await else {
            return;
        };
        match sink.record_whois(&record).await {
            Ok(()) => report.whois_stored = true,
            Err(e) => report.record_failure(ReconStep::Whois, domain, e),
        }
    }

    async fn dns_step(&self, sink: &ReconSink, domain: &str, report: &mut ReconReport) {
        let records = match self.dns.lookup(domain).await {
            Some(records) if !records.is_empty() => records,
            _ => {
                log::info!("No A records for {domain}; skipping geolocation");
                return;
            }
        };

        match sink.record_dns(&records).await {
            Ok(()) => report.dns_records = records.len(),
            Err(e) => report.record_failure(ReconStep::Dns, domain, e),
        }

        for record in &records {
            let Some(geo) = self.geo.lookup(&record.address).await else {
                continue;
            };
            match sink.record_geolocation(&geo).await {
                Ok(()) => report.geolocations += 1,
                Err(e) => report.record_failure(ReconStep::Geolocation, &record.address, e),
            }
        }
    }

    async fn framework_step(&self, sink: &ReconSink, domain: &str, report: &mut ReconReport) {
        if self.settings.modules.is_empty() {
            return;
        }
        if let Capability::Unavailable(reason) = self.framework.prepare().await {
            log::error!("Skipping recon-ng modules: {reason}");
            report.framework_skipped = true;
            return;
        }

        log::info!("Running recon-ng commands...");
        for template in &self.settings.modules {
            let command = render_module_command(template, domain);
            let stdout = match self.framework.run_module(&command).await {
                Ok(outcome) => {
                    if !outcome.success() {
                        log::warn!(
                            "recon-ng exited with {:?} for '{command}': {}",
                            outcome.code(),
                            outcome.stderr.trim()
                        );
                    }
                    outcome.stdout
                }
                Err(e) => {
                    log::error!("Error running recon-ng command '{command}': {e}");
                    continue;
                }
            };

            log::info!("Recon-ng Output for '{command}':\n{stdout}");
            match sink.record_module_output(&command, domain, &stdout).await {
                Ok(()) => report.modules_stored += 1,
                Err(e) => report.record_failure(ReconStep::Framework, &command, e),
            }
        }
    }
}
