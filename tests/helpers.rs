// Shared fakes for the coordinator tests.
//
// Each fake records how often it was called so tests can assert which steps ran.

#![allow(dead_code)] // Not every test file uses every fake

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sqlx::Row;

use recon_kit::dns::{DnsLookup, DnsRecord};
use recon_kit::error_handling::{InstallError, ProcessError};
use recon_kit::geoip::{GeoLookup, GeoRecord};
use recon_kit::process::{Capability, PackageInstaller, ProcessOutcome, ToolLocator};
use recon_kit::recon::ReconFramework;
use recon_kit::storage::Store;
use recon_kit::whois::{WhoisLookup, WhoisRecord};

pub struct FakeWhois {
    pub record: Option<WhoisRecord>,
    pub calls: Arc<AtomicUsize>,
}

impl FakeWhois {
    pub fn returning(record: Option<WhoisRecord>) -> Self {
        Self {
            record,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl WhoisLookup for FakeWhois {
    async fn lookup(&self, _domain: &str) -> Option<WhoisRecord> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.record.clone()
    }
}

pub struct FakeDns {
    pub records: Option<Vec<DnsRecord>>,
    pub calls: Arc<AtomicUsize>,
}

impl FakeDns {
    pub fn returning(records: Option<Vec<DnsRecord>>) -> Self {
        Self {
            records,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl DnsLookup for FakeDns {
    async fn lookup(&self, _domain: &str) -> Option<Vec<DnsRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.records.clone()
    }
}

/// Geolocates every address to the same city unless it is listed in `missing`.
pub struct FakeGeo {
    pub missing: Vec<String>,
    pub calls: Arc<AtomicUsize>,
}

impl FakeGeo {
    pub fn new() -> Self {
        Self {
            missing: Vec::new(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl GeoLookup for FakeGeo {
    async fn lookup(&self, ip: &str) -> Option<GeoRecord> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.missing.iter().any(|m| m == ip) {
            return None;
        }
        Some(GeoRecord {
            ip: ip.to_string(),
            country: Some("United States".to_string()),
            region: Some("California".to_string()),
            city: Some("Los Angeles".to_string()),
            latitude: Some(34.05),
            longitude: Some(-118.24),
        })
    }
}

/// Framework whose modules print canned output; unknown modules print nothing.
pub struct FakeFramework {
    pub available: bool,
    pub outputs: HashMap<String, String>,
    pub failing: Vec<String>,
    pub invoked: Arc<Mutex<Vec<String>>>,
}

impl FakeFramework {
    pub fn available() -> Self {
        Self {
            available: true,
            outputs: HashMap::new(),
            failing: Vec::new(),
            invoked: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::available()
        }
    }
}

#[async_trait]
impl ReconFramework for FakeFramework {
    async fn prepare(&self) -> Capability {
        if self.available {
            Capability::Available(PathBuf::from("/usr/bin/recon-ng"))
        } else {
            Capability::Unavailable("recon-ng not found on PATH after install".to_string())
        }
    }

    async fn run_module(&self, command: &str) -> Result<ProcessOutcome, ProcessError> {
        self.invoked.lock().unwrap().push(command.to_string());
        if self.failing.iter().any(|f| f == command) {
            return Err(ProcessError::NotFound {
                command: "recon-ng".to_string(),
            });
        }
        let stdout = self.outputs.get(command).cloned().unwrap_or_default();
        Ok(exited_cleanly(&stdout))
    }
}

/// Builds a [`ProcessOutcome`] for a process that exited with status 0.
pub fn exited_cleanly(stdout: &str) -> ProcessOutcome {
    ProcessOutcome {
        status: std::process::ExitStatus::default(),
        stdout: stdout.to_string(),
        stderr: String::new(),
        elapsed: std::time::Duration::from_millis(5),
    }
}

pub struct FixedLocator(pub Option<PathBuf>);

impl ToolLocator for FixedLocator {
    fn locate(&self, _tool: &str) -> Option<PathBuf> {
        self.0.clone()
    }
}

pub struct RefusingInstaller {
    pub calls: Arc<AtomicUsize>,
}

impl RefusingInstaller {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl PackageInstaller for RefusingInstaller {
    async fn install(&self, _package: &str) -> Result<(), InstallError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(InstallError::UnsupportedPlatform("test".to_string()))
    }
}

pub fn a_record(domain: &str, address: &str) -> DnsRecord {
    DnsRecord {
        domain: domain.to_string(),
        record_type: "A".to_string(),
        ttl: 300,
        address: address.to_string(),
    }
}

pub async fn count_rows(store: &Store, table: &str) -> i64 {
    let mut conn = store.connect().await.expect("Failed to open store");
    sqlx::query(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(&mut conn)
        .await
        .expect("Failed to count rows")
        .get::<i64, _>(0)
}
