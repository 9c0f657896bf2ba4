//! Persistence sink: database write, then run-log write, per entity.
//!
//! Each call is self-contained. The log entry is only written after the row
//! is committed, and a failed call leaves other entities untouched.

use crate::dns::{render_dns_records, DnsRecord};
use crate::error_handling::StorageError;
use crate::geoip::GeoRecord;
use crate::whois::WhoisRecord;

use super::{RunLog, Store};

/// Writes lookup results and module captures for one run.
#[derive(Debug, Clone)]
pub struct ReconSink {
    store: Store,
    log: RunLog,
}

impl ReconSink {
    pub fn new(store: Store, log: RunLog) -> Self {
        Self { store, log }
    }

    pub fn log(&self) -> &RunLog {
        &self.log
    }

    pub async fn record_whois(&self, record: &WhoisRecord) -> Result<(), StorageError> {
        self.store.upsert_whois(record).await?;
        self.log.append(&record.to_string()).await
    }

    /// Persists all records of one DNS lookup. An empty slice writes nothing.
    pub async fn record_dns(&self, records: &[DnsRecord]) -> Result<(), StorageError> {
        if records.is_empty() {
            return Ok(());
        }
        self.store.upsert_dns(records).await?;
        self.log.append(&render_dns_records(records)).await
    }

    pub async fn record_geolocation(&self, record: &GeoRecord) -> Result<(), StorageError> {
        self.store.upsert_geolocation(record).await?;
        self.log.append(&record.to_string()).await
    }

    pub async fn record_module_output(
        &self,
        module: &str,
        domain: &str,
        data: &str,
    ) -> Result<(), StorageError> {
        self.store.upsert_module_output(module, domain, data).await?;
        self.log
            .append(&format!("Recon-ng Data for {module} on {domain}:\n{data}"))
            .await
    }
}
