//! DNS forward lookups.
//!
//! Only A records are queried. The stored TTL is the one reported by the
//! resolver for each answer record.

mod records;

use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;

use crate::initialization::init_resolver;

pub use records::{render_dns_records, DnsRecord};

/// Source of A records for a domain.
#[async_trait]
pub trait DnsLookup: Send + Sync {
    /// Resolves `domain`. Failures, including NXDOMAIN and no-data answers, are
    /// logged and reported as `None`. An empty vector means the same to callers.
    async fn lookup(&self, domain: &str) -> Option<Vec<DnsRecord>>;
}

/// [`DnsLookup`] backed by the hickory resolver.
pub struct HickoryDns {
    resolver: TokioAsyncResolver,
}

impl HickoryDns {
    pub fn new() -> Self {
        Self::with_resolver(init_resolver())
    }

    pub fn with_resolver(resolver: TokioAsyncResolver) -> Self {
        Self { resolver }
    }
}

impl Default for HickoryDns {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsLookup for HickoryDns {
    async fn lookup(&self, domain: &str) -> Option<Vec<DnsRecord>> {
        match self.resolver.ipv4_lookup(domain).await {
            Ok(lookup) => {
                let records = records::extract_a_records(domain, lookup.as_lookup().record_iter());
                log::info!("Resolved {} A record(s) for {}", records.len(), domain);
                Some(records)
            }
            Err(e) => {
                log::warn!("DNS lookup failed for {domain}: {e}");
                None
            }
        }
    }
}
