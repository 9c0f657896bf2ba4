// whois/mod.rs
// WHOIS domain lookup using the whois-rust crate

mod parse;
mod types;

use anyhow::{Context, Result};
use async_trait::async_trait;
use whois_rust::{WhoIs, WhoIsLookupOptions};

use crate::config::{WHOIS_FOLLOW_HOPS, WHOIS_ROOT_SERVER};

pub use types::WhoisRecord;

/// Source of WHOIS registration data.
#[async_trait]
pub trait WhoisLookup: Send + Sync {
    /// Looks up `domain`. Failures are logged and reported as `None`.
    async fn lookup(&self, domain: &str) -> Option<WhoisRecord>;
}

/// WHOIS client that queries IANA and follows registry/registrar referrals.
///
/// `whois-rust` does blocking socket I/O, so each lookup runs on the blocking
/// thread pool.
#[derive(Debug, Clone)]
pub struct WhoisClient {
    root_server: String,
    follow: u16,
}

impl WhoisClient {
    pub fn new() -> Self {
        Self {
            root_server: WHOIS_ROOT_SERVER.to_string(),
            follow: WHOIS_FOLLOW_HOPS,
        }
    }

    async fn fetch_raw(&self, domain: &str) -> Result<String> {
        let domain_owned = domain.to_string();
        let root_server = self.root_server.clone();
        let follow = self.follow;

        tokio::task::spawn_blocking(move || -> Result<String> {
            let whois = WhoIs::from_host(&root_server)
                .map_err(|e| anyhow::anyhow!("Invalid WHOIS server {root_server}: {e}"))?;
            let mut options = WhoIsLookupOptions::from_string(&domain_owned)
                .map_err(|e| anyhow::anyhow!("Invalid domain {domain_owned}: {e}"))?;
            options.follow = follow;
            whois
                .lookup(options)
                .map_err(|e| anyhow::anyhow!("{e}"))
        })
        .await
        .context("WHOIS task panicked")?
    }
}

impl Default for WhoisClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WhoisLookup for WhoisClient {
    async fn lookup(&self, domain: &str) -> Option<WhoisRecord> {
        log::info!("Starting WHOIS lookup for domain: {}", domain);

        match self.fetch_raw(domain).await {
            Ok(raw) => {
                let record = parse::parse_whois_response(domain, &raw);
                if record.is_empty() {
                    log::warn!("WHOIS response for {} had no registration fields", domain);
                } else {
                    log::info!("WHOIS lookup successful for {}", domain);
                }
                Some(record)
            }
            Err(e) => {
                log::warn!("WHOIS lookup failed for {}: {:#}", domain, e);
                None
            }
        }
    }
}
