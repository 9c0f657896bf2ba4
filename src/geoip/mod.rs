//! IP geolocation via the ip-api.com JSON endpoint.

mod types;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::config::GEOLOCATION_ENDPOINT;
use crate::error_handling::InitializationError;
use crate::initialization::init_client;

pub use types::GeoRecord;
use types::IpApiResponse;

/// Source of geolocation data for IP addresses.
#[async_trait]
pub trait GeoLookup: Send + Sync {
    /// Locates `ip`. Failures are logged and reported as `None`.
    async fn lookup(&self, ip: &str) -> Option<GeoRecord>;
}

/// [`GeoLookup`] backed by ip-api.com over plain HTTP.
#[derive(Debug, Clone)]
pub struct IpApiClient {
    client: reqwest::Client,
    endpoint: String,
}

impl IpApiClient {
    pub fn new() -> Result<Self, InitializationError> {
        Ok(Self::with_client(init_client()?, GEOLOCATION_ENDPOINT))
    }

    /// Uses `client` and an endpoint prefix the IP address is appended to.
    pub fn with_client(client: reqwest::Client, endpoint: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.to_string(),
        }
    }

    async fn fetch(&self, ip: &str) -> Result<Option<GeoRecord>> {
        let url = format!("{}{}", self.endpoint, ip);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Request to {url} failed"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::warn!("Failed to get geolocation for IP {ip}: {status} {body}");
            return Ok(None);
        }

        let body: IpApiResponse = response
            .json()
            .await
            .context("Malformed geolocation response")?;

        match body.into_record(ip) {
            Ok(record) => Ok(Some(record)),
            Err(reason) => {
                log::warn!("Failed to get geolocation for IP {ip}: {reason}");
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl GeoLookup for IpApiClient {
    async fn lookup(&self, ip: &str) -> Option<GeoRecord> {
        match self.fetch(ip).await {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Geolocation lookup failed for {ip}: {e:#}");
                None
            }
        }
    }
}
