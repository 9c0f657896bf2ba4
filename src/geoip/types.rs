//! Geolocation data structures.

use std::fmt;

use serde::Deserialize;

use crate::utils::or_none;

/// Geolocation of one IP address.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoRecord {
    pub ip: String,
    pub country: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl fmt::Display for GeoRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "IP Geolocation for {}:", self.ip)?;
        writeln!(f, "ip: {}", self.ip)?;
        writeln!(f, "country: {}", or_none(&self.country))?;
        writeln!(f, "region: {}", or_none(&self.region))?;
        writeln!(f, "city: {}", or_none(&self.city))?;
        writeln!(f, "latitude: {}", coordinate(self.latitude))?;
        write!(f, "longitude: {}", coordinate(self.longitude))
    }
}

fn coordinate(value: Option<f64>) -> String {
    value.map_or_else(|| "None".to_string(), |v| v.to_string())
}

/// Response body from ip-api.com.
///
/// `status` is `"success"` or `"fail"`; on failure only `message` is set.
#[derive(Debug, Deserialize)]
pub(crate) struct IpApiResponse {
    pub(crate) status: String,
    pub(crate) message: Option<String>,
    pub(crate) country: Option<String>,
    #[serde(rename = "regionName")]
    pub(crate) region_name: Option<String>,
    pub(crate) city: Option<String>,
    pub(crate) lat: Option<f64>,
    pub(crate) lon: Option<f64>,
}

impl IpApiResponse {
    /// Converts a successful response into a record; `Err` carries the API's reason.
    pub(crate) fn into_record(self, ip: &str) -> Result<GeoRecord, String> {
        if self.status != "success" {
            return Err(self.message.unwrap_or(self.status));
        }
        Ok(GeoRecord {
            ip: ip.to_string(),
            country: self.country,
            region: self.region_name,
            city: self.city,
            latitude: self.lat,
            longitude: self.lon,
        })
    }
}
