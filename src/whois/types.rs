//! WHOIS data structures.

use std::fmt;

use crate::utils::or_none;

/// Registration data for one domain.
///
/// All fields are free text as reported by the registry or registrar; date
/// formats vary by TLD and are stored unparsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhoisRecord {
    pub domain: String,
    pub registrar: Option<String>,
    pub whois_server: Option<String>,
    pub creation_date: Option<String>,
    pub expiration_date: Option<String>,
}

impl WhoisRecord {
    /// True when the response carried none of the tracked fields.
    pub fn is_empty(&self) -> bool {
        self.registrar.is_none()
            && self.whois_server.is_none()
            && self.creation_date.is_none()
            && self.expiration_date.is_none()
    }
}

impl fmt::Display for WhoisRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "WHOIS Data for {}:", self.domain)?;
        writeln!(f, "domain: {}", self.domain)?;
        writeln!(f, "registrar: {}", or_none(&self.registrar))?;
        writeln!(f, "whois_server: {}", or_none(&self.whois_server))?;
        writeln!(f, "creation_date: {}", or_none(&self.creation_date))?;
        write!(f, "expiration_date: {}", or_none(&self.expiration_date))
    }
}
