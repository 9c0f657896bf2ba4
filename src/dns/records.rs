//! DNS record types and extraction from resolver answers.

use std::fmt;

use hickory_resolver::proto::rr::{RData, Record};

use crate::config::DNS_RECORD_TYPE_A;

/// One resolved address for a domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub domain: String,
    pub record_type: String,
    pub ttl: u32,
    pub address: String,
}

impl fmt::Display for DnsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "domain: {}", self.domain)?;
        writeln!(f, "record_type: {}", self.record_type)?;
        writeln!(f, "ttl: {}", self.ttl)?;
        write!(f, "address: {}", self.address)
    }
}

/// Renders a batch of records for the run log.
pub fn render_dns_records(records: &[DnsRecord]) -> String {
    let domain = records.first().map(|r| r.domain.as_str()).unwrap_or_default();
    let mut content = format!("DNS Data for {domain}:\n");
    for record in records {
        content.push_str(&record.to_string());
        content.push('\n');
    }
    content
}

/// Collects the A records of an answer, in answer order, without duplicates.
///
/// CNAME and other records that come back with the answer are skipped; the
/// stored domain is always the queried name.
pub(crate) fn extract_a_records<'a>(
    domain: &str,
    answers: impl IntoIterator<Item = &'a Record>,
) -> Vec<DnsRecord> {
    let mut records: Vec<DnsRecord> = Vec::new();
    for answer in answers {
        if let Some(RData::A(a)) = answer.data() {
            let address = a.0.to_string();
            if records.iter().any(|r| r.address == address) {
                continue;
            }
            records.push(DnsRecord {
                domain: domain.to_string(),
                record_type: DNS_RECORD_TYPE_A.to_string(),
                ttl: answer.ttl(),
                address,
            });
        }
    }
    records
}
