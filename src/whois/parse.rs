//! WHOIS response parsing.
//!
//! Responses are loosely structured `Key: Value` text that differs per
//! registry. The first matching line wins for each field.

use super::types::WhoisRecord;

const REGISTRAR_KEYS: &[&str] = &["registrar:", "registrar name:", "sponsoring registrar:"];

const WHOIS_SERVER_KEYS: &[&str] = &[
    "registrar whois server:",
    "whois server:",
    "whois:",
    "refer:",
];

const CREATION_KEYS: &[&str] = &[
    "creation date:",
    "created:",
    "created on:",
    "registration date:",
    "registered on:",
    "domain registration date:",
];

const EXPIRATION_KEYS: &[&str] = &[
    "registry expiry date:",
    "registrar registration expiration date:",
    "expiration date:",
    "expiry date:",
    "expires:",
    "expires on:",
    "paid-till:",
    "domain expiration date:",
];

/// Builds a [`WhoisRecord`] for `domain` from a raw WHOIS response.
pub(crate) fn parse_whois_response(domain: &str, raw: &str) -> WhoisRecord {
    let mut record = WhoisRecord {
        domain: domain.to_string(),
        ..Default::default()
    };

    // Nominet (.uk) puts the registrar name on the first indented line under a bare
    // "Registrar:", sometimes behind a "Name:" label
    let mut in_registrar_block = false;

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('%') || trimmed.starts_with('#') {
            in_registrar_block = false;
            continue;
        }
        let lower = trimmed.to_lowercase();

        if in_registrar_block {
            if line.starts_with(' ') || line.starts_with('\t') {
                if record.registrar.is_none() {
                    record.registrar = if lower.starts_with("name:") {
                        field_value(trimmed)
                    } else {
                        Some(trimmed.to_string())
                    };
                }
                continue;
            }
            in_registrar_block = false;
        }

        if record.registrar.is_none() && starts_with_any(&lower, REGISTRAR_KEYS) {
            match field_value(trimmed) {
                Some(value) => record.registrar = Some(value),
                None if lower == "registrar:" => in_registrar_block = true,
                None => {}
            }
            continue;
        }

        if record.whois_server.is_none() && starts_with_any(&lower, WHOIS_SERVER_KEYS) {
            record.whois_server = field_value(trimmed);
        } else if record.creation_date.is_none() && starts_with_any(&lower, CREATION_KEYS) {
            record.creation_date = field_value(trimmed);
        } else if record.expiration_date.is_none() && starts_with_any(&lower, EXPIRATION_KEYS) {
            record.expiration_date = field_value(trimmed);
        }
    }

    record
}

fn starts_with_any(lower: &str, keys: &[&str]) -> bool {
    keys.iter().any(|key| lower.starts_with(key))
}

/// Value after the first colon, keeping colons inside timestamps.
fn field_value(line: &str) -> Option<String> {
    let pos = line.find(':')?;
    let value = line[pos + 1..].trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERISIGN_STYLE: &str = "\
   Domain Name: EXAMPLE.COM
   Registry Domain ID: 2336799_DOMAIN_COM-VRSN
   Registrar WHOIS Server: whois.iana.org
   Registrar URL: http://res-dom.iana.org
   Updated Date: 2024-08-14T07:01:34Z
   Creation Date: 1995-08-14T04:00:00Z
   Registry Expiry Date: 2025-08-13T04:00:00Z
   Registrar: RESERVED-Internet Assigned Numbers Authority
   Registrar IANA ID: 376
";

    const NOMINET_STYLE: &str = "\
    Domain name:
        example.co.uk

    Registrar:
        Some Registrar Ltd [Tag = EXAMPLE]
        URL: https://registrar.example

    Relevant dates:
        Registered on: 26-Nov-1996
        Expiry date:  26-Nov-2026
";

    #[test]
    fn test_parse_verisign_response() {
        let record = parse_whois_response("example.com", VERISIGN_STYLE);
        assert_eq!(record.domain, "example.com");
        assert_eq!(
            record.registrar.as_deref(),
            Some("RESERVED-Internet Assigned Numbers Authority")
        );
        assert_eq!(record.whois_server.as_deref(), Some("whois.iana.org"));
        assert_eq!(record.creation_date.as_deref(), Some("1995-08-14T04:00:00Z"));
        assert_eq!(record.expiration_date.as_deref(), Some("2025-08-13T04:00:00Z"));
    }

    #[test]
    fn test_registrar_iana_id_does_not_override_registrar() {
        let record = parse_whois_response("example.com", VERISIGN_STYLE);
        assert!(!record.registrar.unwrap_or_default().contains("376"));
    }

    #[test]
    fn test_parse_nominet_indented_registrar() {
        let record = parse_whois_response("example.co.uk", NOMINET_STYLE);
        assert_eq!(
            record.registrar.as_deref(),
            Some("Some Registrar Ltd [Tag = EXAMPLE]")
        );
        assert_eq!(record.creation_date.as_deref(), Some("26-Nov-1996"));
        assert_eq!(record.expiration_date.as_deref(), Some("26-Nov-2026"));
    }

    #[test]
    fn test_nominet_registrar_with_name_label() {
        let raw = NOMINET_STYLE.replace("        Some Registrar", "        Name: Some Registrar");
        let record = parse_whois_response("example.co.uk", &raw);
        assert_eq!(
            record.registrar.as_deref(),
            Some("Some Registrar Ltd [Tag = EXAMPLE]")
        );
    }

    #[test]
    fn test_parse_empty_response() {
        let record = parse_whois_response("example.invalid", "% No match for domain\n");
        assert!(record.is_empty());
        assert_eq!(record.domain, "example.invalid");
    }

    #[test]
    fn test_iana_refer_line_sets_server() {
        let raw = "% IANA WHOIS server\nrefer:        whois.verisign-grs.com\n\ndomain:       COM\n";
        let record = parse_whois_response("example.com", raw);
        assert_eq!(record.whois_server.as_deref(), Some("whois.verisign-grs.com"));
    }

    #[test]
    fn test_field_value_keeps_timestamp_colons() {
        assert_eq!(
            field_value("Creation Date: 1995-08-14T04:00:00Z").as_deref(),
            Some("1995-08-14T04:00:00Z")
        );
        assert_eq!(field_value("Registrar:"), None);
    }
}
