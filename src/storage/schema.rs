//! Table definitions for the recon store.
//!
//! The four tables are independent; each natural key is the primary key so
//! `INSERT OR REPLACE` upserts instead of duplicating.

pub const CREATE_WHOIS_DATA: &str = "CREATE TABLE IF NOT EXISTS whois_data (
    domain TEXT PRIMARY KEY,
    registrar TEXT,
    whois_server TEXT,
    creation_date TEXT,
    expiration_date TEXT
)";

pub const CREATE_IP_GEOLOCATION: &str = "CREATE TABLE IF NOT EXISTS ip_geolocation (
    ip TEXT PRIMARY KEY,
    country TEXT,
    region TEXT,
    city TEXT,
    latitude REAL,
    longitude REAL
)";

pub const CREATE_DNS_LOOKUP: &str = "CREATE TABLE IF NOT EXISTS dns_lookup (
    domain TEXT,
    record_type TEXT,
    ttl INTEGER,
    address TEXT,
    PRIMARY KEY (domain, record_type, address)
)";

pub const CREATE_RECON_NG_DATA: &str = "CREATE TABLE IF NOT EXISTS recon_ng_data (
    module TEXT,
    domain TEXT,
    data TEXT,
    PRIMARY KEY (module, domain, data)
)";

/// Every table, in creation order.
pub const ALL_TABLES: &[&str] = &[
    CREATE_WHOIS_DATA,
    CREATE_IP_GEOLOCATION,
    CREATE_DNS_LOOKUP,
    CREATE_RECON_NG_DATA,
];
