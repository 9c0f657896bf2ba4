//! Configuration constants.
//!
//! Compile-time defaults for workspace naming, lookups, the recon-ng module
//! list and the rustscan command line. None of these are exposed as CLI flags.

use std::time::Duration;

// Workspace naming
/// `chrono` format for run timestamps (one-second resolution)
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";
/// File name of the SQLite store inside a recon workspace
pub const DB_FILE_NAME: &str = "recon-ng.db";
/// Infix between the sanitized domain and the timestamp in workspace names
pub const WORKSPACE_INFIX: &str = "results";

// Lookups
/// ip-api.com JSON endpoint; the IP address is appended to this prefix
pub const GEOLOCATION_ENDPOINT: &str = "http://ip-api.com/json/";
/// WHOIS server used for the first query; referrals are followed from here
pub const WHOIS_ROOT_SERVER: &str = "whois.iana.org";
/// Number of WHOIS referral hops to follow after the root query
pub const WHOIS_FOLLOW_HOPS: u16 = 2;
/// DNS record type stored for forward lookups
pub const DNS_RECORD_TYPE_A: &str = "A";

pub const HTTP_USER_AGENT: &str = concat!("recon_kit/", env!("CARGO_PKG_VERSION"));

// External tools
pub const RECON_NG_BINARY: &str = "recon-ng";
pub const RUSTSCAN_BINARY: &str = "rustscan";

/// Placeholder substituted with the target domain in module commands.
pub const DOMAIN_PLACEHOLDER: &str = "{domain}";

/// recon-ng module commands run against every domain, in order.
///
/// Each entry is passed to `recon-ng -C` after `{domain}` is replaced.
/// To add or remove modules, modify this array.
pub const DEFAULT_RECON_MODULES: &[&str] = &[
    "recon/domains-hosts/whois -d {domain}",
    "recon/domains-hosts/geoip -t default -d {domain}",
    "recon/domains-hosts/dns -t default -d {domain}",
    "recon/domains-hosts/reverse_dns -d {domain}",
    "recon/domains-hosts/shodan_hostname -d {domain}",
    "recon/domains-hosts/censys_hosts -d {domain}",
    "recon/domains-contacts/pgp_search -d {domain}",
    "recon/domains-contacts/github_commits -d {domain}",
];

// rustscan defaults
pub const SCAN_PORT_RANGE: &str = "1-65535";
pub const SCAN_BATCH_SIZE: u32 = 2000;
pub const SCAN_ULIMIT: u32 = 5000;
/// Per-batch timeout passed to rustscan with `-t`, in milliseconds
pub const SCAN_BATCH_TIMEOUT_MS: u32 = 2000;
/// Flags forwarded to nmap after `--`
pub const SCAN_NMAP_OPTIONS: &str = "-sC -sV";
/// Wall-clock limit for a whole rustscan run
pub const SCAN_TIMEOUT: Duration = Duration::from_secs(300);

// Package management
pub const PRIVILEGE_ESCALATION: &str = "sudo";
pub const PACKAGE_MANAGER: &str = "apt";
