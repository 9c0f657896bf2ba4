//! recon_kit library: domain reconnaissance and port-scan orchestration
//!
//! Two coordinators sit on top of a small set of adapters:
//!
//! - [`DomainRecon`] gathers WHOIS, DNS A records and IP geolocation for a
//!   domain, then runs a fixed list of recon-ng modules. Every result goes into
//!   a per-run SQLite database and a plain-text log inside a timestamped
//!   workspace directory.
//! - [`PortScan`] drives rustscan against a host or IP under a wall-clock limit
//!   and saves its output to a timestamped file.
//!
//! # Example
//!
//! ```no_run
//! use recon_kit::DomainRecon;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let recon = DomainRecon::with_defaults()?;
//! let report = recon.run("example.com", std::path::Path::new(".")).await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod config;
pub mod dns;
pub mod error_handling;
pub mod geoip;
pub mod initialization;
pub mod process;
pub mod recon;
pub mod scan;
pub mod storage;
pub mod utils;
pub mod whois;
pub mod workspace;

// Re-export public API
pub use config::{DomainReconOpt, LogFormat, LogLevel, PortScanOpt, ReconSettings, ScanOptions};
pub use error_handling::{ProcessError, ScanError, StorageError};
pub use recon::{DomainRecon, ReconReport};
pub use scan::{PortScan, ScanOutcome, ScanReport};
