//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (naming, endpoints, scan defaults, module list)
//! - Library configuration structs (`ScanOptions`, `ReconSettings`)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{DomainReconOpt, LogFormat, LogLevel, PortScanOpt, ReconSettings, ScanOptions};
