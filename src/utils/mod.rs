//! Utility functions.
//!
//! This module provides:
//! - File-name sanitization for targets and domains
//! - Rendering helpers shared by the run-log renderers

pub mod sanitize;

pub use sanitize::{sanitize_domain, sanitize_target};

/// Renders an optional field for the run log, printing `None` when absent.
pub(crate) fn or_none(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("None")
}
