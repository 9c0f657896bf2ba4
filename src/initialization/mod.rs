//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger (env_logger with plain or JSON formatting)
//! - HTTP client for geolocation
//! - DNS resolver

mod client;
mod logger;
mod resolver;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
pub use resolver::init_resolver;

/// Loads a `.env` file from the working directory, or next to the executable.
///
/// A missing file is not an error.
pub fn load_dotenv() {
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }
}
