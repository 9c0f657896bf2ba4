//! HTTP client initialization.

use reqwest::ClientBuilder;

use crate::config::HTTP_USER_AGENT;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for geolocation lookups.
///
/// No request timeout is set: lookups rely on the library defaults and the
/// coordinator never cancels them.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client() -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new().user_agent(HTTP_USER_AGENT).build()?;
    Ok(client)
}
