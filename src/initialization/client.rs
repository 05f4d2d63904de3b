//! HTTP client initialization.
//!
//! This module provides functions to initialize the HTTP client used for the
//! MTA-STS policy and BIMI logo fetches.

use std::sync::Arc;

use crate::config::Config;
use reqwest::{redirect, ClientBuilder};

/// Initializes the HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Per-request timeout from the configuration
/// - Redirect policy: none followed when `max_redirects` is 0, otherwise up to
///   `max_redirects` hops
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let policy = if config.max_redirects == 0 {
        redirect::Policy::none()
    } else {
        redirect::Policy::limited(config.max_redirects)
    };
    let client = ClientBuilder::new()
        .redirect(policy)
        .timeout(config.http_timeout())
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
