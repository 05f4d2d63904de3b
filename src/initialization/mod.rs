//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - Logger
//! - HTTP client (timeout, User-Agent, redirect policy)
//! - DNS resolver
//!
//! and to wrap them in the adapters the checks consume.

mod client;
mod logger;
mod resolver;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::dns::HickoryLookup;
use crate::fetch::ReqwestFetcher;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
pub use resolver::init_resolver;

/// Builds the DNS and HTTP adapters for a run.
///
/// Must be called from within a Tokio runtime.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built (e.g. invalid
/// User-Agent header value).
pub fn init_adapters(config: &Config) -> Result<(HickoryLookup, ReqwestFetcher)> {
    let resolver = init_resolver(config);
    let client = init_client(config)
        .map_err(crate::error_handling::InitializationError::from)
        .context("Failed to initialize HTTP client")?;
    Ok((
        HickoryLookup::new(resolver, config.dns_timeout()),
        ReqwestFetcher::new(client),
    ))
}
