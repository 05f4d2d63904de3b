//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;

use crate::config::{Config, DNS_ATTEMPTS};
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

/// Initializes the DNS resolver for record lookups.
///
/// Creates a DNS resolver using the default upstream configuration (Google
/// public DNS) with the configured per-query timeout, a single attempt and
/// `ndots = 0` so the queried names are never extended with search domains.
///
/// Must be called from within a Tokio runtime.
pub fn init_resolver(config: &Config) -> Arc<TokioAsyncResolver> {
    let mut opts = ResolverOpts::default();
    opts.timeout = config.dns_timeout();
    opts.attempts = DNS_ATTEMPTS;
    opts.ndots = 0;

    Arc::new(TokioAsyncResolver::tokio(ResolverConfig::default(), opts))
}
