//! HTTP fetch adapter.
//!
//! Provides the [`HttpFetch`] seam used to check that MTA-STS policy files and
//! BIMI logos are reachable, and a `reqwest` implementation of it.

mod request;
mod types;

// Re-export public API
pub use request::ReqwestFetcher;
pub use types::{FetchResult, HttpFetch};
