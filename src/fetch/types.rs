//! HTTP fetch types.

use std::future::Future;

use crate::error_handling::FetchFailure;

/// Outcome of a single HTTP GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// The server answered 2xx.
    Success {
        /// Response status code
        status: u16,
        /// Whether a non-empty body was received
        has_body: bool,
    },
    /// Timeout, connection error, non-2xx status, or unusable URL.
    Failed(FetchFailure),
}

impl FetchResult {
    /// True for a 2xx answer.
    pub fn is_success(&self) -> bool {
        matches!(self, FetchResult::Success { .. })
    }
}

/// HTTP GET capability used by the MTA-STS and BIMI checks.
///
/// Implementations make exactly one attempt per call and never return errors:
/// every outcome is folded into a [`FetchResult`].
pub trait HttpFetch: Send + Sync {
    /// Fetches `url`.
    fn fetch(&self, url: &str) -> impl Future<Output = FetchResult> + Send;
}
