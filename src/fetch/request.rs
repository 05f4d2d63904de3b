//! reqwest-backed fetcher.

use std::sync::Arc;

use log::{debug, warn};

use super::types::{FetchResult, HttpFetch};
use crate::error_handling::{categorize_reqwest_error, categorize_status, FetchFailure};

/// Request headers sent with every fetch, besides the client's User-Agent.
///
/// Policy hosts and logo CDNs sometimes reject requests that look automated;
/// a browser-style `Accept` keeps us from being refused on header analysis.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder.header(reqwest::header::ACCEPT, "*/*")
    }
}

/// [`HttpFetch`] backed by a shared `reqwest::Client`.
///
/// Timeout, User-Agent and redirect policy come from the client (see
/// [`crate::initialization::init_client`]). One attempt per fetch; no retries.
#[derive(Clone)]
pub struct ReqwestFetcher {
    client: Arc<reqwest::Client>,
}

impl ReqwestFetcher {
    /// Wraps a configured client.
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }
}

impl HttpFetch for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> FetchResult {
        let parsed = match url::Url::parse(url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => parsed,
            Ok(parsed) => {
                return FetchResult::Failed(FetchFailure::InvalidUrl(format!(
                    "unsupported scheme '{}'",
                    parsed.scheme()
                )))
            }
            Err(e) => return FetchResult::Failed(FetchFailure::InvalidUrl(e.to_string())),
        };

        debug!("Fetching {url}");
        let request = RequestHeaders::apply_to_request_builder(self.client.get(parsed));
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                let failure = categorize_reqwest_error(&e);
                warn!("Failed to fetch {url}: {failure}");
                return FetchResult::Failed(failure);
            }
        };

        let status = response.status();
        if !status.is_success() {
            debug!("{url} answered {status}");
            return FetchResult::Failed(categorize_status(status.as_u16()));
        }

        // The client timeout also covers the body, so a stalled transfer fails here
        let has_body = match response.bytes().await {
            Ok(body) => !body.is_empty(),
            Err(e) => {
                let failure = categorize_reqwest_error(&e);
                warn!("Failed to read body of {url}: {failure}");
                return FetchResult::Failed(failure);
            }
        };

        FetchResult::Success {
            status: status.as_u16(),
            has_body,
        }
    }
}
