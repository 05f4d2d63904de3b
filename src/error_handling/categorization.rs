//! Error categorization.
//!
//! Maps library errors from the resolver and the HTTP client onto the
//! application's own failure values, so callers never see `hickory` or `reqwest`
//! error types.

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;

use super::types::{DnsAbsence, DnsFailure, FetchFailure};

/// Categorizes a `ResolveError` into an absence or a failure.
///
/// `NoRecordsFound` is not a failure: NXDOMAIN maps to `NoSuchDomain`, any other
/// response code (usually NOERROR/NODATA) to `NoSuchRecord`.
pub fn categorize_resolve_error(error: &ResolveError) -> Result<DnsAbsence, DnsFailure> {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            if *response_code == ResponseCode::NXDomain {
                Ok(DnsAbsence::NoSuchDomain)
            } else {
                Ok(DnsAbsence::NoSuchRecord)
            }
        }
        ResolveErrorKind::Timeout => Err(DnsFailure::Timeout),
        _ => {
            // Timeouts raised below the resolver surface as proto errors
            let error_msg = error.to_string();
            if error_msg.contains("timeout") || error_msg.contains("timed out") {
                Err(DnsFailure::Timeout)
            } else {
                Err(DnsFailure::Resolution(error_msg))
            }
        }
    }
}

/// Categorizes a non-success HTTP status code.
pub fn categorize_status(status: u16) -> FetchFailure {
    if (300..400).contains(&status) {
        FetchFailure::Redirect(status)
    } else {
        FetchFailure::Status(status)
    }
}

/// Categorizes a `reqwest::Error` into a `FetchFailure`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FetchFailure {
    if let Some(status) = error.status() {
        return categorize_status(status.as_u16());
    }
    if error.is_timeout() {
        FetchFailure::Timeout
    } else if error.is_connect() {
        FetchFailure::Connect(root_cause(error))
    } else if error.is_builder() {
        FetchFailure::InvalidUrl(root_cause(error))
    } else if error.is_redirect() {
        FetchFailure::Other(format!("too many redirects: {}", root_cause(error)))
    } else {
        FetchFailure::Other(root_cause(error))
    }
}

/// Innermost error message, which is where reqwest keeps the useful detail
/// (DNS failure, certificate problem, refused connection).
fn root_cause(error: &(dyn std::error::Error + 'static)) -> String {
    let mut current = error;
    while let Some(source) = current.source() {
        current = source;
    }
    current.to_string()
}
