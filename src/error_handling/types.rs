//! Error type definitions.
//!
//! This module defines the error types used throughout the application. Adapter
//! failures (DNS, HTTP) are plain values that validators turn into report
//! statuses; only input and initialization errors end a run.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors in the domain supplied by the user. These are the only fatal errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Nothing (or only whitespace) was supplied.
    #[error("No domain given")]
    EmptyDomain,

    /// The input is not a syntactically valid DNS name.
    #[error("Invalid domain '{input}': {reason}")]
    MalformedDomain {
        /// What the user typed
        input: String,
        /// Why it was rejected
        reason: String,
    },

    /// Standard input closed before a domain was entered.
    #[error("No domain entered before end of input")]
    EndOfInput,

    /// Reading the answer or writing the prompt failed (e.g. input that is not UTF-8).
    #[error("Could not read domain from input: {0}")]
    Io(String),

    /// Every prompt attempt was rejected.
    #[error("No valid domain after {0} attempts")]
    TooManyAttempts(usize),
}

/// A TXT record that fails the minimal checks for its grammar.
///
/// Validators downgrade the record's status when they see one of these; the run
/// continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The record does not begin with the required version tag.
    #[error("record does not start with {expected}")]
    MissingVersion {
        /// The version prefix the grammar requires (e.g. `v=spf1`)
        expected: &'static str,
    },

    /// A tag the grammar requires is absent.
    #[error("record has no {0} tag")]
    MissingTag(&'static str),
}

/// Why a DNS query produced no records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DnsAbsence {
    /// NXDOMAIN: the queried name does not exist.
    NoSuchDomain,
    /// The name exists but holds no records of the queried type.
    NoSuchRecord,
}

/// A DNS query that could not be answered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnsFailure {
    /// No answer within the configured timeout.
    #[error("DNS query timed out")]
    Timeout,

    /// SERVFAIL, REFUSED, network errors and anything else.
    #[error("DNS resolution error: {0}")]
    Resolution(String),
}

/// Cause category of a DNS query that returned no records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DnsCause {
    /// The query timed out
    Timeout,
    /// NXDOMAIN
    NoSuchDomain,
    /// NOERROR with an empty answer
    NoSuchRecord,
    /// Any other resolution error
    OtherResolutionError,
}

/// An HTTP fetch that did not produce a 2xx response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// No response within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// TCP/TLS connection could not be established.
    #[error("connection failed: {0}")]
    Connect(String),

    /// The server answered with a non-2xx, non-redirect status.
    #[error("HTTP status {0}")]
    Status(u16),

    /// The server answered with a redirect that was not followed.
    #[error("redirect (HTTP {0}) not followed")]
    Redirect(u16),

    /// The URL could not be parsed or uses an unsupported scheme.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Any other request error.
    #[error("request failed: {0}")]
    Other(String),
}
