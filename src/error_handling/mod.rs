//! Error handling.
//!
//! This module provides:
//! - Error type definitions (fatal input/initialization errors, malformed records)
//! - Failure values for DNS queries and HTTP fetches
//! - Categorization of resolver and HTTP client errors into those values
//!
//! Only `InputError` and `InitializationError` end a run. Everything else becomes
//! a report status with descriptive detail text.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, categorize_resolve_error, categorize_status};
pub use types::{
    DnsAbsence, DnsCause, DnsFailure, FetchFailure, InitializationError, InputError, RecordError,
};
