//! DNS resolution adapter.
//!
//! This module provides:
//! - The [`DnsLookup`] seam the checks query through
//! - A hickory-backed implementation with a hard per-query timeout
//! - Answer-data conversion for TXT and MX records
//!
//! Lookups never return errors. NXDOMAIN and empty answers become
//! [`DnsQueryResult::Absent`]; timeouts and other resolver errors become
//! [`DnsQueryResult::Failed`].

mod records;
mod types;

// Re-export public API
pub use records::{collect_mx_records, collect_txt_records, HickoryLookup};
pub use types::{DnsLookup, DnsQueryResult, QueryType};
