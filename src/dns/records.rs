//! DNS record queries (TXT, MX).
//!
//! This module provides the resolver-backed [`DnsLookup`] implementation and the
//! conversion of answer data into the plain strings the checks consume.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;
use log::{debug, warn};

use super::types::{DnsLookup, DnsQueryResult, QueryType};
use crate::error_handling::{categorize_resolve_error, DnsFailure};

/// [`DnsLookup`] backed by a hickory resolver.
///
/// Every query is bounded by `timeout`, on top of the resolver's own per-attempt
/// timeout, so no lookup can block longer than that.
#[derive(Clone)]
pub struct HickoryLookup {
    resolver: Arc<TokioAsyncResolver>,
    timeout: Duration,
}

impl HickoryLookup {
    /// Wraps a resolver with an overall per-query timeout.
    pub fn new(resolver: Arc<TokioAsyncResolver>, timeout: Duration) -> Self {
        Self { resolver, timeout }
    }
}

impl DnsLookup for HickoryLookup {
    async fn lookup(&self, name: &str, query_type: QueryType) -> DnsQueryResult {
        debug!("Querying {query_type} records for {name}");
        let record_type = match query_type {
            QueryType::Mx => RecordType::MX,
            QueryType::Txt => RecordType::TXT,
        };

        let result =
            match tokio::time::timeout(self.timeout, self.resolver.lookup(name, record_type)).await
            {
                Err(_) => DnsQueryResult::Failed(DnsFailure::Timeout),
                Ok(Ok(lookup)) => {
                    let records = match query_type {
                        QueryType::Txt => collect_txt_records(lookup.iter()),
                        QueryType::Mx => collect_mx_records(lookup.iter()),
                    };
                    DnsQueryResult::from_records(records)
                }
                Ok(Err(e)) => match categorize_resolve_error(&e) {
                    Ok(absence) => DnsQueryResult::Absent(absence),
                    Err(failure) => DnsQueryResult::Failed(failure),
                },
            };

        match &result {
            DnsQueryResult::Failed(DnsFailure::Timeout) => {
                warn!("{query_type} record lookup timed out for {name}");
            }
            DnsQueryResult::Failed(failure) => {
                warn!("Failed to lookup {query_type} records for {name}: {failure}");
            }
            DnsQueryResult::Absent(absence) => {
                debug!("No {query_type} records for {name}: {absence:?}");
            }
            DnsQueryResult::Records(records) => {
                debug!("Found {} {query_type} record(s) for {name}", records.len());
            }
        }
        result
    }
}

/// Converts TXT answer data into strings.
///
/// A TXT record can hold several character-strings; they are concatenated
/// without a separator (RFC 7208 section 3.3).
pub fn collect_txt_records<'a>(rdata: impl Iterator<Item = &'a RData>) -> Vec<String> {
    rdata
        .filter_map(|rdata| {
            if let RData::TXT(txt) = rdata {
                Some(
                    txt.iter()
                        .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                        .collect::<Vec<String>>()
                        .join(""),
                )
            } else {
                None
            }
        })
        .collect()
}

/// Converts MX answer data into `"<preference> <exchange>"` strings, sorted by
/// preference (lower = higher priority).
pub fn collect_mx_records<'a>(rdata: impl Iterator<Item = &'a RData>) -> Vec<String> {
    let mut mx_records: Vec<(u16, String)> = rdata
        .filter_map(|rdata| {
            if let RData::MX(mx) = rdata {
                Some((mx.preference(), mx.exchange().to_utf8()))
            } else {
                None
            }
        })
        .collect();
    mx_records.sort_by_key(|(priority, _)| *priority);
    mx_records
        .into_iter()
        .map(|(priority, exchange)| format!("{priority} {exchange}"))
        .collect()
}
