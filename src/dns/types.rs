//! DNS query types.

use std::fmt;
use std::future::Future;

use serde::Serialize;

use crate::error_handling::{DnsAbsence, DnsCause, DnsFailure};

/// Record types the checks query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum QueryType {
    /// Mail exchanger records
    Mx,
    /// Text records (SPF, DKIM, DMARC, MTA-STS, BIMI)
    Txt,
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QueryType::Mx => "MX",
            QueryType::Txt => "TXT",
        })
    }
}

/// Outcome of a single DNS query.
///
/// Exactly one of three things holds: records were returned (never an empty
/// list), the name or record is known not to exist, or the query failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DnsQueryResult {
    /// One or more records, in answer order (MX sorted by preference)
    Records(Vec<String>),
    /// The resolver answered authoritatively that nothing exists
    Absent(DnsAbsence),
    /// The resolver could not answer
    Failed(DnsFailure),
}

impl DnsQueryResult {
    /// Wraps a record list, turning an empty answer into `NoSuchRecord`.
    pub fn from_records(records: Vec<String>) -> Self {
        if records.is_empty() {
            DnsQueryResult::Absent(DnsAbsence::NoSuchRecord)
        } else {
            DnsQueryResult::Records(records)
        }
    }

    /// Records returned, or an empty slice for absence and failure alike.
    pub fn records(&self) -> &[String] {
        match self {
            DnsQueryResult::Records(records) => records,
            _ => &[],
        }
    }

    /// Cause category when no records were returned.
    pub fn cause(&self) -> Option<DnsCause> {
        match self {
            DnsQueryResult::Records(_) => None,
            DnsQueryResult::Absent(DnsAbsence::NoSuchDomain) => Some(DnsCause::NoSuchDomain),
            DnsQueryResult::Absent(DnsAbsence::NoSuchRecord) => Some(DnsCause::NoSuchRecord),
            DnsQueryResult::Failed(DnsFailure::Timeout) => Some(DnsCause::Timeout),
            DnsQueryResult::Failed(DnsFailure::Resolution(_)) => {
                Some(DnsCause::OtherResolutionError)
            }
        }
    }

    /// True when the query itself failed, as opposed to finding nothing.
    pub fn is_failure(&self) -> bool {
        matches!(self, DnsQueryResult::Failed(_))
    }
}

/// DNS lookup capability used by the checks.
///
/// Implementations never return errors: every outcome, including timeouts, is
/// folded into a [`DnsQueryResult`].
pub trait DnsLookup: Send + Sync {
    /// Queries `name` for records of `query_type`.
    fn lookup(
        &self,
        name: &str,
        query_type: QueryType,
    ) -> impl Future<Output = DnsQueryResult> + Send;
}
