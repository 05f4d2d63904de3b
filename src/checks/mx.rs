//! MX check.

use super::describe_missing;
use crate::dns::{DnsLookup, DnsQueryResult, QueryType};
use crate::domain::Domain;
use crate::report::{CheckReport, CheckStatus, RecordKind};

const LABEL: &str = "MX Records";

/// GOOD when at least one MX record exists, MISSING otherwise. There is no
/// warning tier.
pub fn evaluate_mx(domain: &Domain, answer: &DnsQueryResult) -> CheckReport {
    match answer {
        DnsQueryResult::Records(records) => CheckReport::new(
            RecordKind::Mx,
            LABEL,
            CheckStatus::Good,
            records.clone(),
        ),
        _ => CheckReport::new(
            RecordKind::Mx,
            LABEL,
            CheckStatus::MissingOrBad,
            vec![describe_missing(RecordKind::Mx, domain.as_str(), answer)],
        ),
    }
}

/// Queries MX at the domain and evaluates the answer.
pub async fn check_mx<R: DnsLookup>(domain: &Domain, resolver: &R) -> CheckReport {
    let answer = resolver.lookup(domain.as_str(), QueryType::Mx).await;
    evaluate_mx(domain, &answer)
}
