//! SPF check.

use super::describe_missing;
use crate::config::SPF_MAX_DNS_LOOKUPS;
use crate::dns::{DnsLookup, DnsQueryResult, QueryType};
use crate::domain::Domain;
use crate::parse::{select_spf_records, SpfRecord};
use crate::report::{CheckReport, CheckStatus, RecordKind};

const LABEL: &str = "SPF Record";

/// Evaluates the TXT records at the domain apex.
///
/// TXT records without the `v=spf1` prefix are ignored; if none has it the
/// record is missing. Otherwise the first SPF record is GOOD unless its terms
/// need more than ten DNS lookups, which is a WARNING.
pub fn evaluate_spf(domain: &Domain, answer: &DnsQueryResult) -> CheckReport {
    let candidates = select_spf_records(answer.records());
    let record = match candidates.first().map(|raw| SpfRecord::parse(raw)) {
        Some(Ok(record)) => record,
        _ => {
            return CheckReport::new(
                RecordKind::Spf,
                LABEL,
                CheckStatus::MissingOrBad,
                vec![describe_missing(RecordKind::Spf, domain.as_str(), answer)],
            )
        }
    };

    let lookups = record.dns_lookup_count();
    let mut details = vec![
        record.raw().to_string(),
        format!("DNS Lookups: {lookups}"),
    ];
    let status = if lookups > SPF_MAX_DNS_LOOKUPS {
        details.push(format!(
            "Exceeds the limit of {SPF_MAX_DNS_LOOKUPS} DNS lookups (RFC 7208)"
        ));
        CheckStatus::Warning
    } else {
        CheckStatus::Good
    };
    if candidates.len() > 1 {
        details.push(format!(
            "Multiple SPF records published ({}); only the first is evaluated",
            candidates.len()
        ));
    }

    CheckReport::new(RecordKind::Spf, LABEL, status, details)
}

/// Queries TXT at the domain and evaluates the SPF record.
pub async fn check_spf<R: DnsLookup>(domain: &Domain, resolver: &R) -> CheckReport {
    let answer = resolver.lookup(domain.as_str(), QueryType::Txt).await;
    evaluate_spf(domain, &answer)
}
