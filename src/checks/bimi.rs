//! BIMI check.

use super::describe_missing;
use crate::config::BIMI_SELECTOR;
use crate::dns::{DnsLookup, DnsQueryResult, QueryType};
use crate::domain::Domain;
use crate::fetch::{FetchResult, HttpFetch};
use crate::parse::BimiRecord;
use crate::report::{CheckReport, CheckStatus, RecordKind};

const LABEL: &str = "BIMI Record";

fn bimi_name(domain: &Domain) -> String {
    domain.prefixed(&format!("{BIMI_SELECTOR}._bimi"))
}

fn parse_records(answer: &DnsQueryResult) -> Vec<BimiRecord> {
    answer
        .records()
        .iter()
        .map(|record| BimiRecord::parse(record))
        .collect()
}

/// First non-empty `l=` logo URL among the BIMI records.
pub fn bimi_logo_url(answer: &DnsQueryResult) -> Option<String> {
    parse_records(answer)
        .into_iter()
        .find_map(|record| record.logo_url)
}

/// Evaluates the BIMI record and, when it names a logo, the logo fetch.
///
/// MISSING only when no TXT record exists. With a record, GOOD if the logo was
/// fetched; WARNING if no `l=` URL is published or the fetch failed.
pub fn evaluate_bimi(
    domain: &Domain,
    answer: &DnsQueryResult,
    logo_fetch: Option<&FetchResult>,
) -> CheckReport {
    let records = parse_records(answer);
    if records.is_empty() {
        return CheckReport::new(
            RecordKind::Bimi,
            LABEL,
            CheckStatus::MissingOrBad,
            vec![describe_missing(RecordKind::Bimi, &bimi_name(domain), answer)],
        );
    }

    let mut details: Vec<String> = records.iter().map(|record| record.raw.clone()).collect();
    if let Some(authority) = records.iter().find_map(|record| record.authority_url.as_ref()) {
        details.push(format!("Authority evidence at {authority}"));
    }

    let status = match (bimi_logo_url(answer), logo_fetch) {
        (None, _) => {
            details.push("No logo URL (l=) published".to_string());
            CheckStatus::Warning
        }
        (Some(url), Some(FetchResult::Success { .. })) => {
            details.push(format!("Logo found at {url}"));
            CheckStatus::Good
        }
        (Some(url), Some(FetchResult::Failed(failure))) => {
            details.push(format!("Logo missing or inaccessible at {url}: {failure}"));
            CheckStatus::Warning
        }
        (Some(url), None) => {
            details.push(format!("Logo at {url} was not fetched"));
            CheckStatus::Warning
        }
    };

    CheckReport::new(RecordKind::Bimi, LABEL, status, details)
}

/// Queries TXT at `default._bimi.<domain>` and fetches the logo it names.
pub async fn check_bimi<R, F>(domain: &Domain, resolver: &R, fetcher: &F) -> CheckReport
where
    R: DnsLookup,
    F: HttpFetch,
{
    let answer = resolver.lookup(&bimi_name(domain), QueryType::Txt).await;
    let logo_fetch = match bimi_logo_url(&answer) {
        Some(url) => Some(fetcher.fetch(&url).await),
        None => None,
    };
    evaluate_bimi(domain, &answer, logo_fetch.as_ref())
}
