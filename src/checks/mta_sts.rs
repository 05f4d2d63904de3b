//! MTA-STS check.

use super::describe_missing;
use crate::dns::{DnsLookup, DnsQueryResult, QueryType};
use crate::domain::Domain;
use crate::fetch::{FetchResult, HttpFetch};
use crate::parse::{policy_url, MtaStsRecord, MTA_STS_VERSION};
use crate::report::{CheckReport, CheckStatus, RecordKind};

const LABEL: &str = "MTA-STS Record";

/// First TXT record at `_mta-sts.<domain>` that starts with `v=STSv1`.
pub fn mta_sts_record(answer: &DnsQueryResult) -> Option<MtaStsRecord> {
    answer
        .records()
        .iter()
        .find_map(|record| MtaStsRecord::parse(record).ok())
}

/// Evaluates the MTA-STS record and, when one exists, the policy file fetch.
///
/// MISSING when the record is absent or malformed. With a record, GOOD if the
/// policy file was fetched and WARNING if it was not. The policy file content is
/// not inspected.
pub fn evaluate_mta_sts(
    domain: &Domain,
    answer: &DnsQueryResult,
    policy_fetch: Option<&FetchResult>,
) -> CheckReport {
    let name = domain.prefixed("_mta-sts");
    let Some(record) = mta_sts_record(answer) else {
        let mut details = answer.records().to_vec();
        if details.is_empty() {
            details.push(describe_missing(RecordKind::MtaSts, &name, answer));
        } else {
            details.push(format!(
                "TXT record at {name} is malformed (does not start with {MTA_STS_VERSION})"
            ));
        }
        return CheckReport::new(RecordKind::MtaSts, LABEL, CheckStatus::MissingOrBad, details);
    };

    let url = policy_url(domain);
    let mut details = vec![record.raw.clone()];
    if let Some(id) = &record.id {
        details.push(format!("Policy id: {id}"));
    }
    let status = match policy_fetch {
        Some(FetchResult::Success { has_body, .. }) => {
            if *has_body {
                details.push(format!("Policy file found at {url}"));
            } else {
                details.push(format!("Policy file found at {url} (empty body)"));
            }
            CheckStatus::Good
        }
        Some(FetchResult::Failed(failure)) => {
            details.push(format!(
                "Policy file missing or inaccessible at {url}: {failure}"
            ));
            CheckStatus::Warning
        }
        None => {
            details.push(format!("Policy file at {url} was not fetched"));
            CheckStatus::Warning
        }
    };

    CheckReport::new(RecordKind::MtaSts, LABEL, status, details)
}

/// Queries TXT at `_mta-sts.<domain>` and, if a valid record exists, fetches
/// `https://mta-sts.<domain>/.well-known/mta-sts.txt`.
pub async fn check_mta_sts<R, F>(domain: &Domain, resolver: &R, fetcher: &F) -> CheckReport
where
    R: DnsLookup,
    F: HttpFetch,
{
    let answer = resolver
        .lookup(&domain.prefixed("_mta-sts"), QueryType::Txt)
        .await;
    let policy_fetch = match mta_sts_record(&answer) {
        Some(_) => Some(fetcher.fetch(&policy_url(domain)).await),
        None => None,
    };
    evaluate_mta_sts(domain, &answer, policy_fetch.as_ref())
}
