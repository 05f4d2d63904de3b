//! DKIM check.
//!
//! Probes a caller-supplied list of selectors; there is no selector discovery.

use futures::future::join_all;

use crate::dns::{DnsLookup, DnsQueryResult, QueryType};
use crate::domain::Domain;
use crate::error_handling::{DnsAbsence, DnsFailure};
use crate::parse::DkimKeyRecord;
use crate::report::{CheckReport, CheckStatus, RecordKind};

/// Report heading, listing the probed selectors.
pub fn dkim_label(selectors: &[String]) -> String {
    format!("DKIM Record (selectors={})", selectors.join(", "))
}

/// Evaluates one answer per selector, given in probe order.
///
/// A selector is found when one of its TXT records carries a `k=` or `p=` tag.
/// GOOD if any selector is found, MISSING otherwise. Every selector gets a
/// detail line saying what was found for it.
pub fn evaluate_dkim(domain: &Domain, probes: &[(String, DnsQueryResult)]) -> CheckReport {
    let selectors: Vec<String> = probes.iter().map(|(selector, _)| selector.clone()).collect();
    let label = dkim_label(&selectors);
    if probes.is_empty() {
        return CheckReport::new(
            RecordKind::Dkim,
            label,
            CheckStatus::MissingOrBad,
            vec!["No DKIM selectors configured".to_string()],
        );
    }

    let mut details = Vec::new();
    let mut found = false;
    for (selector, answer) in probes {
        match answer {
            DnsQueryResult::Records(records) => {
                let keys: Vec<DkimKeyRecord> = records
                    .iter()
                    .filter_map(|record| DkimKeyRecord::parse(record).ok())
                    .collect();
                if keys.is_empty() {
                    details.push(format!("{selector}: record has no key tag (k= or p=)"));
                }
                for key in &keys {
                    details.push(format!("{selector}: {}", key.raw));
                    if key.is_revoked() {
                        details.push(format!("{selector}: key revoked (empty p=)"));
                    }
                }
                found |= !keys.is_empty();
            }
            DnsQueryResult::Absent(DnsAbsence::NoSuchRecord | DnsAbsence::NoSuchDomain) => {
                details.push(format!("{selector}: no DKIM record found"));
            }
            DnsQueryResult::Failed(DnsFailure::Timeout) => {
                details.push(format!("{selector}: lookup failed (DNS query timed out)"));
            }
            DnsQueryResult::Failed(DnsFailure::Resolution(msg)) => {
                details.push(format!("{selector}: lookup failed ({msg})"));
            }
        }
    }

    let status = if found {
        CheckStatus::Good
    } else {
        details.push(format!(
            "No DKIM record found for selectors: {} (at {})",
            selectors.join(", "),
            domain.prefixed("_domainkey")
        ));
        CheckStatus::MissingOrBad
    };
    CheckReport::new(RecordKind::Dkim, label, status, details)
}

/// Queries TXT at `<selector>._domainkey.<domain>` for every selector.
///
/// The probes run concurrently; results are evaluated in selector order.
pub async fn check_dkim<R: DnsLookup>(
    domain: &Domain,
    selectors: &[String],
    resolver: &R,
) -> CheckReport {
    let names: Vec<String> = selectors
        .iter()
        .map(|selector| domain.prefixed(&format!("{selector}._domainkey")))
        .collect();
    let answers = join_all(
        names
            .iter()
            .map(|name| resolver.lookup(name, QueryType::Txt)),
    )
    .await;
    let probes: Vec<(String, DnsQueryResult)> =
        selectors.iter().cloned().zip(answers).collect();
    evaluate_dkim(domain, &probes)
}
