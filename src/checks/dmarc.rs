//! DMARC check.

use super::describe_missing;
use crate::dns::{DnsLookup, DnsQueryResult, QueryType};
use crate::domain::Domain;
use crate::parse::{select_dmarc_records, DmarcPolicy, DmarcRecord, DMARC_VERSION};
use crate::report::{CheckReport, CheckStatus, RecordKind};

const LABEL: &str = "DMARC Record";

fn missing(details: Vec<String>) -> CheckReport {
    CheckReport::new(RecordKind::Dmarc, LABEL, CheckStatus::MissingOrBad, details)
}

/// Evaluates the TXT records at `_dmarc.<domain>`.
///
/// - MISSING: no record, no `v=DMARC1` record, or a policy of `none` / no policy
/// - WARNING: quarantine or reject with relaxed SPF or DKIM alignment, or an
///   unrecognised policy value
/// - GOOD: quarantine or reject with both alignments strict
pub fn evaluate_dmarc(domain: &Domain, answer: &DnsQueryResult) -> CheckReport {
    let name = domain.prefixed("_dmarc");
    if answer.records().is_empty() {
        return missing(vec![describe_missing(RecordKind::Dmarc, &name, answer)]);
    }

    let candidates = select_dmarc_records(answer.records());
    let record = match candidates.first().map(|raw| DmarcRecord::parse(raw)) {
        Some(Ok(record)) => record,
        _ => {
            let mut details = answer.records().to_vec();
            details.push(format!(
                "TXT record at {name} is not a DMARC record (does not start with {DMARC_VERSION})"
            ));
            return missing(details);
        }
    };

    let mut details = vec![record.raw.clone(), record.summary()];
    if let Some(subdomain_policy) = &record.subdomain_policy {
        details.push(format!("Subdomain policy={subdomain_policy}"));
    }
    if let Some(pct) = &record.pct {
        details.push(format!("Applied to {pct}% of failing mail"));
    }

    let status = match &record.policy {
        None | Some(DmarcPolicy::None) => {
            details.push("Policy does not enforce: use p=quarantine or p=reject".to_string());
            CheckStatus::MissingOrBad
        }
        Some(policy) if policy.is_enforcing() => {
            if record.aspf.is_strict() && record.adkim.is_strict() {
                CheckStatus::Good
            } else {
                details.push("Relaxed alignment: set aspf=s and adkim=s for strict".to_string());
                CheckStatus::Warning
            }
        }
        Some(policy) => {
            details.push(format!("Unrecognised policy value '{policy}'"));
            CheckStatus::Warning
        }
    };
    if candidates.len() > 1 {
        details.push(format!(
            "Multiple DMARC records published ({}); only the first is evaluated",
            candidates.len()
        ));
    }

    CheckReport::new(RecordKind::Dmarc, LABEL, status, details)
}

/// Queries TXT at `_dmarc.<domain>` and evaluates the DMARC record.
pub async fn check_dmarc<R: DnsLookup>(domain: &Domain, resolver: &R) -> CheckReport {
    let answer = resolver
        .lookup(&domain.prefixed("_dmarc"), QueryType::Txt)
        .await;
    evaluate_dmarc(domain, &answer)
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;
    use crate::error_handling::{DnsAbsence, DnsFailure};

    fn status_of(record: &str) -> CheckStatus {
        evaluate_dmarc(&domain(), &records(&[record])).status()
    }

    #[test]
    fn test_strict_reject_is_good() {
        assert_eq!(
            status_of("v=DMARC1; p=reject; aspf=s; adkim=s"),
            CheckStatus::Good
        );
        assert_eq!(
            status_of("v=DMARC1; p=quarantine; aspf=s; adkim=s"),
            CheckStatus::Good
        );
    }

    #[test]
    fn test_relaxed_alignment_is_warning() {
        assert_eq!(
            status_of("v=DMARC1; p=reject; aspf=r; adkim=s"),
            CheckStatus::Warning
        );
        assert_eq!(status_of("v=DMARC1; p=reject"), CheckStatus::Warning);
    }

    #[test]
    fn test_policy_none_is_missing() {
        assert_eq!(status_of("v=DMARC1; p=none"), CheckStatus::MissingOrBad);
        assert_eq!(
            status_of("v=DMARC1; rua=mailto:a@example.com"),
            CheckStatus::MissingOrBad
        );
    }

    #[test]
    fn test_unknown_policy_is_warning() {
        assert_eq!(status_of("v=DMARC1; p=block"), CheckStatus::Warning);
    }

    #[test]
    fn test_absent_record_is_missing() {
        let report = evaluate_dmarc(
            &domain(),
            &DnsQueryResult::Absent(DnsAbsence::NoSuchDomain),
        );
        assert_eq!(report.status(), CheckStatus::MissingOrBad);
        assert_eq!(
            report.details(),
            ["No DMARC record found (_dmarc.example.com does not exist)".to_string()]
        );
    }

    #[test]
    fn test_timeout_is_missing_with_failure_wording() {
        let report = evaluate_dmarc(&domain(), &DnsQueryResult::Failed(DnsFailure::Timeout));
        assert_eq!(report.status(), CheckStatus::MissingOrBad);
        assert!(report.details()[0].contains("lookup failed"));
    }

    #[test]
    fn test_malformed_record_is_missing() {
        let report = evaluate_dmarc(
            &domain(),
            &records(&["v=DMARC2; p=quarantine; rua=mailto:d@example.com"]),
        );
        assert_eq!(report.status(), CheckStatus::MissingOrBad);
        assert_eq!(
            report.details()[0],
            "v=DMARC2; p=quarantine; rua=mailto:d@example.com"
        );
        assert!(report.details()[1].contains("is not a DMARC record"));
    }

    #[test]
    fn test_details_report_resolved_alignment() {
        let report = evaluate_dmarc(
            &domain(),
            &records(&["v=DMARC1; p=reject; adkim=s; sp=quarantine; pct=100"]),
        );
        assert_eq!(
            report.details(),
            [
                "v=DMARC1; p=reject; adkim=s; sp=quarantine; pct=100".to_string(),
                "Policy=REJECT, ASPF=R (default), ADKIM=S".to_string(),
                "Subdomain policy=QUARANTINE".to_string(),
                "Applied to 100% of failing mail".to_string(),
                "Relaxed alignment: set aspf=s and adkim=s for strict".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_check_dmarc_queries_dmarc_name() {
        let resolver =
            StaticResolver::default().txt("_dmarc.example.com", &["v=DMARC1; p=none"]);
        let report = check_dmarc(&domain(), &resolver).await;
        assert_eq!(report.status(), CheckStatus::MissingOrBad);
        assert_eq!(resolver.queried(), vec!["_dmarc.example.com".to_string()]);
    }
}
