//! Record validators.
//!
//! One validator per record type. Each is split into a pure `evaluate_*`
//! function of the domain and the adapter results, and an async `check_*`
//! wrapper that performs the queries and fetches it needs.
//!
//! A failed lookup gets the same status as a missing record, but different
//! detail text, so operators can tell DNS non-existence from transient errors.

mod bimi;
mod dkim;
mod dmarc;
mod mta_sts;
mod mx;
mod spf;

#[cfg(test)]
pub(crate) mod fixtures;

use log::info;
use strum::IntoEnumIterator;

use crate::dns::{DnsLookup, DnsQueryResult};
use crate::domain::Domain;
use crate::error_handling::{DnsAbsence, DnsFailure};
use crate::fetch::HttpFetch;
use crate::report::{CheckReport, RecordKind};

// Re-export public API
pub use bimi::{bimi_logo_url, check_bimi, evaluate_bimi};
pub use dkim::{check_dkim, dkim_label, evaluate_dkim};
pub use dmarc::{check_dmarc, evaluate_dmarc};
pub use mta_sts::{check_mta_sts, evaluate_mta_sts, mta_sts_record};
pub use mx::{check_mx, evaluate_mx};
pub use spf::{check_spf, evaluate_spf};

/// Runs every check against `domain`, one after another, and returns the
/// reports in display order (MX, SPF, DKIM, DMARC, MTA-STS, BIMI).
pub async fn run_checks<R, F>(
    domain: &Domain,
    dkim_selectors: &[String],
    resolver: &R,
    fetcher: &F,
) -> Vec<CheckReport>
where
    R: DnsLookup,
    F: HttpFetch,
{
    let mut reports = Vec::new();
    for kind in RecordKind::iter() {
        let report = match kind {
            RecordKind::Mx => check_mx(domain, resolver).await,
            RecordKind::Spf => check_spf(domain, resolver).await,
            RecordKind::Dkim => check_dkim(domain, dkim_selectors, resolver).await,
            RecordKind::Dmarc => check_dmarc(domain, resolver).await,
            RecordKind::MtaSts => check_mta_sts(domain, resolver, fetcher).await,
            RecordKind::Bimi => check_bimi(domain, resolver, fetcher).await,
        };
        info!("{} check for {}: {}", kind, domain, report.status());
        reports.push(report);
    }
    reports
}

/// Detail line for a query that produced no usable record.
///
/// `Records` means TXT records exist but none is of the checked kind, which is
/// reported like an empty answer.
fn describe_missing(kind: RecordKind, name: &str, answer: &DnsQueryResult) -> String {
    match answer {
        DnsQueryResult::Absent(DnsAbsence::NoSuchDomain) => {
            format!("No {kind} record found ({name} does not exist)")
        }
        DnsQueryResult::Absent(DnsAbsence::NoSuchRecord) | DnsQueryResult::Records(_) => {
            format!("No {kind} record found at {name}")
        }
        DnsQueryResult::Failed(DnsFailure::Timeout) => {
            format!("{kind} lookup failed for {name}: DNS query timed out")
        }
        DnsQueryResult::Failed(DnsFailure::Resolution(msg)) => {
            format!("{kind} lookup failed for {name}: {msg}")
        }
    }
}
