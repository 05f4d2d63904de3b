//! SPF record parsing (RFC 7208).
//!
//! Only what the posture check needs: recognising an SPF record and counting
//! the terms that cost a DNS lookup at evaluation time. Macros are not expanded
//! and included records are not followed.

use super::tags::has_version_prefix;
use crate::error_handling::RecordError;

/// Version tag every SPF record starts with.
pub const SPF_VERSION: &str = "v=spf1";

/// A TXT record that carries the `v=spf1` version tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpfRecord {
    raw: String,
    terms: Vec<String>,
}

impl SpfRecord {
    /// Parses an SPF record.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::MissingVersion` when the record does not start with
    /// `v=spf1`; such records are not SPF and are never parsed further.
    pub fn parse(record: &str) -> Result<Self, RecordError> {
        if !has_version_prefix(record, SPF_VERSION) {
            return Err(RecordError::MissingVersion {
                expected: SPF_VERSION,
            });
        }
        let terms = record
            .split_whitespace()
            .skip(1)
            .map(str::to_string)
            .collect();
        Ok(Self {
            raw: record.trim().to_string(),
            terms,
        })
    }

    /// The record as published (surrounding whitespace removed).
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Mechanisms and modifiers after the version tag.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of terms that trigger a DNS lookup: `include`, `a`, `mx`, `ptr`,
    /// `exists` and the `redirect` modifier. `all`, `ip4` and `ip6` are free.
    pub fn dns_lookup_count(&self) -> usize {
        self.terms
            .iter()
            .filter(|term| causes_dns_lookup(term))
            .count()
    }
}

/// Whether a single SPF term costs a DNS lookup.
///
/// A leading qualifier (`+`, `-`, `~`, `?`) is ignored; `a` and `mx` count with
/// or without a domain or CIDR suffix.
pub fn causes_dns_lookup(term: &str) -> bool {
    let term = term.to_ascii_lowercase();
    if term.starts_with("redirect=") {
        return true;
    }
    let mechanism = term.trim_start_matches(['+', '-', '~', '?']);
    if mechanism.starts_with("include:") || mechanism.starts_with("exists:") {
        return true;
    }
    let name = mechanism.split([':', '/']).next().unwrap_or_default();
    matches!(name, "a" | "mx" | "ptr")
}

/// TXT records that are SPF records, in answer order.
pub fn select_spf_records(txt_records: &[String]) -> Vec<&str> {
    txt_records
        .iter()
        .map(String::as_str)
        .filter(|record| has_version_prefix(record, SPF_VERSION))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_count_mixed_mechanisms() {
        let record = SpfRecord::parse("v=spf1 include:a.com include:b.com a mx ~all").unwrap();
        assert_eq!(record.dns_lookup_count(), 4);
        assert_eq!(record.terms().len(), 5);
    }

    #[test]
    fn test_lookup_count_eleven_includes() {
        let includes: Vec<String> = (0..11).map(|i| format!("include:s{i}.example.com")).collect();
        let record = SpfRecord::parse(&format!("v=spf1 {} -all", includes.join(" "))).unwrap();
        assert_eq!(record.dns_lookup_count(), 11);
    }

    #[test]
    fn test_free_mechanisms_do_not_count() {
        let record =
            SpfRecord::parse("v=spf1 ip4:192.0.2.0/24 ip6:2001:db8::/32 -all").unwrap();
        assert_eq!(record.dns_lookup_count(), 0);
    }

    #[test]
    fn test_qualified_and_suffixed_mechanisms_count() {
        assert!(causes_dns_lookup("a"));
        assert!(causes_dns_lookup("+a"));
        assert!(causes_dns_lookup("a:mail.example.com"));
        assert!(causes_dns_lookup("a/24"));
        assert!(causes_dns_lookup("-mx:example.com/24"));
        assert!(causes_dns_lookup("~ptr"));
        assert!(causes_dns_lookup("?exists:%{i}.bl.example.com"));
        assert!(causes_dns_lookup("redirect=_spf.example.com"));
        assert!(causes_dns_lookup("INCLUDE:_spf.example.com"));
    }

    #[test]
    fn test_non_lookup_terms() {
        assert!(!causes_dns_lookup("~all"));
        assert!(!causes_dns_lookup("-all"));
        assert!(!causes_dns_lookup("ip4:192.0.2.1"));
        assert!(!causes_dns_lookup("exp=explain.example.com"));
        assert!(!causes_dns_lookup("amx"));
        assert!(!causes_dns_lookup("include"));
    }

    #[test]
    fn test_parse_rejects_missing_version() {
        assert_eq!(
            SpfRecord::parse("include:a.com -all"),
            Err(RecordError::MissingVersion { expected: "v=spf1" })
        );
        assert!(SpfRecord::parse("v=spf10 -all").is_err());
    }

    #[test]
    fn test_select_spf_records() {
        let txt = vec![
            "google-site-verification=xyz".to_string(),
            "v=spf1 mx -all".to_string(),
            "spf1 include:bad.example".to_string(),
        ];
        assert_eq!(select_spf_records(&txt), vec!["v=spf1 mx -all"]);
    }
}
