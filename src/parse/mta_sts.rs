//! MTA-STS TXT record parsing (RFC 8461 section 3.1).
//!
//! The policy file itself is only fetched, never parsed.

use super::tags::{has_version_prefix, parse_tag_list};
use crate::config::MTA_STS_POLICY_PATH;
use crate::domain::Domain;
use crate::error_handling::RecordError;

/// Version tag every MTA-STS record starts with.
pub const MTA_STS_VERSION: &str = "v=STSv1";

/// A TXT record at `_mta-sts.<domain>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MtaStsRecord {
    /// The record as published
    pub raw: String,
    /// `id=` policy identifier
    pub id: Option<String>,
}

impl MtaStsRecord {
    /// Parses an MTA-STS record.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::MissingVersion` when the record does not start with
    /// `v=STSv1`.
    pub fn parse(record: &str) -> Result<Self, RecordError> {
        if !has_version_prefix(record, MTA_STS_VERSION) {
            return Err(RecordError::MissingVersion {
                expected: MTA_STS_VERSION,
            });
        }
        let tags = parse_tag_list(record);
        Ok(Self {
            raw: record.trim().to_string(),
            id: tags.get("id").filter(|id| !id.is_empty()).map(str::to_string),
        })
    }
}

/// `https://mta-sts.<domain>/.well-known/mta-sts.txt`
pub fn policy_url(domain: &Domain) -> String {
    format!("https://{}{}", domain.prefixed("mta-sts"), MTA_STS_POLICY_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_with_id() {
        let record = MtaStsRecord::parse("v=STSv1; id=20240101T000000;").unwrap();
        assert_eq!(record.id.as_deref(), Some("20240101T000000"));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(
            MtaStsRecord::parse("id=20240101"),
            Err(RecordError::MissingVersion {
                expected: "v=STSv1"
            })
        );
        assert!(MtaStsRecord::parse("v=STSv2; id=1").is_err());
    }

    #[test]
    fn test_policy_url() {
        let domain = Domain::parse("example.com").unwrap();
        assert_eq!(
            policy_url(&domain),
            "https://mta-sts.example.com/.well-known/mta-sts.txt"
        );
    }
}
