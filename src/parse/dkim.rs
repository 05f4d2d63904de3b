//! DKIM key record parsing (RFC 6376 section 3.6.1).

use super::tags::parse_tag_list;
use crate::error_handling::RecordError;

/// A DKIM key record published at `<selector>._domainkey.<domain>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DkimKeyRecord {
    /// The record as published
    pub raw: String,
    /// `k=` key type; RFC default is `rsa`
    pub key_type: Option<String>,
    /// `p=` public key data; empty means the key was revoked
    pub public_key: Option<String>,
}

impl DkimKeyRecord {
    /// Parses a DKIM key record.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::MissingTag` when neither `k=` nor `p=` is present,
    /// i.e. the TXT record is not a key record.
    pub fn parse(record: &str) -> Result<Self, RecordError> {
        let tags = parse_tag_list(record);
        if !tags.contains("k") && !tags.contains("p") {
            return Err(RecordError::MissingTag("k= or p="));
        }
        Ok(Self {
            raw: record.trim().to_string(),
            key_type: tags.get("k").map(str::to_string),
            public_key: tags.get("p").map(str::to_string),
        })
    }

    /// An empty `p=` revokes the key (RFC 6376 section 3.6.1).
    pub fn is_revoked(&self) -> bool {
        self.public_key.as_deref().is_some_and(str::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_record() {
        let record = DkimKeyRecord::parse("v=DKIM1; k=rsa; p=MIIBIjANBgkqh").unwrap();
        assert_eq!(record.key_type.as_deref(), Some("rsa"));
        assert_eq!(record.public_key.as_deref(), Some("MIIBIjANBgkqh"));
        assert!(!record.is_revoked());
    }

    #[test]
    fn test_key_tag_alone_is_enough() {
        assert!(DkimKeyRecord::parse("v=DKIM1; p=MIIG").is_ok());
        assert!(DkimKeyRecord::parse("k=ed25519").is_ok());
    }

    #[test]
    fn test_revoked_key() {
        let record = DkimKeyRecord::parse("v=DKIM1; p=").unwrap();
        assert!(record.is_revoked());
    }

    #[test]
    fn test_record_without_key_tags() {
        assert_eq!(
            DkimKeyRecord::parse("v=spf1 -all"),
            Err(RecordError::MissingTag("k= or p="))
        );
        assert!(DkimKeyRecord::parse("v=DKIM1; t=y").is_err());
    }
}
