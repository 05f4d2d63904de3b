//! BIMI assertion record parsing.

use super::tags::parse_tag_list;

/// A TXT record at `default._bimi.<domain>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BimiRecord {
    /// The record as published
    pub raw: String,
    /// `l=` logo location, when published and non-empty
    pub logo_url: Option<String>,
    /// `a=` authority evidence (VMC) location, when published and non-empty
    pub authority_url: Option<String>,
}

impl BimiRecord {
    /// Parses a BIMI record. Every TXT record at the BIMI name is accepted;
    /// missing tags just leave the fields empty.
    pub fn parse(record: &str) -> Self {
        let tags = parse_tag_list(record);
        let non_empty = |name: &str| {
            tags.get(name)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };
        Self {
            raw: record.trim().to_string(),
            logo_url: non_empty("l"),
            authority_url: non_empty("a"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_logo_and_authority() {
        let record = BimiRecord::parse(
            "v=BIMI1; l=https://example.com/logo.svg; a=https://example.com/vmc.pem",
        );
        assert_eq!(record.logo_url.as_deref(), Some("https://example.com/logo.svg"));
        assert_eq!(record.authority_url.as_deref(), Some("https://example.com/vmc.pem"));
    }

    #[test]
    fn test_empty_logo_is_absent() {
        let record = BimiRecord::parse("v=BIMI1; l=; a=;");
        assert_eq!(record.logo_url, None);
        assert_eq!(record.authority_url, None);
    }

    #[test]
    fn test_record_without_tags() {
        let record = BimiRecord::parse("v=BIMI1");
        assert_eq!(record.raw, "v=BIMI1");
        assert_eq!(record.logo_url, None);
    }
}
