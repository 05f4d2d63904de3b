//! Tag-list parsing shared by the DKIM, DMARC, MTA-STS and BIMI grammars.
//!
//! These records are `;`-separated `name=value` pairs (RFC 6376 section 3.2).
//! Tag names are matched exactly and case-insensitively, so `sp=` is never
//! mistaken for `p=`.

/// Parsed `name=value` pairs in record order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagList {
    tags: Vec<(String, String)>,
}

impl TagList {
    /// Value of the first tag named `name`, trimmed.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(tag, _)| tag.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Whether a tag named `name` is present, even with an empty value.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// True when the record held no `name=value` pairs.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Splits a tag-list record into its `name=value` pairs.
///
/// Tag names are lower-cased; values keep their case and are trimmed. Segments
/// without `=` are skipped.
pub fn parse_tag_list(record: &str) -> TagList {
    let tags = record
        .split(';')
        .filter_map(|segment| {
            let (name, value) = segment.split_once('=')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some((name.to_ascii_lowercase(), value.trim().to_string()))
        })
        .collect();
    TagList { tags }
}

/// Whether `record` starts with the version tag `prefix`, compared
/// case-insensitively and followed by end of record, whitespace or `;`.
///
/// `v=spf10` does not carry the `v=spf1` prefix.
pub fn has_version_prefix(record: &str, prefix: &str) -> bool {
    let record = record.trim_start();
    match record.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => record[prefix.len()..]
            .chars()
            .next()
            .map_or(true, |c| c == ';' || c.is_whitespace()),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag_list_basic() {
        let tags = parse_tag_list("v=DMARC1; p=reject; rua=mailto:d@example.com");
        assert_eq!(tags.len(), 3);
        assert_eq!(tags.get("v"), Some("DMARC1"));
        assert_eq!(tags.get("p"), Some("reject"));
        assert_eq!(tags.get("rua"), Some("mailto:d@example.com"));
    }

    #[test]
    fn test_tag_names_match_exactly() {
        let tags = parse_tag_list("v=DMARC1; sp=reject");
        assert_eq!(tags.get("p"), None);
        assert_eq!(tags.get("sp"), Some("reject"));
    }

    #[test]
    fn test_tag_names_are_case_insensitive_values_keep_case() {
        let tags = parse_tag_list("V=BIMI1; L=https://Example.com/Logo.svg");
        assert_eq!(tags.get("l"), Some("https://Example.com/Logo.svg"));
        assert!(tags.contains("v"));
    }

    #[test]
    fn test_empty_values_and_junk_segments() {
        let tags = parse_tag_list("v=DKIM1; p=; junk; =novalue;;");
        assert_eq!(tags.len(), 2);
        assert_eq!(tags.get("p"), Some(""));
        assert!(tags.contains("p"));
        assert!(parse_tag_list("no tags here").is_empty());
    }

    #[test]
    fn test_value_may_contain_equals() {
        let tags = parse_tag_list("p=MIGfMA0GCSqGSIb3DQEBAQUAA4GNADCBiQKBgQC==");
        assert_eq!(tags.get("p"), Some("MIGfMA0GCSqGSIb3DQEBAQUAA4GNADCBiQKBgQC=="));
    }

    #[test]
    fn test_has_version_prefix() {
        assert!(has_version_prefix("v=spf1 -all", "v=spf1"));
        assert!(has_version_prefix("v=spf1", "v=spf1"));
        assert!(has_version_prefix("  V=SPF1 mx -all", "v=spf1"));
        assert!(has_version_prefix("v=DMARC1;p=none", "v=DMARC1"));
        assert!(!has_version_prefix("v=spf10 -all", "v=spf1"));
        assert!(!has_version_prefix("spf1 -all", "v=spf1"));
        assert!(!has_version_prefix("v=", "v=spf1"));
    }
}
