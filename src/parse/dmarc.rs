//! DMARC record parsing (RFC 7489 section 6.3).

use std::fmt;

use super::tags::{has_version_prefix, parse_tag_list};
use crate::error_handling::RecordError;

/// Version tag every DMARC record starts with.
pub const DMARC_VERSION: &str = "v=DMARC1";

/// Requested handling of failing mail (`p=` / `sp=`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DmarcPolicy {
    /// Monitor only
    None,
    /// Deliver to spam/quarantine
    Quarantine,
    /// Reject at SMTP time
    Reject,
    /// Any value outside the grammar, lower-cased
    Other(String),
}

impl DmarcPolicy {
    fn from_value(value: &str) -> Option<Self> {
        let value = value.to_ascii_lowercase();
        match value.as_str() {
            "" => None,
            "none" => Some(DmarcPolicy::None),
            "quarantine" => Some(DmarcPolicy::Quarantine),
            "reject" => Some(DmarcPolicy::Reject),
            _ => Some(DmarcPolicy::Other(value)),
        }
    }

    /// Quarantine or reject.
    pub fn is_enforcing(&self) -> bool {
        matches!(self, DmarcPolicy::Quarantine | DmarcPolicy::Reject)
    }
}

impl fmt::Display for DmarcPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DmarcPolicy::None => f.write_str("NONE"),
            DmarcPolicy::Quarantine => f.write_str("QUARANTINE"),
            DmarcPolicy::Reject => f.write_str("REJECT"),
            DmarcPolicy::Other(value) => f.write_str(&value.to_ascii_uppercase()),
        }
    }
}

/// Identifier alignment mode (`aspf=` / `adkim=`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlignmentMode {
    /// `r`: organizational-domain match is enough
    Relaxed,
    /// `s`: exact domain match required
    Strict,
    /// Any value outside the grammar, lower-cased
    Other(String),
}

impl AlignmentMode {
    fn from_value(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "r" => AlignmentMode::Relaxed,
            "s" => AlignmentMode::Strict,
            other => AlignmentMode::Other(other.to_string()),
        }
    }
}

impl fmt::Display for AlignmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignmentMode::Relaxed => f.write_str("R"),
            AlignmentMode::Strict => f.write_str("S"),
            AlignmentMode::Other(value) => f.write_str(&value.to_ascii_uppercase()),
        }
    }
}

/// An alignment value and whether it was published or defaulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    /// Effective mode
    pub mode: AlignmentMode,
    /// False when the tag was omitted and the relaxed default applies
    pub explicit: bool,
}

impl Alignment {
    fn from_tag(value: Option<&str>) -> Self {
        match value {
            Some(value) => Alignment {
                mode: AlignmentMode::from_value(value),
                explicit: true,
            },
            None => Alignment {
                mode: AlignmentMode::Relaxed,
                explicit: false,
            },
        }
    }

    /// Whether the effective mode is strict.
    pub fn is_strict(&self) -> bool {
        self.mode == AlignmentMode::Strict
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.explicit {
            write!(f, "{}", self.mode)
        } else {
            write!(f, "{} (default)", self.mode)
        }
    }
}

/// A parsed DMARC record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DmarcRecord {
    /// The record as published
    pub raw: String,
    /// `p=`; `None` when the tag is missing or empty
    pub policy: Option<DmarcPolicy>,
    /// `sp=` when published
    pub subdomain_policy: Option<DmarcPolicy>,
    /// `aspf=`, relaxed by default
    pub aspf: Alignment,
    /// `adkim=`, relaxed by default
    pub adkim: Alignment,
    /// `pct=` when published
    pub pct: Option<String>,
}

impl DmarcRecord {
    /// Parses a DMARC record.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::MissingVersion` when the record does not start with
    /// `v=DMARC1`.
    pub fn parse(record: &str) -> Result<Self, RecordError> {
        if !has_version_prefix(record, DMARC_VERSION) {
            return Err(RecordError::MissingVersion {
                expected: DMARC_VERSION,
            });
        }
        let tags = parse_tag_list(record);
        Ok(Self {
            raw: record.trim().to_string(),
            policy: tags.get("p").and_then(DmarcPolicy::from_value),
            subdomain_policy: tags.get("sp").and_then(DmarcPolicy::from_value),
            aspf: Alignment::from_tag(tags.get("aspf")),
            adkim: Alignment::from_tag(tags.get("adkim")),
            pct: tags.get("pct").map(str::to_string),
        })
    }

    /// One-line summary, e.g. `Policy=REJECT, ASPF=S, ADKIM=R (default)`.
    pub fn summary(&self) -> String {
        let policy = self
            .policy
            .as_ref()
            .map_or_else(|| "MISSING".to_string(), ToString::to_string);
        format!(
            "Policy={}, ASPF={}, ADKIM={}",
            policy, self.aspf, self.adkim
        )
    }
}

/// TXT records at `_dmarc.<domain>` that carry the DMARC version tag.
pub fn select_dmarc_records(txt_records: &[String]) -> Vec<&str> {
    txt_records
        .iter()
        .map(String::as_str)
        .filter(|record| has_version_prefix(record, DMARC_VERSION))
        .collect()
}
