//! Report types.

use std::fmt;

use serde::Serialize;
use strum_macros::EnumIter;

/// Outcome of one record check.
///
/// Ordered by severity: `Good < Warning < MissingOrBad`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// Present and well configured
    Good,
    /// Present but weak or partly unreachable
    Warning,
    /// Absent, unresolvable, malformed or not enforcing
    MissingOrBad,
}

impl CheckStatus {
    /// Marker shown next to the record heading.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Good => "GOOD",
            CheckStatus::Warning => "WARNING",
            CheckStatus::MissingOrBad => "MISSING",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record types checked, declared in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// Mail exchangers
    Mx,
    /// Sender Policy Framework
    Spf,
    /// DomainKeys Identified Mail
    Dkim,
    /// Domain-based Message Authentication, Reporting and Conformance
    Dmarc,
    /// SMTP MTA Strict Transport Security
    MtaSts,
    /// Brand Indicators for Message Identification
    Bimi,
}

impl RecordKind {
    /// Short name used in detail text, e.g. "SPF".
    pub fn name(&self) -> &'static str {
        match self {
            RecordKind::Mx => "MX",
            RecordKind::Spf => "SPF",
            RecordKind::Dkim => "DKIM",
            RecordKind::Dmarc => "DMARC",
            RecordKind::MtaSts => "MTA-STS",
            RecordKind::Bimi => "BIMI",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of checking one record type. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    kind: RecordKind,
    label: String,
    status: CheckStatus,
    details: Vec<String>,
}

impl CheckReport {
    /// Builds a report.
    pub fn new(
        kind: RecordKind,
        label: impl Into<String>,
        status: CheckStatus,
        details: Vec<String>,
    ) -> Self {
        Self {
            kind,
            label: label.into(),
            status,
            details,
        }
    }

    /// Record type checked.
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Heading shown in the report, e.g. "SPF Record".
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Assigned status.
    pub fn status(&self) -> CheckStatus {
        self.status
    }

    /// Human-readable detail lines, in order.
    pub fn details(&self) -> &[String] {
        &self.details
    }
}
