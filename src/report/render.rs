//! Report rendering.
//!
//! Presentation only: reports are printed in the order given, and every detail
//! line is kept.

use std::fmt::Write;

use colored::{ColoredString, Colorize};
use serde::Serialize;

use super::types::{CheckReport, CheckStatus};
use crate::domain::Domain;

/// First line of the text report.
pub const REPORT_HEADER: &str = "--- DNS & Policy Check Results ---";

fn colorize(text: &str, status: CheckStatus) -> ColoredString {
    match status {
        CheckStatus::Good => text.green(),
        CheckStatus::Warning => text.yellow(),
        CheckStatus::MissingOrBad => text.red(),
    }
}

fn paint(text: &str, status: CheckStatus, color: bool) -> String {
    if color {
        colorize(text, status).to_string()
    } else {
        text.to_string()
    }
}

/// Renders the text report.
///
/// Each record gets a `<label>: [STATUS]` heading followed by its detail lines
/// indented by two spaces. With `color` set, the status marker and the detail
/// lines are coloured green, yellow or red by status.
pub fn render_text(reports: &[CheckReport], color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{REPORT_HEADER}");
    for report in reports {
        let marker = format!("[{}]", report.status());
        let _ = writeln!(
            out,
            "{}: {}",
            report.label(),
            paint(&marker, report.status(), color)
        );
        for line in report.details() {
            let _ = writeln!(out, "  {}", paint(line, report.status(), color));
        }
    }
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    domain: &'a str,
    checks: &'a [CheckReport],
}

/// Renders the reports as a pretty-printed JSON object
/// `{"domain": ..., "checks": [...]}`.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(domain: &Domain, reports: &[CheckReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        domain: domain.as_str(),
        checks: reports,
    })
}
