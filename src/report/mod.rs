//! Check reports and their rendering.
//!
//! This module provides:
//! - `CheckStatus`, `RecordKind` and `CheckReport`, the validators' output
//! - Text rendering with status colours, and JSON rendering

mod render;
mod types;

// Re-export public API
pub use render::{render_json, render_text, REPORT_HEADER};
pub use types::{CheckReport, CheckStatus, RecordKind};
