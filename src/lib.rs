//! mail_posture library: email-security DNS posture checks
//!
//! This library checks the records that govern how a domain sends and receives
//! mail: MX, SPF, DKIM, DMARC, MTA-STS and BIMI. Each check produces a
//! [`CheckReport`] with a GOOD / WARNING / MISSING status and detail lines.
//!
//! # Example
//!
//! ```no_run
//! use mail_posture::{check_domain, render_text, Config, Domain};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config::default();
//! let domain = Domain::parse("example.com")?;
//!
//! let reports = check_domain(&config, &domain).await?;
//! print!("{}", render_text(&reports, false));
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod checks;
pub mod config;
pub mod dns;
mod domain;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
mod input;
pub mod parse;
pub mod report;

use anyhow::Result;

// Re-export public API
pub use checks::run_checks;
pub use config::{ColorChoice, Config, LogFormat, LogLevel, OutputFormat};
pub use domain::Domain;
pub use error_handling::InputError;
pub use input::{prompt_for_domain, PROMPT};
pub use report::{render_json, render_text, CheckReport, CheckStatus, RecordKind};

/// Checks `domain` with resolver and HTTP client built from `config`.
///
/// Returns one report per record type, in display order. DNS and HTTP failures
/// are reported as statuses, never as errors.
///
/// # Errors
///
/// Returns an error only if the HTTP client cannot be initialized.
pub async fn check_domain(config: &Config, domain: &Domain) -> Result<Vec<CheckReport>> {
    let (resolver, fetcher) = initialization::init_adapters(config)?;
    Ok(run_checks(domain, &config.dkim_selectors, &resolver, &fetcher).await)
}
