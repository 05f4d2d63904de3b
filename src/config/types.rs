//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_DKIM_SELECTORS, DEFAULT_MAX_REDIRECTS, DEFAULT_USER_AGENT, DNS_TIMEOUT_SECS,
    HTTP_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Coloured human-readable report (default)
    Text,
    /// JSON object with the domain and its ordered check reports
    Json,
}

/// When to colour the text report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Colour when stdout is a terminal and `NO_COLOR` is unset
    Auto,
    /// Always emit ANSI colour codes
    Always,
    /// Never emit ANSI colour codes
    Never,
}

/// Application configuration.
///
/// Parsed from the command line by the binary, or constructed programmatically
/// by library users through [`Default`].
///
/// # Examples
///
/// ```no_run
/// use mail_posture::Config;
///
/// let config = Config {
///     domain: Some("example.com".to_string()),
///     dkim_selectors: vec!["google".to_string(), "k1".to_string()],
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mail_posture",
    version,
    about = "Checks a domain's MX, SPF, DKIM, DMARC, MTA-STS and BIMI records"
)]
pub struct Config {
    /// Domain to check (prompted for interactively when omitted)
    pub domain: Option<String>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to colour the text report
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Per-query DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub dns_timeout_seconds: u64,

    /// Per-request HTTP timeout in seconds
    #[arg(long, default_value_t = HTTP_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub http_timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Number of HTTP redirects to follow (0 = report 3xx as a failure)
    #[arg(long, default_value_t = DEFAULT_MAX_REDIRECTS)]
    pub max_redirects: usize,

    /// DKIM selector to probe (repeatable; replaces the default list)
    #[arg(
        long = "dkim-selector",
        value_name = "SELECTOR",
        default_values = DEFAULT_DKIM_SELECTORS
    )]
    pub dkim_selectors: Vec<String>,
}

impl Config {
    /// DNS timeout as a `Duration`.
    pub fn dns_timeout(&self) -> Duration {
        Duration::from_secs(self.dns_timeout_seconds)
    }

    /// HTTP timeout as a `Duration`.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: None,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            format: OutputFormat::Text,
            color: ColorChoice::Auto,
            dns_timeout_seconds: DNS_TIMEOUT_SECS,
            http_timeout_seconds: HTTP_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            dkim_selectors: DEFAULT_DKIM_SELECTORS.map(String::from).to_vec(),
        }
    }
}
