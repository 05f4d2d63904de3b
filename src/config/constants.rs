//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including timeouts, record locations and protocol limits.

// Network operation timeouts
/// DNS query timeout in seconds
/// Most DNS queries complete in <1s; 5s leaves room for slow authoritative servers
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// HTTP request timeout in seconds (MTA-STS policy file and BIMI logo fetches)
pub const HTTP_TIMEOUT_SECS: u64 = 5;
/// Resolver attempts per query before giving up
pub const DNS_ATTEMPTS: usize = 1;

/// Default number of HTTP redirects followed.
///
/// Zero means a 3xx answer is reported as a failed fetch.
pub const DEFAULT_MAX_REDIRECTS: usize = 0;

/// Default User-Agent string for HTTP requests.
///
/// Some hosts block requests without a browser-like User-Agent, so we send a
/// generic desktop Chrome string. Users can override this via `--user-agent`.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// DKIM selectors probed when none are supplied on the command line.
pub const DEFAULT_DKIM_SELECTORS: [&str; 3] = ["default", "selector1", "selector2"];

/// RFC 7208 section 4.6.4 ceiling on DNS-querying SPF terms.
pub const SPF_MAX_DNS_LOOKUPS: usize = 10;

/// Well-known path of the MTA-STS policy file (RFC 8461 section 3.3)
pub const MTA_STS_POLICY_PATH: &str = "/.well-known/mta-sts.txt";

/// BIMI selector queried for the assertion record
pub const BIMI_SELECTOR: &str = "default";

/// Maximum number of interactive prompt attempts before giving up
pub const MAX_PROMPT_ATTEMPTS: usize = 3;

/// Maximum length of a domain name in octets (RFC 1035)
pub const MAX_DOMAIN_LENGTH: usize = 253;
/// Maximum length of a single DNS label in octets (RFC 1035)
pub const MAX_LABEL_LENGTH: usize = 63;
