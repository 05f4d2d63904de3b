//! Domain validation and normalization.
//!
//! The checked domain is validated once at the entry point and is read-only
//! afterwards. Input is trimmed, reduced to its host when given as a URL,
//! lower-cased and stripped of a trailing root dot before the syntax checks.

use std::fmt;
use std::net::IpAddr;

use crate::config::{MAX_DOMAIN_LENGTH, MAX_LABEL_LENGTH};
use crate::error_handling::InputError;

/// A syntactically valid DNS name, the subject of every check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain(String);

impl Domain {
    /// Validates and normalizes user input.
    ///
    /// # Errors
    ///
    /// Returns `InputError::EmptyDomain` for blank input and
    /// `InputError::MalformedDomain` for anything that is not a DNS name with at
    /// least two labels (including IP addresses).
    ///
    /// # Examples
    ///
    /// ```
    /// use mail_posture::Domain;
    ///
    /// let domain = Domain::parse("  Example.COM. ").unwrap();
    /// assert_eq!(domain.as_str(), "example.com");
    /// ```
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(InputError::EmptyDomain);
        }
        let malformed = |reason: &str| InputError::MalformedDomain {
            input: trimmed.to_string(),
            reason: reason.to_string(),
        };

        let host = if trimmed.contains("://") {
            let parsed = url::Url::parse(trimmed).map_err(|e| malformed(&e.to_string()))?;
            match parsed.host() {
                Some(url::Host::Domain(host)) => host.to_string(),
                Some(url::Host::Ipv4(_)) | Some(url::Host::Ipv6(_)) => {
                    return Err(malformed("IP addresses are not domains"))
                }
                None => return Err(malformed("URL has no host")),
            }
        } else {
            trimmed.to_string()
        };

        let name = host.strip_suffix('.').unwrap_or(&host).to_ascii_lowercase();
        if name.is_empty() {
            return Err(malformed("empty name"));
        }
        if name.parse::<IpAddr>().is_ok() {
            return Err(malformed("IP addresses are not domains"));
        }
        if name.len() > MAX_DOMAIN_LENGTH {
            return Err(malformed("name is longer than 253 characters"));
        }

        let labels: Vec<&str> = name.split('.').collect();
        if labels.len() < 2 {
            return Err(malformed("name needs at least two labels"));
        }
        for label in &labels {
            validate_label(label).map_err(malformed)?;
        }
        if labels
            .last()
            .is_some_and(|tld| tld.chars().all(|c| c.is_ascii_digit()))
        {
            return Err(malformed("top-level label cannot be numeric"));
        }

        Ok(Domain(name))
    }

    /// The normalized name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<prefix>.<domain>`, e.g. `_dmarc.example.com`.
    pub fn prefixed(&self, prefix: &str) -> String {
        format!("{}.{}", prefix, self.0)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn validate_label(label: &str) -> Result<(), &'static str> {
    if label.is_empty() {
        return Err("empty label");
    }
    if label.len() > MAX_LABEL_LENGTH {
        return Err("label is longer than 63 characters");
    }
    // Underscore is allowed so service names such as _dmarc.example.com pass
    if !label
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err("labels may only contain letters, digits, '-' and '_'");
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err("labels cannot start or end with '-'");
    }
    Ok(())
}
