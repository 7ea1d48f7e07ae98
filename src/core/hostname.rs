//! Validated site hostname used to build absolute URLs.

use crate::site::{Result, SiteError};
use serde::{Serialize, Serializer};
use std::fmt;

/// Absolute `http`/`https` base URL, stored without a trailing slash.
///
/// A path component is kept, so `https://example.github.io/project`
/// produces `https://example.github.io/project/guide/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hostname(String);

impl Hostname {
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = |reason: String| SiteError::InvalidHostname {
            hostname: raw.to_string(),
            reason,
        };

        let parsed = url::Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!(
                "scheme '{}' not supported, must be http or https",
                parsed.scheme()
            )));
        }
        if parsed.host_str().is_none() {
            return Err(invalid("URL must have a valid host".into()));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid("URL must not carry a query or fragment".into()));
        }

        Ok(Self(parsed.as_str().trim_end_matches('/').to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join a root-relative path (already encoded) onto the hostname.
    pub fn absolute(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.0, path)
        } else {
            format!("{}/{}", self.0, path)
        }
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Hostname {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}
