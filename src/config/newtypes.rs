//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// Default OWS base URL.
pub const DEFAULT_BASE_URL: &str = "http://www.ows.newegg.com";

/// Default value of the `Api-Version` header sent with POST requests.
pub const DEFAULT_API_VERSION: &str = "2.2";

/// A validated base URL for the OWS API.
///
/// The URL must have an alphabetic scheme followed by `://` and a non-empty
/// host. Surrounding whitespace and trailing slashes are removed so request
/// paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use newegg_api::BaseUrl;
///
/// let url = BaseUrl::new("http://www.ows.newegg.com/").unwrap();
/// assert_eq!(url.as_ref(), "http://www.ows.newegg.com");
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), Some("www.ows.newegg.com"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        // Host ends at port, path, or end of string. Route paths are appended
        // to the base URL, so a query or fragment would swallow them.
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start
            || remainder.contains(char::is_whitespace)
            || remainder.contains(['?', '#'])
        {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "http").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        let host_start = "http://".len();
        Self {
            url: DEFAULT_BASE_URL.to_string(),
            scheme_end: 4,
            host_start,
            host_end: DEFAULT_BASE_URL.len(),
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// The value sent in the `Api-Version` header.
///
/// ```rust
/// use newegg_api::ApiVersion;
///
/// assert_eq!(ApiVersion::default().as_ref(), "2.2");
/// assert!(ApiVersion::new("  ").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiVersion(String);

impl ApiVersion {
    /// Creates a new API version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiVersion`] if the version is blank.
    pub fn new(version: impl Into<String>) -> Result<Self, ConfigError> {
        let version = version.into().trim().to_string();
        if version.is_empty() {
            return Err(ConfigError::EmptyApiVersion);
        }
        Ok(Self(version))
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self(DEFAULT_API_VERSION.to_string())
    }
}

impl AsRef<str> for ApiVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
