//! Error types for the Newegg API client.
//!
//! This module contains the configuration error raised while building a
//! [`NeweggConfig`](crate::NeweggConfig) and the top-level [`NeweggError`]
//! returned by every domain call on [`NeweggClient`](crate::NeweggClient).
//!
//! # Error Handling
//!
//! HTTP failures are classified purely on the status code and surface as
//! [`HttpError::Client`] (4xx) or [`HttpError::Server`] (5xx), wrapped in
//! [`NeweggError::Http`]. Malformed response bodies are reported as
//! [`NeweggError::Parse`] and are never reclassified.
//!
//! # Example
//!
//! ```rust
//! use newegg_api::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("not a url");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

use crate::clients::HttpError;

/// Errors that can occur during client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid URL with scheme (e.g., 'http://www.ows.newegg.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version cannot be empty.
    #[error("API version cannot be empty. Please provide a version such as '2.2'.")]
    EmptyApiVersion,
}

/// Errors returned by the domain calls on [`NeweggClient`](crate::NeweggClient).
///
/// # Example
///
/// ```rust,ignore
/// use newegg_api::{HttpError, NeweggClient, NeweggError};
///
/// let mut client = NeweggClient::new();
/// match client.stores().await {
///     Ok(stores) => println!("{} stores", stores.len()),
///     Err(NeweggError::Http(HttpError::Client(e))) => println!("client error {}", e.code),
///     Err(NeweggError::Http(HttpError::Server(e))) => println!("server error {}", e.code),
///     Err(other) => println!("{other}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum NeweggError {
    /// The request failed or was classified as a client/server error.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A response body could not be parsed into the expected records.
    #[error("Failed to parse {context} response: {source}")]
    Parse {
        /// What was being parsed (e.g., "stores").
        context: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A request body could not be serialized.
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Categories were requested for a store that is not in the cached list.
    #[error("Store {store_id} not found. Call stores() before requesting its categories.")]
    StoreNotFound {
        /// The store id that was looked up.
        store_id: i64,
    },
}

impl NeweggError {
    /// Returns the HTTP status code for classified client/server errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "bad url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("bad url"));
        assert!(message.contains("scheme"));
    }

    #[test]
    fn test_store_not_found_mentions_store_id() {
        let error = NeweggError::StoreNotFound { store_id: 42 };
        let message = error.to_string();
        assert!(message.contains("42"));
        assert!(message.contains("stores()"));
    }

    #[test]
    fn test_status_is_forwarded_from_http_error() {
        let error = NeweggError::from(HttpError::Server(HttpResponseError {
            code: 503,
            body: String::new(),
            message: "error, 503: unavailable".to_string(),
        }));
        assert_eq!(error.status(), Some(503));
        assert_eq!(NeweggError::StoreNotFound { store_id: 1 }.status(), None);
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let source = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let error = NeweggError::Parse {
            context: "stores",
            source,
        };
        assert!(error.to_string().starts_with("Failed to parse stores response"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_error_implements_std_error() {
        let _: &dyn std::error::Error = &ConfigError::EmptyApiVersion;
        let _: &dyn std::error::Error = &NeweggError::StoreNotFound { store_id: 1 };
    }
}
