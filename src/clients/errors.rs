//! HTTP-specific error types for the Newegg API client.
//!
//! - [`HttpResponseError`]: a 4xx or 5xx response, with its status and raw body
//! - [`InvalidHttpRequestError`]: a request that fails validation before sending
//! - [`HttpError`]: unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Client(e)) => println!("Client error {}: {}", e.code, e.body),
//!     Err(HttpError::Server(e)) => println!("Server error {}: {}", e.code, e.body),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// A response whose status code was classified as a client or server error.
///
/// The message has the form `error, {code}: {response}` where `{response}`
/// is the debug representation of the full response.
///
/// # Example
///
/// ```rust
/// use newegg_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     body: "Not Found".to_string(),
///     message: "error, 404: HttpResponse { .. }".to_string(),
/// };
///
/// assert!(error.to_string().starts_with("error, 404"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
    /// Description including the status code and the raw response.
    pub message: String,
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The response status was in `400..=499`.
    #[error("Newegg client error: {0}")]
    Client(HttpResponseError),

    /// The response status was in `500..=599`.
    #[error("Newegg server error: {0}")]
    Server(HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the status code for client and server errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Client(e) | Self::Server(e) => Some(e.code),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }

    /// Returns the classified response error, if any.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponseError> {
        match self {
            Self::Client(e) | Self::Server(e) => Some(e),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_error(code: u16) -> HttpResponseError {
        HttpResponseError {
            code,
            body: "raw".to_string(),
            message: format!("error, {code}: raw"),
        }
    }

    #[test]
    fn test_client_error_display_includes_code() {
        let error = HttpError::Client(response_error(404));
        assert_eq!(error.to_string(), "Newegg client error: error, 404: raw");
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_server_error_display_includes_code() {
        let error = HttpError::Server(response_error(502));
        assert_eq!(error.to_string(), "Newegg server error: error, 502: raw");
        assert_eq!(error.response().map(|e| e.body.as_str()), Some("raw"));
    }

    #[test]
    fn test_invalid_request_has_no_status() {
        let error = HttpError::from(InvalidHttpRequestError::MissingBodyType);
        assert_eq!(error.status(), None);
        assert!(error.response().is_none());
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use post without specifying data.");
    }
}
