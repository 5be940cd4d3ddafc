//! Status-code classification.
//!
//! Classification looks only at the numeric status code, never at the body.
//! Anything outside `400..=599` passes through unchanged, including
//! redirects and non-200 success codes.

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_response::HttpResponse;

/// The outcome of classifying a status code.
///
/// # Example
///
/// ```rust
/// use newegg_api::clients::ResponseClass;
///
/// assert_eq!(ResponseClass::from_status(200), ResponseClass::Success);
/// assert_eq!(ResponseClass::from_status(302), ResponseClass::Success);
/// assert_eq!(ResponseClass::from_status(404), ResponseClass::ClientError);
/// assert_eq!(ResponseClass::from_status(503), ResponseClass::ServerError);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseClass {
    /// Any status outside `400..=599`.
    Success,
    /// Status in `400..=499`.
    ClientError,
    /// Status in `500..=599`.
    ServerError,
}

impl ResponseClass {
    /// Classifies a status code.
    #[must_use]
    pub const fn from_status(code: u16) -> Self {
        match code {
            400..=499 => Self::ClientError,
            500..=599 => Self::ServerError,
            _ => Self::Success,
        }
    }
}

/// Passes a response through, or converts it into a client/server error.
///
/// # Errors
///
/// Returns [`HttpError::Client`] for 4xx and [`HttpError::Server`] for 5xx
/// responses. The error message is `error, {code}: {response:?}`.
pub fn classify(response: HttpResponse) -> Result<HttpResponse, HttpError> {
    let code = response.code;
    let class = ResponseClass::from_status(code);
    if class == ResponseClass::Success {
        return Ok(response);
    }

    let error = HttpResponseError {
        code,
        message: format!("error, {code}: {response:?}"),
        body: response.body,
    };
    tracing::warn!(status = code, "OWS request failed: {}", error.message);

    if class == ResponseClass::ClientError {
        Err(HttpError::Client(error))
    } else {
        Err(HttpError::Server(error))
    }
}
