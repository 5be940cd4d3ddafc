//! HTTP response type for the Newegg API client.
//!
//! Responses keep the raw body text. Parsing into records happens in the
//! domain layer, so a malformed body never changes how a status code is
//! classified.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// An HTTP response from the OWS API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Deserializes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] if the body is not valid
    /// JSON for `T`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use newegg_api::clients::HttpResponse;
    /// use std::collections::HashMap;
    ///
    /// let response = HttpResponse::new(200, HashMap::new(), "[1, 2, 3]");
    /// let values: Vec<u8> = response.json().unwrap();
    /// assert_eq!(values, vec![1, 2, 3]);
    /// ```
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
