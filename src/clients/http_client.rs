//! HTTP client for OWS API communication.
//!
//! This module provides the [`HttpClient`] type, which owns the single
//! lazily-created connection to the OWS base URL and routes every response
//! through [`classify`](crate::clients::classify).

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{DataType, HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::path::{get_path, post_path};
use crate::clients::status::classify;
use crate::config::NeweggConfig;

/// Client version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the OWS API.
///
/// The client handles:
/// - Lazy construction of the underlying connection, reused for every call
/// - Default headers including User-Agent
/// - Request and response logging through `tracing`
/// - Status-code classification of every response
///
/// Redirects are not followed: a 3xx response is returned to the caller
/// unchanged.
///
/// # Example
///
/// ```rust,ignore
/// use newegg_api::clients::{HttpClient, HttpMethod, HttpRequest};
/// use newegg_api::NeweggConfig;
///
/// let mut client = HttpClient::new(&NeweggConfig::default());
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/Stores.egg/")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The connection, created on first use.
    connection: Option<reqwest::Client>,
    /// Base URL (e.g., `http://www.ows.newegg.com`).
    base_url: String,
    /// Value of the `Api-Version` header sent with POST requests.
    api_version: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// No connection is opened until the first request.
    ///
    /// ```rust
    /// use newegg_api::clients::HttpClient;
    /// use newegg_api::NeweggConfig;
    ///
    /// let client = HttpClient::new(&NeweggConfig::default());
    /// assert_eq!(client.base_url(), "http://www.ows.newegg.com");
    /// assert!(!client.is_connected());
    /// ```
    #[must_use]
    pub fn new(config: &NeweggConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Newegg API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);

        Self {
            connection: None,
            base_url: config.base_url().as_ref().to_string(),
            api_version: config.api_version().as_ref().to_string(),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns `true` once the connection has been created.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// Returns the connection, creating it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying client cannot be
    /// built (e.g., TLS initialization failure).
    pub fn connection(&mut self) -> Result<&reqwest::Client, HttpError> {
        let client = match self.connection.take() {
            Some(client) => client,
            None => {
                tracing::debug!(base_url = %self.base_url, "Opening OWS connection");
                reqwest::Client::builder()
                    .use_rustls_tls()
                    .redirect(reqwest::redirect::Policy::none())
                    .build()?
            }
        };
        Ok(self.connection.insert(client))
    }

    /// Sends an HTTP request and classifies the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - The status is in `400..=499` (`Client`) or `500..=599` (`Server`)
    pub async fn request(&mut self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let client = self.connection()?.clone();
        let url = format!("{}{}", self.base_url, request.path);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => client.get(&url),
            HttpMethod::Post => client.post(&url),
        };
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(method = %request.http_method, url = %url, "Sending OWS request");
        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;
        tracing::debug!(status = code, url = %url, "Received OWS response");

        classify(HttpResponse::new(code, res_headers, body))
    }

    /// Issues `GET /{controller}/{action}/{id}`, or `GET /{controller}/`
    /// unless both `action` and `id` are given.
    pub(crate) async fn api_get(
        &mut self,
        controller: &str,
        action: Option<&str>,
        id: Option<&str>,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, get_path(controller, action, id))
            .build()?;
        self.request(request).await
    }

    /// Issues `POST /{controller}/{action}/` with a JSON body.
    pub(crate) async fn api_post(
        &mut self,
        controller: &str,
        action: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, post_path(controller, action))
            .body(body)
            .body_type(DataType::Json)
            .header("Accept", "application/json")
            .header("Api-Version", self.api_version.clone())
            .build()?;
        self.request(request).await
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
