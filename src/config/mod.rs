//! Configuration types for the Newegg API client.
//!
//! # Overview
//!
//! - [`NeweggConfig`]: settings shared by every request of a client
//! - [`NeweggConfigBuilder`]: a builder for constructing [`NeweggConfig`] instances
//! - [`BaseUrl`]: a validated base URL, defaulting to `http://www.ows.newegg.com`
//! - [`ApiVersion`]: the `Api-Version` header value, defaulting to `2.2`
//!
//! # Example
//!
//! ```rust
//! use newegg_api::{NeweggConfig, BaseUrl};
//!
//! let config = NeweggConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:8080").unwrap())
//!     .user_agent_prefix("MyApp/1.0")
//!     .build();
//!
//! assert_eq!(config.base_url().as_ref(), "http://localhost:8080");
//! assert_eq!(config.api_version().as_ref(), "2.2");
//! ```

mod newtypes;

pub use newtypes::{ApiVersion, BaseUrl, DEFAULT_API_VERSION, DEFAULT_BASE_URL};

/// Configuration for the Newegg API client.
///
/// # Thread Safety
///
/// `NeweggConfig` is `Clone`, `Send`, and `Sync`, so one configuration can
/// be shared by several independent clients.
#[derive(Clone, Debug, Default)]
pub struct NeweggConfig {
    base_url: BaseUrl,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
}

impl NeweggConfig {
    /// Creates a new builder for constructing a `NeweggConfig`.
    #[must_use]
    pub fn builder() -> NeweggConfigBuilder {
        NeweggConfigBuilder::new()
    }

    /// Returns the base URL every request path is appended to.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the `Api-Version` header value.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify NeweggConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NeweggConfig>();
};

/// Builder for constructing [`NeweggConfig`] instances.
///
/// Every field is optional.
///
/// # Defaults
///
/// - `base_url`: `http://www.ows.newegg.com`
/// - `api_version`: `2.2`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct NeweggConfigBuilder {
    base_url: Option<BaseUrl>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
}

impl NeweggConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the `Api-Version` header value.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`NeweggConfig`], filling unset fields with defaults.
    #[must_use]
    pub fn build(self) -> NeweggConfig {
        NeweggConfig {
            base_url: self.base_url.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        }
    }
}
