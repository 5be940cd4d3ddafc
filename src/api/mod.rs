//! The domain-level client.
//!
//! [`NeweggClient`] maps store, category, navigation, and search lookups
//! onto OWS routes and keeps the store list (with each store's categories)
//! in memory for its lifetime.
//!
//! # Caching
//!
//! The store list is fetched once and never invalidated: once it is
//! non-empty, [`NeweggClient::stores`] returns it without a request. An
//! empty response leaves the cache empty, so the next call fetches again.
//!
//! # Concurrency
//!
//! Every lookup takes `&mut self` and awaits one request at a time. A client
//! cannot be shared between tasks; create one client per task instead.

mod navigation;
mod search;
mod stores;

pub use navigation::NavigationRequest;
pub use search::{SearchRequest, DEFAULT_SORT};

use crate::clients::HttpClient;
use crate::config::NeweggConfig;
use crate::resources::Store;

/// Controller serving store and category lookups.
pub(crate) const STORES_CONTROLLER: &str = "Stores.egg";

/// Client for the Newegg OWS API.
///
/// # Example
///
/// ```rust,ignore
/// use newegg_api::NeweggClient;
///
/// let mut client = NeweggClient::new();
///
/// let stores = client.stores().await?;
/// let first = stores[0].store_id;
///
/// for category in client.categories(first).await? {
///     println!("{} ({})", category.description, category.node_id);
/// }
/// ```
#[derive(Debug)]
pub struct NeweggClient {
    http: HttpClient,
    stores: Vec<Store>,
}

impl NeweggClient {
    /// Creates a client for `http://www.ows.newegg.com` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&NeweggConfig::default())
    }

    /// Creates a client with a custom configuration.
    ///
    /// ```rust
    /// use newegg_api::{BaseUrl, NeweggClient, NeweggConfig};
    ///
    /// let config = NeweggConfig::builder()
    ///     .base_url(BaseUrl::new("http://localhost:8080").unwrap())
    ///     .build();
    /// let client = NeweggClient::with_config(&config);
    ///
    /// assert_eq!(client.http_client().base_url(), "http://localhost:8080");
    /// assert!(client.cached_stores().is_empty());
    /// ```
    #[must_use]
    pub fn with_config(config: &NeweggConfig) -> Self {
        Self {
            http: HttpClient::new(config),
            stores: Vec::new(),
        }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http
    }

    /// Returns the cached store list without making a request.
    #[must_use]
    pub fn cached_stores(&self) -> &[Store] {
        &self.stores
    }

    /// Returns the cached store with the given id, if loaded.
    #[must_use]
    pub fn store(&self, store_id: i64) -> Option<&Store> {
        self.stores.iter().find(|store| store.store_id == store_id)
    }
}

impl Default for NeweggClient {
    fn default() -> Self {
        Self::new()
    }
}
