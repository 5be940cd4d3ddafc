//! # Newegg API Rust Client
//!
//! A Rust client for the Newegg Open Web Services (OWS) API, exposing store,
//! category, navigation, and search lookups as method calls.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`NeweggClient`]: store/category lookups with an in-memory cache,
//!   navigation, and advanced search
//! - Type-safe configuration via [`NeweggConfig`] and [`NeweggConfigBuilder`]
//! - Typed records ([`Store`], [`Category`]) mapped from the OWS JSON fields
//! - A thin HTTP layer ([`clients`]) that classifies every response purely
//!   on its status code
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use newegg_api::NeweggClient;
//!
//! let mut client = NeweggClient::new();
//!
//! // First call issues GET /Stores.egg/, later calls use the cache
//! for store in client.stores().await? {
//!     println!("{} ({})", store.title, store.store_id);
//! }
//!
//! // Categories are attached to the store they belong to
//! let categories = client.categories(1).await?;
//! println!("{} categories", categories.len());
//! ```
//!
//! ## Searching
//!
//! ```rust,ignore
//! use newegg_api::{NeweggClient, SearchRequest};
//!
//! let mut client = NeweggClient::new();
//! let request = SearchRequest::new(1, 1, 7, 7583).keyword("ssd");
//! let response = client.search(&request).await?;
//! let results: serde_json::Value = response.json()?;
//! ```
//!
//! ## Error Handling
//!
//! Status codes in `400..=499` fail with [`HttpError::Client`], codes in
//! `500..=599` fail with [`HttpError::Server`]; every other status
//! (including redirects) is treated as success. There are no retries.
//!
//! ## Design Principles
//!
//! - **No global state**: configuration and caches live on the client instance
//! - **Fail-fast validation**: newtypes validate on construction
//! - **One request at a time**: lookups take `&mut self`
//! - **Async**: designed for use with the Tokio runtime

pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

pub use api::{NavigationRequest, NeweggClient, SearchRequest};
pub use config::{ApiVersion, BaseUrl, NeweggConfig, NeweggConfigBuilder};
pub use error::{ConfigError, NeweggError};
pub use resources::{Category, Store};

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, ResponseClass,
};
