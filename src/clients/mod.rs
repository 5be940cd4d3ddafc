//! HTTP client types for OWS API communication.
//!
//! This module provides the transport layer underneath
//! [`NeweggClient`](crate::NeweggClient): route building, request dispatch,
//! and status-code classification.
//!
//! # Overview
//!
//! - [`HttpClient`]: owns the lazily-created connection and sends requests
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpResponse`]: a response with its raw body
//! - [`HttpMethod`]: supported HTTP methods (GET, POST)
//! - [`DataType`]: content types for request bodies
//! - [`ResponseClass`] and [`classify`]: status-code classification
//! - [`path`]: `/{controller}/{action}/{id}` route builders
//!
//! # Classification
//!
//! - **400–499**: [`HttpError::Client`]
//! - **500–599**: [`HttpError::Server`]
//! - **Anything else** (including 3xx): the response is returned unchanged
//!
//! There are no retries. Every failure propagates to the caller.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod path;
mod status;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use status::{classify, ResponseClass};
