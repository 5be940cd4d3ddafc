//! Navigation lookups.

use serde::{Deserialize, Serialize};

use super::NeweggClient;
use crate::clients::HttpResponse;
use crate::error::NeweggError;

const NAVIGATION_CONTROLLER: &str = "Navigation.egg";
const RETRIEVE_ACTION: &str = "Retrieve";

/// Body of `POST /Navigation.egg/Retrieve/`.
///
/// ```rust
/// use newegg_api::NavigationRequest;
///
/// let body = serde_json::to_value(NavigationRequest::new(1, 2, 6642)).unwrap();
/// assert_eq!(body, serde_json::json!({"StoreID": 1, "CategoryID": 2, "NodeId": 6642}));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct NavigationRequest {
    /// Store to navigate.
    #[serde(rename = "StoreID")]
    pub store_id: i64,

    /// Category within the store.
    #[serde(rename = "CategoryID")]
    pub category_id: i64,

    /// Navigation node within the category.
    #[serde(rename = "NodeId")]
    pub node_id: i64,
}

impl NavigationRequest {
    /// Creates a navigation request.
    #[must_use]
    pub const fn new(store_id: i64, category_id: i64, node_id: i64) -> Self {
        Self {
            store_id,
            category_id,
            node_id,
        }
    }
}

impl NeweggClient {
    /// Retrieves the navigation tree below a category node.
    ///
    /// The classified response is returned as-is; use
    /// [`HttpResponse::json`] to read its body.
    ///
    /// # Errors
    ///
    /// - [`NeweggError::Http`] if the request fails or is classified as a
    ///   client/server error
    pub async fn navigation(
        &mut self,
        store_id: i64,
        category_id: i64,
        node_id: i64,
    ) -> Result<HttpResponse, NeweggError> {
        let body = serde_json::to_value(NavigationRequest::new(store_id, category_id, node_id))
            .map_err(NeweggError::Serialize)?;

        Ok(self
            .http
            .api_post(NAVIGATION_CONTROLLER, RETRIEVE_ACTION, body)
            .await?)
    }
}
