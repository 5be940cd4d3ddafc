//! Store and category lookups.

use super::{NeweggClient, STORES_CONTROLLER};
use crate::error::NeweggError;
use crate::resources::{Category, Store};

/// Action serving the categories of one store.
const CATEGORIES_ACTION: &str = "Categories";

impl NeweggClient {
    /// Returns the list of stores, fetching it on first use.
    ///
    /// Issues `GET /Stores.egg/` only while the cached list is empty. Stores
    /// keep the order of the API response.
    ///
    /// # Errors
    ///
    /// - [`NeweggError::Http`] if the request fails or is classified as a
    ///   client/server error
    /// - [`NeweggError::Parse`] if the body is not a JSON array of stores
    pub async fn stores(&mut self) -> Result<&[Store], NeweggError> {
        if !self.stores.is_empty() {
            tracing::debug!(count = self.stores.len(), "Using cached stores");
            return Ok(&self.stores);
        }

        let response = self.http.api_get(STORES_CONTROLLER, None, None).await?;
        let stores: Vec<Store> = response.json().map_err(|source| NeweggError::Parse {
            context: "stores",
            source,
        })?;

        self.stores.extend(stores);
        Ok(&self.stores)
    }

    /// Fetches the categories of a cached store and attaches them to it.
    ///
    /// Issues `GET /Stores.egg/Categories/{store_id}`. The fetched list
    /// replaces whatever the store held before; other stores are untouched.
    ///
    /// # Errors
    ///
    /// - [`NeweggError::StoreNotFound`] if `store_id` is not in the cached
    ///   list (call [`stores`](Self::stores) first); no request is made
    /// - [`NeweggError::Http`] if the request fails or is classified as a
    ///   client/server error
    /// - [`NeweggError::Parse`] if the body is not a JSON array of categories
    pub async fn categories(&mut self, store_id: i64) -> Result<&[Category], NeweggError> {
        let index = self
            .stores
            .iter()
            .position(|store| store.store_id == store_id)
            .ok_or(NeweggError::StoreNotFound { store_id })?;

        let id = store_id.to_string();
        let response = self
            .http
            .api_get(STORES_CONTROLLER, Some(CATEGORIES_ACTION), Some(&id))
            .await?;
        let categories: Vec<Category> =
            response.json().map_err(|source| NeweggError::Parse {
                context: "categories",
                source,
            })?;

        let store = &mut self.stores[index];
        store.categories = categories;
        Ok(&store.categories)
    }
}
