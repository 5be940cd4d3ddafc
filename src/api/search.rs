//! Advanced search.
//!
//! Search is a `POST /Search.egg/Advanced/` carrying the full OWS search
//! form. [`SearchRequest`] fills every field the endpoint expects, with
//! `-1` meaning "any" for brand filters.

use serde::{Deserialize, Serialize};

use super::NeweggClient;
use crate::clients::HttpResponse;
use crate::error::NeweggError;

const SEARCH_CONTROLLER: &str = "Search.egg";
const ADVANCED_ACTION: &str = "Advanced";

/// Default sort order for search results.
pub const DEFAULT_SORT: &str = "FEATURED";

/// Body of `POST /Search.egg/Advanced/`.
///
/// # Example
///
/// ```rust
/// use newegg_api::SearchRequest;
///
/// let request = SearchRequest::new(1, 1, 7, 7583)
///     .keyword("ssd")
///     .page_number(2);
///
/// let body = serde_json::to_value(&request).unwrap();
/// assert_eq!(body["StoreDepaId"], 1);
/// assert_eq!(body["SubCategoryId"], 7);
/// assert_eq!(body["Keyword"], "ssd");
/// assert_eq!(body["PageNumber"], 2);
/// assert_eq!(body["IsSubCategorySearch"], true);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchRequest {
    /// Whether `keyword` is a UPC code.
    #[serde(rename = "IsUPCCodeSearch")]
    pub is_upc_code_search: bool,

    /// Whether the search is scoped to a sub category.
    #[serde(rename = "IsSubCategorySearch")]
    pub is_sub_category_search: bool,

    /// Guided search flag; the endpoint spells it in camelCase.
    #[serde(rename = "isGuideAdvanceSearch")]
    pub is_guide_advance_search: bool,

    /// Store to search in.
    #[serde(rename = "StoreDepaId")]
    pub store_depa_id: i64,

    /// Category to search in.
    #[serde(rename = "CategoryId")]
    pub category_id: i64,

    /// Sub category to search in.
    #[serde(rename = "SubCategoryId")]
    pub sub_category_id: i64,

    /// Navigation node to search in.
    #[serde(rename = "NodeId")]
    pub node_id: i64,

    /// Brand filter, `-1` for any brand.
    #[serde(rename = "BrandId")]
    pub brand_id: i64,

    /// Refinement value.
    #[serde(rename = "NValue")]
    pub n_value: String,

    /// Free-text keywords.
    #[serde(rename = "Keyword")]
    pub keyword: String,

    /// Sort order, `FEATURED` by default.
    #[serde(rename = "Sort")]
    pub sort: String,

    /// 1-based result page.
    #[serde(rename = "PageNumber")]
    pub page_number: u32,

    /// Additional search properties.
    #[serde(rename = "SearchProperties")]
    pub search_properties: Vec<serde_json::Value>,
}

impl SearchRequest {
    /// Creates a search of the first result page under a category node.
    ///
    /// A positive `sub_category_id` marks the request as a sub category search.
    #[must_use]
    pub fn new(store_depa_id: i64, category_id: i64, sub_category_id: i64, node_id: i64) -> Self {
        Self {
            is_upc_code_search: false,
            is_sub_category_search: sub_category_id > 0,
            is_guide_advance_search: false,
            store_depa_id,
            category_id,
            sub_category_id,
            node_id,
            brand_id: -1,
            n_value: String::new(),
            keyword: String::new(),
            sort: DEFAULT_SORT.to_string(),
            page_number: 1,
            search_properties: Vec::new(),
        }
    }

    /// Sets the free-text keywords.
    #[must_use]
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    /// Treats the keyword as a UPC code.
    #[must_use]
    pub const fn upc_code_search(mut self, enabled: bool) -> Self {
        self.is_upc_code_search = enabled;
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page_number(mut self, page_number: u32) -> Self {
        self.page_number = page_number;
        self
    }

    /// Filters by brand.
    #[must_use]
    pub const fn brand_id(mut self, brand_id: i64) -> Self {
        self.brand_id = brand_id;
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = sort.into();
        self
    }

    /// Sets the refinement value.
    #[must_use]
    pub fn n_value(mut self, n_value: impl Into<String>) -> Self {
        self.n_value = n_value.into();
        self
    }
}

impl NeweggClient {
    /// Runs an advanced search.
    ///
    /// The classified response is returned as-is; use
    /// [`HttpResponse::json`] to read its body.
    ///
    /// # Errors
    ///
    /// - [`NeweggError::Serialize`] if the request cannot be encoded
    /// - [`NeweggError::Http`] if the request fails or is classified as a
    ///   client/server error
    pub async fn search(&mut self, request: &SearchRequest) -> Result<HttpResponse, NeweggError> {
        let body = serde_json::to_value(request).map_err(NeweggError::Serialize)?;

        Ok(self
            .http
            .api_post(SEARCH_CONTROLLER, ADVANCED_ACTION, body)
            .await?)
    }
}
