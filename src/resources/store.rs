//! Store record.
//!
//! A store is a Newegg storefront such as "Software" or "Computer Hardware".
//! Stores are listed by `GET /Stores.egg/`; each store's categories are
//! attached later by [`NeweggClient::categories`](crate::NeweggClient::categories).

use serde::{Deserialize, Serialize};

use super::Category;

/// A Newegg storefront.
///
/// # Example
///
/// ```rust
/// use newegg_api::Store;
///
/// let store: Store = serde_json::from_str(
///     r#"{"Title":"Software","StoreDepa":"1","StoreID":1,"ShowSeeAllDeals":true}"#,
/// ).unwrap();
///
/// assert_eq!(store.title, "Software");
/// assert_eq!(store.store_id, 1);
/// assert!(store.categories.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Store {
    /// Display name of the store.
    #[serde(rename = "Title", deserialize_with = "super::string_or_number::deserialize")]
    pub title: String,

    /// Department grouping flag, as sent by the API.
    #[serde(rename = "StoreDepa", deserialize_with = "super::string_or_number::deserialize")]
    pub depa: String,

    /// Store identifier.
    #[serde(rename = "StoreID")]
    pub store_id: i64,

    /// Whether the store shows a "see all deals" link.
    #[serde(rename = "ShowSeeAllDeals")]
    pub show_see_all_deals: bool,

    /// Categories attached by the last category lookup for this store.
    /// Not part of the wire format.
    #[serde(skip)]
    pub categories: Vec<Category>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_store_deserializes_pascal_case_fields() {
        let store: Store = serde_json::from_value(json!({
            "Title": "Computer Hardware",
            "StoreDepa": "ComputerHardware",
            "StoreID": 2,
            "ShowSeeAllDeals": false
        }))
        .unwrap();

        assert_eq!(store.title, "Computer Hardware");
        assert_eq!(store.depa, "ComputerHardware");
        assert_eq!(store.store_id, 2);
        assert!(!store.show_see_all_deals);
    }

    #[test]
    fn test_store_depa_accepts_numbers() {
        let store: Store = serde_json::from_value(json!({"StoreDepa": 7, "StoreID": 7})).unwrap();
        assert_eq!(store.depa, "7");
    }

    #[test]
    fn test_null_or_numeric_title_is_accepted() {
        let store: Store = serde_json::from_value(json!({"Title": null, "StoreID": 4})).unwrap();
        assert!(store.title.is_empty());
        assert_eq!(store.store_id, 4);

        let store: Store = serde_json::from_value(json!({"Title": 360, "StoreID": 5})).unwrap();
        assert_eq!(store.title, "360");
    }

    #[test]
    fn test_negative_store_id_is_accepted() {
        let store: Store = serde_json::from_value(json!({"StoreID": -1})).unwrap();
        assert_eq!(store.store_id, -1);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let store: Store = serde_json::from_value(json!({"StoreID": 3})).unwrap();
        assert_eq!(store.store_id, 3);
        assert!(store.title.is_empty());
        assert!(!store.show_see_all_deals);
    }

    #[test]
    fn test_field_names_are_case_sensitive() {
        let store: Store = serde_json::from_value(json!({"storeid": 9, "title": "x"})).unwrap();
        assert_eq!(store.store_id, 0);
        assert!(store.title.is_empty());
    }

    #[test]
    fn test_categories_are_not_serialized() {
        let value = serde_json::to_value(Store::default()).unwrap();
        assert!(value.get("categories").is_none());
        assert!(value.get("StoreID").is_some());
    }
}
