//! Category record.

use serde::{Deserialize, Serialize};

/// A taxonomy node within a store.
///
/// Returned by `GET /Stores.egg/Categories/{storeId}`. The `node_id` is the
/// value used to filter navigation and search requests.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Category {
    /// Display name of the category.
    #[serde(rename = "Description", deserialize_with = "super::string_or_number::deserialize")]
    pub description: String,

    /// Category type code.
    #[serde(rename = "CategoryType")]
    pub category_type: i32,

    /// Category identifier.
    #[serde(rename = "CategoryID")]
    pub category_id: i64,

    /// Identifier of the owning store.
    #[serde(rename = "StoreID")]
    pub store_id: i64,

    /// Whether the category shows a "see all deals" link.
    #[serde(rename = "ShowSeeAllDeals")]
    pub show_see_all_deals: bool,

    /// Navigation node identifier.
    #[serde(rename = "NodeId")]
    pub node_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_deserializes_pascal_case_fields() {
        let category: Category = serde_json::from_value(json!({
            "Description": "Backup Devices & Media",
            "CategoryType": 0,
            "CategoryID": 2,
            "StoreID": 1,
            "ShowSeeAllDeals": true,
            "NodeId": 6642
        }))
        .unwrap();

        assert_eq!(
            category,
            Category {
                description: "Backup Devices & Media".to_string(),
                category_type: 0,
                category_id: 2,
                store_id: 1,
                show_see_all_deals: true,
                node_id: 6642,
            }
        );
    }

    #[test]
    fn test_negative_ids_are_accepted() {
        let category: Category = serde_json::from_value(json!({
            "Description": "Deals",
            "CategoryID": -1,
            "StoreID": 1,
            "NodeId": -1
        }))
        .unwrap();

        assert_eq!(category.category_id, -1);
        assert_eq!(category.node_id, -1);
        assert_eq!(category.store_id, 1);
    }

    #[test]
    fn test_null_description_is_empty() {
        let category: Category =
            serde_json::from_value(json!({"Description": null, "NodeId": 12})).unwrap();
        assert!(category.description.is_empty());
        assert_eq!(category.node_id, 12);
    }

    #[test]
    fn test_node_id_is_not_node_i_d() {
        let category: Category = serde_json::from_value(json!({"NodeID": 1})).unwrap();
        assert_eq!(category.node_id, 0);
    }
}
