use serde::{Deserialize, Serialize};

use crate::shared::api::null_as_default;
use crate::shared::list_view::record::amount_text;
use crate::shared::list_view::{ListConfig, ListRecord};

// ============================================================================
// Resource
// ============================================================================

/// Path segment under `/api`
pub const RESOURCE: &str = "products";
/// Key of the collection in the list response
pub const COLLECTION_KEY: &str = "products";

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Enabled,
    Disabled,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Enabled => "enabled",
            ProductStatus::Disabled => "disabled",
            ProductStatus::Unknown => "unknown",
        }
    }
}

// ============================================================================
// Record
// ============================================================================

/// Reference to the category a product belongs to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: i64,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ProductStatus,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Product {
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.quantity <= 0
    }
}

impl ListRecord for Product {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "sku" => self.sku.clone(),
            "price" => Some(amount_text(self.price)),
            "quantity" => Some(self.quantity.to_string()),
            "category" => self.category_name().map(str::to_string),
            "status" => Some(self.status.as_str().to_string()),
            "created_at" => self.created_at.map(|d| d.to_rfc3339()),
            _ => None,
        }
    }
}

/// Tabs, search fields and paging of the products page
pub fn list_config() -> ListConfig {
    ListConfig::new("status")
        .tab("Enabled", ProductStatus::Enabled.as_str())
        .tab("Disabled", ProductStatus::Disabled.as_str())
        .searchable(&["name", "sku", "price", "quantity", "status", "category"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{FilterState, ListStore};

    fn sample() -> Vec<Product> {
        serde_json::from_value(serde_json::json!([
            {
                "_id": "p1",
                "name": "Linen Shirt",
                "price": 49.5,
                "quantity": 12,
                "category": { "_id": "c1", "name": "Apparel" },
                "status": "enabled",
                "createdAt": "2025-03-01T10:00:00Z"
            },
            {
                "_id": "p2",
                "name": "Desk Lamp",
                "sku": "LMP-2",
                "price": 20,
                "status": "disabled"
            },
            {
                "_id": "p3",
                "name": "Mystery Box",
                "price": 5,
                "status": "archived"
            }
        ]))
        .unwrap()
    }

    #[test]
    fn test_deserialize_defaults() {
        let products = sample();
        assert_eq!(products[1].quantity, 0);
        assert!(products[1].is_out_of_stock());
        assert_eq!(products[2].status, ProductStatus::Unknown);
        assert_eq!(products[0].category_name(), Some("Apparel"));
    }

    #[test]
    fn test_search_by_price_and_category() {
        let mut store = ListStore::new(list_config());
        store.replace_records(sample());

        store.set_search("apparel");
        assert_eq!(store.filtered()[0].id, "p1");

        store.set_search("20");
        let ids: Vec<_> = store.filtered().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p2"]);
    }

    #[test]
    fn test_tabs() {
        let mut store = ListStore::new(list_config());
        store.replace_records(sample());
        store.set_tab("Disabled");
        assert_eq!(store.filtered().len(), 1);
        assert_eq!(*store.filter(), FilterState {
            search_text: String::new(),
            active_tab: "Disabled".into(),
        });
    }
}
