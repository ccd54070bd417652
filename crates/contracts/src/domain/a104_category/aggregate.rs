use serde::{Deserialize, Serialize};

use crate::shared::api::null_as_default;
use crate::shared::list_view::{ListConfig, ListRecord};

pub const RESOURCE: &str = "categories";
pub const COLLECTION_KEY: &str = "categories";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryStatus {
    Active,
    Inactive,
    #[default]
    #[serde(other)]
    Unknown,
}

impl CategoryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryStatus::Active => "active",
            CategoryStatus::Inactive => "inactive",
            CategoryStatus::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParentRef {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub parent: Option<ParentRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: CategoryStatus,
}

impl Category {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl ListRecord for Category {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "slug" => self.slug.clone(),
            "parent" => self.parent.as_ref().map(|p| p.name.clone()),
            "product_count" => Some(self.product_count.to_string()),
            "status" => Some(self.status.as_str().to_string()),
            _ => None,
        }
    }
}

pub fn list_config() -> ListConfig {
    ListConfig::new("status")
        .tab("Active", CategoryStatus::Active.as_str())
        .tab("Inactive", CategoryStatus::Inactive.as_str())
        .searchable(&["name", "slug", "parent", "product_count", "status"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_is_searchable() {
        let category: Category = serde_json::from_value(serde_json::json!({
            "_id": "c2",
            "name": "Shirts",
            "parent": { "_id": "c1", "name": "Apparel" },
            "productCount": 14,
            "status": "active"
        }))
        .unwrap();
        assert!(!category.is_root());
        assert_eq!(category.field_value("parent").as_deref(), Some("Apparel"));
        assert_eq!(category.field_value("product_count").as_deref(), Some("14"));
        assert_eq!(category.field_value("slug"), None);
    }
}
