use serde::{Deserialize, Serialize};

use crate::shared::api::null_as_default;
use crate::shared::list_view::{ListConfig, ListRecord, SelectAllScope};

pub const RESOURCE: &str = "blogs";
pub const COLLECTION_KEY: &str = "blogs";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogStatus {
    Published,
    Draft,
    #[default]
    #[serde(other)]
    Unknown,
}

impl BlogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlogStatus::Published => "published",
            BlogStatus::Draft => "draft",
            BlogStatus::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: BlogStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub views: u64,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl ListRecord for Blog {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "title" => Some(self.title.clone()),
            "slug" => self.slug.clone(),
            "author" => self.author.clone(),
            "category" => self.category.clone(),
            "status" => Some(self.status.as_str().to_string()),
            "views" => Some(self.views.to_string()),
            "created_at" => self.created_at.map(|d| d.to_rfc3339()),
            _ => None,
        }
    }
}

/// Posts are bulk-managed page by page: select-all only takes the rows on
/// screen.
pub fn list_config() -> ListConfig {
    ListConfig::new("status")
        .tab("Published", BlogStatus::Published.as_str())
        .tab("Draft", BlogStatus::Draft.as_str())
        .searchable(&["title", "author", "category", "status"])
        .page_size(10)
        .select_all_scope(SelectAllScope::CurrentPage)
}
