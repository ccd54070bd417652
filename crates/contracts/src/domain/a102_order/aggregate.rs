use serde::{Deserialize, Serialize};

use crate::shared::api::null_as_default;
use crate::shared::list_view::record::amount_text;
use crate::shared::list_view::{ListConfig, ListRecord};

// ============================================================================
// Resource
// ============================================================================

pub const RESOURCE: &str = "orders";
pub const COLLECTION_KEY: &str = "orders";

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    #[default]
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Statuses an administrator can move orders to in bulk
    pub const ASSIGNABLE: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Unknown => "Unknown",
        }
    }
}

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer: Customer,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_amount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub item_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl ListRecord for Order {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "order_number" => Some(self.order_number.clone()),
            "customer" => Some(self.customer.name.clone()),
            "email" => self.customer.email.clone(),
            "total" => Some(amount_text(self.total_amount)),
            "items" => Some(self.item_count.to_string()),
            "status" => Some(self.status.as_str().to_string()),
            "payment_status" => self.payment_status.clone(),
            "created_at" => self.created_at.map(|d| d.to_rfc3339()),
            _ => None,
        }
    }
}

pub fn list_config() -> ListConfig {
    OrderStatus::ASSIGNABLE
        .iter()
        .fold(ListConfig::new("status"), |config, status| {
            config.tab(status.label(), status.as_str())
        })
        .searchable(&["order_number", "customer", "email", "total", "status"])
}
