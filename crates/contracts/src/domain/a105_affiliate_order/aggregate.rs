use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::api::{null_as_default, BulkAction};
use crate::shared::list_view::record::amount_text;
use crate::shared::list_view::{ListConfig, ListRecord};

// ============================================================================
// Resource
// ============================================================================

pub const RESOURCE: &str = "affiliate/orders";
pub const COLLECTION_KEY: &str = "orders";
/// Record action that asks the API to re-run conversion tracking
pub const RETRY_TRACKING_ACTION: &str = "retry-tracking";

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommissionStatus {
    Pending,
    Approved,
    Paid,
    Rejected,
    #[default]
    #[serde(other)]
    Unknown,
}

impl CommissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommissionStatus::Pending => "pending",
            CommissionStatus::Approved => "approved",
            CommissionStatus::Paid => "paid",
            CommissionStatus::Rejected => "rejected",
            CommissionStatus::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackingStatus {
    Tracked,
    Failed,
    #[default]
    #[serde(other)]
    Pending,
}

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffiliateOrder {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub affiliate_name: String,
    #[serde(default)]
    pub affiliate_code: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_total: f64,
    /// Percent of the order total
    #[serde(default, deserialize_with = "null_as_default")]
    pub commission_rate: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub commission_amount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: CommissionStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tracking_status: TrackingStatus,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl AffiliateOrder {
    /// Tracking can be retried by hand once the API gave up on it
    pub fn can_retry_tracking(&self) -> bool {
        self.tracking_status == TrackingStatus::Failed
    }
}

impl ListRecord for AffiliateOrder {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "order_number" => Some(self.order_number.clone()),
            "affiliate" => Some(self.affiliate_name.clone()),
            "code" => self.affiliate_code.clone(),
            "order_total" => Some(amount_text(self.order_total)),
            "commission_rate" => Some(amount_text(self.commission_rate)),
            "commission" => Some(amount_text(self.commission_amount)),
            "status" => Some(self.status.as_str().to_string()),
            "created_at" => self.created_at.map(|d| d.to_rfc3339()),
            _ => None,
        }
    }
}

pub fn list_config() -> ListConfig {
    ListConfig::new("status")
        .tab("Pending", CommissionStatus::Pending.as_str())
        .tab("Approved", CommissionStatus::Approved.as_str())
        .tab("Paid", CommissionStatus::Paid.as_str())
        .tab("Rejected", CommissionStatus::Rejected.as_str())
        .searchable(&["order_number", "affiliate", "code", "commission", "status"])
}

// ============================================================================
// Commission update
// ============================================================================

#[derive(Debug, Error, PartialEq)]
pub enum CommissionRateError {
    #[error("commission rate is required")]
    Empty,
    #[error("commission rate `{0}` is not a number")]
    NotANumber(String),
    #[error("commission rate must be between 0 and 100, got {0}")]
    OutOfRange(f64),
}

/// Validate the rate typed into the bulk toolbar (percent, `%` allowed)
pub fn parse_commission_rate(input: &str) -> Result<f64, CommissionRateError> {
    let trimmed = input.trim().trim_end_matches('%').trim();
    if trimmed.is_empty() {
        return Err(CommissionRateError::Empty);
    }
    let rate: f64 = trimmed
        .replace(',', ".")
        .parse()
        .map_err(|_| CommissionRateError::NotANumber(input.trim().to_string()))?;
    if !rate.is_finite() || !(0.0..=100.0).contains(&rate) {
        return Err(CommissionRateError::OutOfRange(rate));
    }
    Ok(rate)
}

/// Bulk action for the commission toolbar, validated before any request
pub fn update_commission_action(input: &str) -> Result<BulkAction, CommissionRateError> {
    parse_commission_rate(input).map(|commission_rate| BulkAction::UpdateCommission { commission_rate })
}
