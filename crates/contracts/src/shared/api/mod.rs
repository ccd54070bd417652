//! Envelopes of the storefront REST API.
//!
//! List endpoints answer `{ success, <collection key>: [...], stats? }`, the
//! collection key differs per resource (`products`, `orders`, ...).
//! Mutations answer `{ success, message? , ... }`; failures carry `{ message }`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EnvelopeError {
    #[error("response has no `{0}` collection")]
    MissingCollection(String),

    #[error("request rejected: {0}")]
    Rejected(String),

    #[error("malformed `{key}` collection: {reason}")]
    Malformed { key: String, reason: String },
}

/// Parsed list response
#[derive(Debug, Clone, PartialEq)]
pub struct ListEnvelope<T> {
    pub records: Vec<T>,
    pub stats: Option<Value>,
}

impl<T: DeserializeOwned> ListEnvelope<T> {
    /// Extract the collection stored under `collection_key`.
    ///
    /// A bare JSON array is accepted as the collection itself.
    pub fn from_value(value: Value, collection_key: &str) -> Result<Self, EnvelopeError> {
        let mut object = match value {
            Value::Array(_) => {
                return Ok(Self {
                    records: parse_records(value, collection_key)?,
                    stats: None,
                })
            }
            Value::Object(object) => object,
            _ => return Err(EnvelopeError::MissingCollection(collection_key.to_string())),
        };

        if object.get("success").and_then(Value::as_bool) == Some(false) {
            return Err(EnvelopeError::Rejected(message_of(&object)));
        }

        let collection = object
            .remove(collection_key)
            .ok_or_else(|| EnvelopeError::MissingCollection(collection_key.to_string()))?;
        let stats = object.remove("stats").filter(|s| !s.is_null());

        Ok(Self {
            records: parse_records(collection, collection_key)?,
            stats,
        })
    }
}

/// Records are parsed one by one; a record that does not parse is logged and
/// left out instead of failing the whole page
fn parse_records<T: DeserializeOwned>(value: Value, key: &str) -> Result<Vec<T>, EnvelopeError> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(EnvelopeError::Malformed {
                key: key.to_string(),
                reason: format!("expected an array, got {}", json_kind(&other)),
            })
        }
    };

    let total = items.len();
    let records: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("skipping `{}` record #{}: {}", key, index, e);
                None
            }
        })
        .collect();
    if records.len() < total {
        log::warn!("{} of {} `{}` records skipped", total - records.len(), total, key);
    }
    Ok(records)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// `#[serde(deserialize_with)]` helper: `null` reads as the type's default,
/// like a missing field does with `#[serde(default)]`
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn message_of(object: &Map<String, Value>) -> String {
    object
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("no message")
        .to_string()
}

/// Answer of single-record mutations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    /// The mutated entity and anything else the API sent along
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body the API sends with a failing status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Body of `POST /api/{resource}/bulk/{action}`: the ids plus the action's
/// own parameters at the top level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkRequest {
    pub ids: Vec<String>,
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

/// Aggregate answer of a bulk endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkResult {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, alias = "modifiedCount", alias = "deletedCount")]
    pub affected: Option<u64>,
}

fn default_success() -> bool {
    true
}

/// Operation applied to the whole selection in one call
#[derive(Debug, Clone, PartialEq)]
pub enum BulkAction {
    Delete,
    UpdateStatus { status: String },
    UpdateCommission { commission_rate: f64 },
}

impl BulkAction {
    /// Last path segment of the bulk endpoint
    pub fn path_segment(&self) -> &'static str {
        match self {
            BulkAction::Delete => "delete",
            BulkAction::UpdateStatus { .. } => "update-status",
            BulkAction::UpdateCommission { .. } => "update-commission",
        }
    }

    pub fn is_destructive(&self) -> bool {
        matches!(self, BulkAction::Delete)
    }

    pub fn to_request(&self, ids: Vec<String>) -> BulkRequest {
        let mut params = Map::new();
        match self {
            BulkAction::Delete => {}
            BulkAction::UpdateStatus { status } => {
                params.insert("status".into(), Value::String(status.clone()));
            }
            BulkAction::UpdateCommission { commission_rate } => {
                params.insert("commissionRate".into(), Value::from(*commission_rate));
            }
        }
        BulkRequest { ids, params }
    }
}
