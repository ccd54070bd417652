//! REST client for the storefront resources.
//!
//! Every list page talks to its resource through [`ListApi`]; the browser
//! implementation is [`RestResource`], tests plug in an in-memory one.

use std::marker::PhantomData;

use async_trait::async_trait;
use contracts::shared::api::{
    BulkAction, BulkResult, EnvelopeError, ErrorBody, ListEnvelope, MutationResponse,
};
use contracts::system::auth::Session;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use super::api_utils::{api_base, resource_url};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server answered {status}: {message}")]
    Http { status: u16, message: String },

    #[error("{0}")]
    Rejected(String),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("not signed in")]
    NotAuthenticated,
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::NotAuthenticated | ApiError::Http { status: 401, .. }
        )
    }
}

impl From<EnvelopeError> for ApiError {
    fn from(e: EnvelopeError) -> Self {
        match e {
            EnvelopeError::Rejected(message) => ApiError::Rejected(message),
            other => ApiError::Decode(other.to_string()),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Operations a list page needs from its backend resource
#[async_trait(?Send)]
pub trait ListApi<T> {
    async fn fetch_list(&self) -> Result<ListEnvelope<T>, ApiError>;

    async fn delete(&self, id: &str) -> Result<MutationResponse, ApiError>;

    async fn bulk(&self, action: &BulkAction, ids: Vec<String>) -> Result<BulkResult, ApiError>;

    /// Record-scoped action such as `retry-tracking`
    async fn record_action(&self, id: &str, action: &str) -> Result<MutationResponse, ApiError>;
}

/// `ListApi` over `{base}/api/{resource}` with gloo-net
pub struct RestResource<T> {
    base: String,
    resource: &'static str,
    collection_key: &'static str,
    bearer: Option<String>,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for RestResource<T> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            resource: self.resource,
            collection_key: self.collection_key,
            bearer: self.bearer.clone(),
            _record: PhantomData,
        }
    }
}

impl<T> RestResource<T> {
    pub fn new(
        resource: &'static str,
        collection_key: &'static str,
        session: Option<&Session>,
    ) -> Self {
        Self {
            base: api_base(),
            resource,
            collection_key,
            bearer: session.map(Session::bearer),
            _record: PhantomData,
        }
    }

    pub fn resource(&self) -> &'static str {
        self.resource
    }

    fn url(&self, segments: &[&str]) -> String {
        resource_url(&self.base, self.resource, segments)
    }

    fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let bearer = self.bearer.as_deref().ok_or(ApiError::NotAuthenticated)?;
        Ok(builder.header("Authorization", bearer))
    }
}

#[async_trait(?Send)]
impl<T: DeserializeOwned> ListApi<T> for RestResource<T> {
    async fn fetch_list(&self) -> Result<ListEnvelope<T>, ApiError> {
        let response = self.authorized(Request::get(&self.url(&[])))?.send().await?;
        let body = read_json(response).await?;
        Ok(ListEnvelope::from_value(body, self.collection_key)?)
    }

    async fn delete(&self, id: &str) -> Result<MutationResponse, ApiError> {
        let response = self
            .authorized(Request::delete(&self.url(&[id])))?
            .send()
            .await?;
        mutation_from_value(read_json(response).await?)
    }

    async fn bulk(&self, action: &BulkAction, ids: Vec<String>) -> Result<BulkResult, ApiError> {
        let body = action.to_request(ids);
        let response = self
            .authorized(Request::post(&self.url(&["bulk", action.path_segment()])))?
            .json(&body)?
            .send()
            .await?;
        bulk_result_from_value(read_json(response).await?)
    }

    async fn record_action(&self, id: &str, action: &str) -> Result<MutationResponse, ApiError> {
        let response = self
            .authorized(Request::post(&self.url(&[id, action])))?
            .send()
            .await?;
        mutation_from_value(read_json(response).await?)
    }
}

async fn read_json(response: Response) -> Result<Value, ApiError> {
    if !response.ok() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let error = error_from_body(status, &response.status_text(), &text);
        log::warn!("{} {}: {}", status, response.url(), error);
        return Err(error);
    }

    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Error for a non-2xx answer, preferring the `message` the API sent
pub fn error_from_body(status: u16, status_text: &str, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.message)
        .ok()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            if status_text.is_empty() {
                format!("HTTP {}", status)
            } else {
                status_text.to_string()
            }
        });
    ApiError::Http { status, message }
}

/// Empty 2xx bodies count as success
pub fn mutation_from_value(value: Value) -> Result<MutationResponse, ApiError> {
    if value.is_null() {
        return Ok(MutationResponse {
            success: true,
            message: None,
            extra: Default::default(),
        });
    }
    let response: MutationResponse =
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !response.success {
        return Err(ApiError::Rejected(
            response.message.unwrap_or_else(|| "request rejected".into()),
        ));
    }
    Ok(response)
}

pub fn bulk_result_from_value(value: Value) -> Result<BulkResult, ApiError> {
    if value.is_null() {
        return Ok(BulkResult {
            success: true,
            message: None,
            affected: None,
        });
    }
    let result: BulkResult =
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !result.success {
        return Err(ApiError::Rejected(
            result.message.unwrap_or_else(|| "bulk action rejected".into()),
        ));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_from_body_prefers_api_message() {
        let err = error_from_body(403, "Forbidden", r#"{"message":"Admin only"}"#);
        assert_eq!(
            err,
            ApiError::Http {
                status: 403,
                message: "Admin only".into()
            }
        );

        let err = error_from_body(500, "Internal Server Error", "<html>");
        assert_eq!(err.to_string(), "server answered 500: Internal Server Error");

        let err = error_from_body(502, "", "");
        assert_eq!(err.to_string(), "server answered 502: HTTP 502");
    }

    #[test]
    fn test_unauthorized() {
        assert!(ApiError::NotAuthenticated.is_unauthorized());
        assert!(error_from_body(401, "Unauthorized", "").is_unauthorized());
        assert!(!ApiError::Rejected("no".into()).is_unauthorized());
    }

    #[test]
    fn test_mutation_success_flag() {
        let ok = mutation_from_value(json!({ "success": true, "product": { "_id": "p1" } })).unwrap();
        assert!(ok.extra.contains_key("product"));

        assert!(mutation_from_value(Value::Null).unwrap().success);

        let err = mutation_from_value(json!({ "success": false, "message": "In use" })).unwrap_err();
        assert_eq!(err, ApiError::Rejected("In use".into()));
    }

    #[test]
    fn test_bulk_result_success_flag() {
        let ok = bulk_result_from_value(json!({ "success": true, "modifiedCount": 4 })).unwrap();
        assert_eq!(ok.affected, Some(4));

        let err = bulk_result_from_value(json!({ "success": false })).unwrap_err();
        assert_eq!(err, ApiError::Rejected("bulk action rejected".into()));
    }

    #[test]
    fn test_envelope_errors_map() {
        let rejected: ApiError = EnvelopeError::Rejected("Unauthorized".into()).into();
        assert_eq!(rejected, ApiError::Rejected("Unauthorized".into()));

        let missing: ApiError = EnvelopeError::MissingCollection("orders".into()).into();
        assert!(matches!(missing, ApiError::Decode(_)));
    }
}
