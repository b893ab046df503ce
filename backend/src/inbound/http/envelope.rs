//! Uniform response envelope.
//!
//! Every response body, success or failure, is an [`ApiResponse`]. Success
//! bodies carry `code` 1000 and a `result`; failures carry the catalog code
//! and message. `timestamp` and `path` are always present.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};
use crate::middleware::trace::current_path;

/// Code reported by every successful response.
pub const SUCCESS_CODE: u16 = 1000;

/// Response wrapper shared by all endpoints. Absent fields are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    #[schema(example = 1000)]
    pub code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    pub timestamp: DateTime<Utc>,
    #[schema(example = "/shops")]
    pub path: String,
}

impl<T> ApiResponse<T> {
    /// Successful envelope around `result`.
    pub fn success(result: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            message: None,
            result: Some(result),
            timestamp: Utc::now(),
            path: request_path(),
        }
    }
}

impl ApiResponse<serde_json::Value> {
    /// Failure envelope for `error`. Uncategorized faults always report the
    /// catalog default so internal detail never reaches the caller.
    pub fn failure(error: &Error) -> Self {
        let message = match error.code() {
            ErrorCode::UncategorizedException => error.code().message(),
            _ => error.message(),
        };
        Self {
            code: error.code().code(),
            message: Some(message.to_owned()),
            result: None,
            timestamp: Utc::now(),
            path: request_path(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    /// Render as an HTTP response with `status`.
    pub fn respond(&self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status).json(self)
    }
}

fn request_path() -> String {
    current_path().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::trace::scope_path;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[tokio::test]
    async fn success_envelope_omits_message() {
        let envelope = scope_path("/categories", async { ApiResponse::success(json!(["books"])) })
            .await;
        let body = serde_json::to_value(&envelope).expect("serialise envelope");

        assert_eq!(body["code"], 1000);
        assert_eq!(body["result"], json!(["books"]));
        assert_eq!(body["path"], "/categories");
        assert!(body.get("message").is_none());
        assert!(body["timestamp"].is_string());
    }

    #[rstest]
    #[tokio::test]
    async fn failure_envelope_omits_result() {
        let error = Error::new(ErrorCode::ShopNotExist);
        let envelope = scope_path("/shops/x", async { ApiResponse::failure(&error) }).await;
        let body: Value = serde_json::to_value(&envelope).expect("serialise envelope");

        assert_eq!(body["code"], 1300);
        assert_eq!(body["message"], "Shop does not exist");
        assert_eq!(body["path"], "/shops/x");
        assert!(body.get("result").is_none());
    }

    #[rstest]
    fn failure_hides_internal_detail() {
        let error = Error::with_message(ErrorCode::UncategorizedException, "db password leaked")
            .with_cause("pool exhausted");
        let envelope = ApiResponse::failure(&error);
        assert_eq!(envelope.message.as_deref(), Some("Uncategorized Exception"));
        assert_eq!(envelope.path, "");
    }
}
