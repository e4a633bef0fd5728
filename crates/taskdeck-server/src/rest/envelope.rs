//! Uniform JSON envelope: `{success, data | error, details?}`.
//!
//! 成功・失敗を問わず API のレスポンスはこの形。ハンドラは
//! `Result<(StatusCode, Json<Value>), ApiError>` を返し、エラー側の
//! ステータスコード変換はすべてここに集約する。
//!
//! 変換表:
//! - validation      -> 400 "Validation error" + details（フィールド単位）
//! - malformed id    -> 400 "Invalid task ID"
//! - not-found       -> 404 "Task not found"
//! - anything else   -> 500 "Internal server error"（詳細は漏らさない）

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use taskdeck_core::domain::{FieldError, TaskError};

/// 200 OK with data.
pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "success": true, "data": data })),
    )
}

/// 201 Created with data.
pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<Value>) {
    (
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": data })),
    )
}

/// 200 OK with a human-readable message instead of data (delete).
pub fn ok_message(message: &str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "success": true, "message": message })),
    )
}

/// API error: status code + envelope body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub details: Option<Value>,
}

impl ApiError {
    /// 400 — request body failed field validation.
    pub fn validation(details: &[FieldError]) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: "Validation error",
            details: Some(json!(details)),
        }
    }

    /// 400 — path parameter is not a UUID.
    pub fn invalid_id() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: "Invalid task ID",
            details: None,
        }
    }

    /// 404 — no task with that ID.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error: "Task not found",
            details: None,
        }
    }

    /// 500 — unexpected fault. No detail leaked to the client.
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: "Internal server error",
            details: None,
        }
    }
}

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::Validation(fields) => ApiError::validation(&fields),
            TaskError::NotFound(_) => ApiError::not_found(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = json!({ "success": false, "error": self.error });
        if let Some(details) = self.details {
            body["details"] = details;
        }
        (self.status, Json(body)).into_response()
    }
}

/// Decode a request body that already parsed as JSON into `T`.
///
/// serde の型エラー（不正な status 値など）を zod 同様の
/// 400 "Validation error" に変換する。
pub fn parse_body<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value)
        .map_err(|e| ApiError::validation(&[FieldError::new("body", e.to_string())]))
}
