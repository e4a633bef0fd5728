//! Domain errors.
//!
//! エラーは 2 分類:
//! - **Validation**: 入力不正。フィールド単位の詳細を持つ（HTTP 400）
//! - **NotFound**: 指定 ID のタスクが存在しない（HTTP 404）
//!
//! 予期しない障害（HTTP 500）はドメインの分類ではないので、ここには現れない。
//! HTTP 層がハンドラの外側で包む。

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ids::TaskId;

/// A single field-level validation failure.
///
/// Serializable so the HTTP layer can surface it verbatim in `details`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum TaskError {
    #[error("validation failed ({} field(s))", .0.len())]
    Validation(Vec<FieldError>),

    #[error("task not found: id={0}")]
    NotFound(TaskId),
}

impl TaskError {
    /// Field-level details, if this is a validation error.
    pub fn field_errors(&self) -> Option<&[FieldError]> {
        match self {
            TaskError::Validation(errors) => Some(errors),
            TaskError::NotFound(_) => None,
        }
    }
}
