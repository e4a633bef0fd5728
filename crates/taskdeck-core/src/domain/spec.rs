//! Input specs for task operations (create / status patch).
//!
//! These are the request-body shapes before they become a [`Task`].
//! Validation collects every field-level violation instead of stopping at
//! the first one, so the HTTP layer can report all of them at once.

use serde::{Deserialize, Serialize};

use super::errors::{FieldError, TaskError};
use super::task::TaskStatus;

/// タイトルの最大文字数（Unicode スカラー値で数える）。
pub const TITLE_MAX_CHARS: usize = 100;

/// 説明の最大文字数。
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Input spec for creating a task.
///
/// `status` は省略可能で、省略時は pending（`#[serde(default)]`）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSpec {
    pub title: String,
    pub description: String,

    #[serde(default = "default_status")]
    pub status: TaskStatus,
}

fn default_status() -> TaskStatus {
    TaskStatus::Pending
}

impl TaskSpec {
    /// Convenience constructor for the common "pending task" case.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: TaskStatus::Pending,
        }
    }

    /// Validate field constraints. Returns every violation, not just the first.
    pub fn validate(&self) -> Result<(), TaskError> {
        let mut errors = Vec::new();

        if self.title.is_empty() {
            errors.push(FieldError::new("title", "Title is required"));
        } else if self.title.chars().count() > TITLE_MAX_CHARS {
            errors.push(FieldError::new(
                "title",
                "Title must be less than 100 characters",
            ));
        }

        if self.description.is_empty() {
            errors.push(FieldError::new("description", "Description is required"));
        } else if self.description.chars().count() > DESCRIPTION_MAX_CHARS {
            errors.push(FieldError::new(
                "description",
                "Description must be less than 500 characters",
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(TaskError::Validation(errors))
        }
    }
}

/// Input spec for `PATCH /tasks/{id}`: status only.
///
/// 不正な status 値は serde のデシリアライズ段階で弾かれる
/// （HTTP 層で 400 になる）。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatusPatch {
    pub status: TaskStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn valid_spec_passes() {
        let spec = TaskSpec::new("buy milk", "two liters");
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn spec_without_status_defaults_to_pending() {
        let json = r#"{ "title": "hello", "description": "world" }"#;
        let spec: TaskSpec = serde_json::from_str(json).expect("deserialize");
        assert_eq!(spec.status, TaskStatus::Pending);
    }

    #[rstest]
    #[case::empty_title("", "desc", "title")]
    #[case::empty_description("title", "", "description")]
    fn empty_fields_are_rejected(
        #[case] title: &str,
        #[case] description: &str,
        #[case] bad_field: &str,
    ) {
        let spec = TaskSpec::new(title, description);
        let err = spec.validate().unwrap_err();

        let TaskError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, bad_field);
    }

    #[test]
    fn over_long_fields_are_rejected() {
        let spec = TaskSpec::new("a".repeat(101), "b".repeat(501));
        let err = spec.validate().unwrap_err();

        let TaskError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        // 両方の違反がまとめて返る
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn boundary_lengths_are_accepted() {
        let spec = TaskSpec::new("a".repeat(100), "b".repeat(500));
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn length_is_counted_in_chars_not_bytes() {
        // 100 文字の日本語タイトルは 300 バイトあるが有効
        let spec = TaskSpec::new("あ".repeat(100), "説明".repeat(10));
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn status_patch_rejects_unknown_status() {
        let json = r#"{ "status": "archived" }"#;
        assert!(serde_json::from_str::<StatusPatch>(json).is_err());
    }
}
