//! Task record: the sole domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TaskId;

/// Task status (two-state machine).
///
/// State transitions:
/// - Pending -> Done (user checks the task off)
/// - Done -> Pending (user unchecks it)
///
/// Design note: Using an enum ensures exhaustive matching and prevents
/// invalid states reaching the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Not yet done.
    Pending,

    /// Checked off.
    Done,
}

impl TaskStatus {
    pub fn is_done(self) -> bool {
        matches!(self, TaskStatus::Done)
    }
}

/// Metadata + content for a task in the store.
///
/// Design:
/// - This is the "single source of truth" for a task.
/// - All state transitions happen via methods, not raw field pokes.
/// - `id` and `created_at` are set once at construction and never change.
///
/// ワイヤ表現は camelCase（`createdAt` / `updatedAt`）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,

    /// Timestamps. `created_at` is immutable; `updated_at` is refreshed on
    /// every mutation, so `updated_at >= created_at` always holds.
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task. Both timestamps start equal.
    pub fn new(
        id: TaskId,
        title: String,
        description: String,
        status: TaskStatus,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the status and refresh `updated_at`.
    pub fn set_status(&mut self, status: TaskStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use uuid::Uuid;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    fn sample(now: DateTime<Utc>) -> Task {
        Task::new(
            TaskId::from_uuid(Uuid::new_v4()),
            "buy milk".to_string(),
            "two liters".to_string(),
            TaskStatus::Pending,
            now,
        )
    }

    #[test]
    fn new_task_starts_with_equal_timestamps() {
        let task = sample(t0());
        assert_eq!(task.created_at, task.updated_at);
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn set_status_refreshes_updated_at_only() {
        let mut task = sample(t0());
        let later = t0() + Duration::seconds(30);

        task.set_status(TaskStatus::Done, later);

        assert_eq!(task.status, TaskStatus::Done);
        assert_eq!(task.created_at, t0()); // 不変
        assert_eq!(task.updated_at, later);
        assert!(task.updated_at > task.created_at);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let task = sample(t0());
        let json = serde_json::to_value(&task).unwrap();

        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
        assert_eq!(json["status"], "pending");
    }

    #[test]
    fn status_roundtrips_as_lowercase() {
        assert_eq!(serde_json::to_value(TaskStatus::Done).unwrap(), "done");
        let s: TaskStatus = serde_json::from_value(serde_json::json!("pending")).unwrap();
        assert_eq!(s, TaskStatus::Pending);
    }
}
