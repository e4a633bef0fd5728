//! TaskStore port - タスクの正本（source of truth）

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Task, TaskCounts, TaskId, TaskStatus};

/// TaskStore は全タスクの正本（source of truth）
///
/// v1 is in-memory, but this trait is the seam for swapping implementations
/// later (SQLite, PostgreSQL, ...).
///
/// # 設計原則
/// - 返すのは常にコピー。内部状態への参照は外に出さない
/// - 挿入順を保持する（list はその順で返す）
/// - 「存在しない ID」は Option / bool で表現し、ドメインエラーへの変換は
///   service 側の責務
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Append a task (insertion order is preserved).
    async fn insert(&self, task: Task);

    /// All tasks, insertion order, copies.
    async fn list(&self) -> Vec<Task>;

    /// Tasks with the given status, insertion order.
    async fn list_by_status(&self, status: TaskStatus) -> Vec<Task>;

    /// One task by ID.
    async fn get(&self, id: TaskId) -> Option<Task>;

    /// Set the status of the task with the given ID, refreshing its
    /// `updated_at` to `now`. Returns the updated copy, or None if absent.
    async fn update_status(
        &self,
        id: TaskId,
        status: TaskStatus,
        now: DateTime<Utc>,
    ) -> Option<Task>;

    /// Remove a task. Returns false if no task had that ID.
    async fn remove(&self, id: TaskId) -> bool;

    /// Observability hook (feeds stats and the health endpoint).
    async fn counts_by_status(&self) -> TaskCounts;
}
