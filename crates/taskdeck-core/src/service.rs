//! TaskService - アプリケーションロジック
//!
//! ports（TaskStore / Clock / IdGenerator）を束ねて、タスクの
//! list / create / update_status / delete を提供します。
//! ID と時刻の採番はすべてここを通るので、ハンドラ側に impure な処理は
//! 残りません。

use std::sync::Arc;

use crate::domain::{StatusPatch, Task, TaskCounts, TaskError, TaskId, TaskSpec, TaskStatus};
use crate::ports::{Clock, IdGenerator, SystemClock, TaskStore, UuidGenerator};
use crate::store::InMemoryStore;

/// TaskService は store の上の操作面
///
/// Design:
/// - Built during initialization, then shared via `Arc` (immutable wiring).
/// - Validation happens here, before the store is touched, so a rejected
///   create leaves the store unchanged.
pub struct TaskService {
    store: Arc<dyn TaskStore>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl TaskService {
    pub fn new(
        store: Arc<dyn TaskStore>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { store, ids, clock }
    }

    /// Production wiring: in-memory store, UUID v4, system clock.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryStore::new()),
            Arc::new(UuidGenerator),
            Arc::new(SystemClock),
        )
    }

    /// All tasks in insertion order, optionally filtered by status.
    pub async fn list(&self, status: Option<TaskStatus>) -> Vec<Task> {
        match status {
            Some(status) => self.store.list_by_status(status).await,
            None => self.store.list().await,
        }
    }

    /// Validate the spec, assign a fresh ID and timestamps, and append.
    ///
    /// 生成直後は `created_at == updated_at`。
    pub async fn create(&self, spec: TaskSpec) -> Result<Task, TaskError> {
        spec.validate()?;

        let task = Task::new(
            self.ids.generate_task_id(),
            spec.title,
            spec.description,
            spec.status,
            self.clock.now(),
        );
        self.store.insert(task.clone()).await;
        Ok(task)
    }

    /// Set the status of an existing task, refreshing `updated_at`.
    pub async fn update_status(&self, id: TaskId, patch: StatusPatch) -> Result<Task, TaskError> {
        self.store
            .update_status(id, patch.status, self.clock.now())
            .await
            .ok_or(TaskError::NotFound(id))
    }

    /// Remove a task.
    pub async fn delete(&self, id: TaskId) -> Result<(), TaskError> {
        if self.store.remove(id).await {
            Ok(())
        } else {
            Err(TaskError::NotFound(id))
        }
    }

    /// Counts by status (stats strip / health endpoint).
    pub async fn counts(&self) -> TaskCounts {
        self.store.counts_by_status().await
    }
}
