//! In-memory store implementation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::domain::{Task, TaskCounts, TaskId, TaskStatus};
use crate::ports::TaskStore;

/// In-memory store state.
///
/// Design:
/// - A plain `Vec` in insertion order is the whole data model. Insertion
///   order is the only ordering guarantee, and lookups scan.
/// - One lock around the vec; every operation holds it for its full
///   critical section, so no two operations interleave mid-mutation.
struct InMemoryStoreState {
    tasks: Vec<Task>,
}

impl InMemoryStoreState {
    fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    fn counts_by_status(&self) -> TaskCounts {
        let mut counts = TaskCounts {
            total: self.tasks.len(),
            ..TaskCounts::default()
        };
        for task in &self.tasks {
            match task.status {
                TaskStatus::Pending => counts.pending += 1,
                TaskStatus::Done => counts.done += 1,
            }
        }
        counts
    }
}

/// In-memory TaskStore implementation.
pub struct InMemoryStore {
    state: Arc<Mutex<InMemoryStoreState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(InMemoryStoreState::new())),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskStore for InMemoryStore {
    async fn insert(&self, task: Task) {
        let mut state = self.state.lock().await;
        state.tasks.push(task);
    }

    async fn list(&self) -> Vec<Task> {
        let state = self.state.lock().await;
        state.tasks.clone()
    }

    async fn list_by_status(&self, status: TaskStatus) -> Vec<Task> {
        let state = self.state.lock().await;
        state
            .tasks
            .iter()
            .filter(|t| t.status == status)
            .cloned()
            .collect()
    }

    async fn get(&self, id: TaskId) -> Option<Task> {
        let state = self.state.lock().await;
        state.position(id).map(|i| state.tasks[i].clone())
    }

    async fn update_status(
        &self,
        id: TaskId,
        status: TaskStatus,
        now: DateTime<Utc>,
    ) -> Option<Task> {
        let mut state = self.state.lock().await;
        let i = state.position(id)?;
        state.tasks[i].set_status(status, now);
        Some(state.tasks[i].clone())
    }

    async fn remove(&self, id: TaskId) -> bool {
        let mut state = self.state.lock().await;
        match state.position(id) {
            Some(i) => {
                state.tasks.remove(i);
                true
            }
            None => false,
        }
    }

    async fn counts_by_status(&self) -> TaskCounts {
        let state = self.state.lock().await;
        state.counts_by_status()
    }
}
