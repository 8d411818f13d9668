//! Task storage.
//!
//! Stores keep tasks in insertion order; that order is the only ordering
//! the rest of the crate relies on.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Task, TaskError, TaskResult};

/// Task store trait - implemented by all storage backends.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Whether this store persists data across restarts.
    fn is_persistent(&self) -> bool;

    /// Append a task to the end of the insertion order.
    async fn insert(&self, task: Task) -> Task;

    /// Overwrite the task with the same id, keeping its position.
    async fn replace(&self, task: Task) -> TaskResult<Task>;

    /// Remove a task by id. Remaining tasks keep their relative order.
    async fn remove(&self, id: &str) -> TaskResult<()>;

    /// Get a single task by id.
    async fn find_by_id(&self, id: &str) -> TaskResult<Task>;

    /// Copy of every task in insertion order, detached from later mutations.
    async fn snapshot(&self) -> Vec<Task>;

    /// Number of stored tasks.
    async fn count(&self) -> usize;
}

/// In-memory task store (non-persistent).
///
/// One lock guards the whole sequence, so a reader never sees a half-applied
/// mutation and snapshots are consistent copies.
#[derive(Clone, Default)]
pub struct InMemoryTaskStore {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    fn is_persistent(&self) -> bool {
        false
    }

    async fn insert(&self, task: Task) -> Task {
        let mut tasks = self.tasks.write().await;
        tasks.push(task.clone());
        tracing::debug!("Inserted task {} ({} stored)", task.id, tasks.len());
        task
    }

    async fn replace(&self, task: Task) -> TaskResult<Task> {
        let mut tasks = self.tasks.write().await;
        let slot = tasks
            .iter_mut()
            .find(|t| t.id == task.id)
            .ok_or_else(|| TaskError::task_not_found(&task.id))?;
        *slot = task.clone();
        tracing::debug!("Replaced task {}", task.id);
        Ok(task)
    }

    async fn remove(&self, id: &str) -> TaskResult<()> {
        let mut tasks = self.tasks.write().await;
        let index = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TaskError::task_not_found(id))?;
        tasks.remove(index);
        tracing::debug!("Removed task {} ({} stored)", id, tasks.len());
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> TaskResult<Task> {
        self.tasks
            .read()
            .await
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| TaskError::task_not_found(id))
    }

    async fn snapshot(&self) -> Vec<Task> {
        self.tasks.read().await.clone()
    }

    async fn count(&self) -> usize {
        self.tasks.read().await.len()
    }
}
