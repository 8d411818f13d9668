//! Task records and the operations over them.
//!
//! - `store`: insertion-ordered storage with pluggable backends
//! - `page`: cursor-based pagination over a store snapshot
//! - `service`: create / list / get / update / delete entry points

mod error;
pub mod page;
pub mod service;
pub mod store;

pub use error::{TaskError, TaskResult};
pub use page::{paginate, Page, PageRequest, SortDirection, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use service::{ListParams, TaskService};
pub use store::{InMemoryTaskStore, TaskStore};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single task on the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque identifier, assigned at creation and never reused
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Free-form labels, kept in the order given
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Payload for creating a task (the id is assigned by the server).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Attach a fresh id.
    pub fn into_task(self) -> Task {
        Task {
            id: new_task_id(),
            title: self.title,
            description: self.description,
            tags: self.tags,
        }
    }
}

/// Generate a random 128-bit task id rendered as text.
pub fn new_task_id() -> String {
    Uuid::new_v4().to_string()
}

/// Reject blank titles.
pub(crate) fn validate_title(title: &str) -> TaskResult<()> {
    if title.trim().is_empty() {
        return Err(TaskError::empty_title());
    }
    Ok(())
}
