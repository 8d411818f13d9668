//! Task operations as seen by the API layer.
//!
//! Mutations go straight to the store. Listing takes one snapshot and hands
//! it to [`paginate`], so a page is computed against a stable copy even while
//! other requests keep writing.

use std::sync::Arc;

use super::{
    paginate, validate_title, NewTask, Page, PageRequest, SortDirection, Task, TaskResult,
    TaskStore, DEFAULT_PAGE_SIZE,
};

/// Raw, optional list parameters as decoded from a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub limit: Option<i64>,
    pub sort: Option<String>,
    pub cursor_id: Option<String>,
}

/// Entry point for create / list / get / update / delete.
#[derive(Clone)]
pub struct TaskService {
    store: Arc<dyn TaskStore>,
    default_page_size: usize,
}

impl TaskService {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self::with_default_page_size(store, DEFAULT_PAGE_SIZE)
    }

    pub fn with_default_page_size(store: Arc<dyn TaskStore>, default_page_size: usize) -> Self {
        Self {
            store,
            default_page_size,
        }
    }

    /// Store a new task under a freshly generated id.
    pub async fn create(&self, new_task: NewTask) -> TaskResult<Task> {
        validate_title(&new_task.title)?;
        let task = self.store.insert(new_task.into_task()).await;
        tracing::info!("Created task {}", task.id);
        Ok(task)
    }

    /// Fetch one page of tasks.
    pub async fn list(&self, params: ListParams) -> TaskResult<Page> {
        let request = self.resolve(params)?;
        let snapshot = self.store.snapshot().await;
        let page = paginate(snapshot, &request);
        match &page {
            Ok(p) => tracing::debug!(
                "Listed {} tasks (limit={}, sort={:?}, cursor={:?})",
                p.len(),
                request.page_size,
                request.sort,
                request.cursor
            ),
            Err(e) => tracing::debug!("List rejected: {}", e),
        }
        page
    }

    pub async fn get(&self, id: &str) -> TaskResult<Task> {
        self.store.find_by_id(id).await
    }

    /// Replace every field except the id.
    pub async fn update(&self, task: Task) -> TaskResult<Task> {
        validate_title(&task.title)?;
        let task = self.store.replace(task).await?;
        tracing::info!("Updated task {}", task.id);
        Ok(task)
    }

    pub async fn delete(&self, id: &str) -> TaskResult<()> {
        self.store.remove(id).await?;
        tracing::info!("Deleted task {}", id);
        Ok(())
    }

    pub async fn count(&self) -> usize {
        self.store.count().await
    }

    fn resolve(&self, params: ListParams) -> TaskResult<PageRequest> {
        let sort = match params.sort.as_deref() {
            Some(token) => token.parse::<SortDirection>()?,
            None => SortDirection::default(),
        };
        Ok(PageRequest {
            page_size: params.limit.unwrap_or(self.default_page_size as i64),
            sort,
            cursor: params.cursor_id,
        })
    }
}
