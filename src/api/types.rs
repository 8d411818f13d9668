//! API request and response types.

use serde::{Deserialize, Serialize};

use crate::task::ListParams;

/// Query parameters for listing tasks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTasksQuery {
    /// Page size (defaults to the configured page size, at most 100)
    pub limit: Option<i64>,

    /// `asc` or `desc`, any case (defaults to `desc`)
    pub sort: Option<String>,

    /// Id of the last task on the previous page
    pub cursor_id: Option<String>,
}

impl From<ListTasksQuery> for ListParams {
    fn from(q: ListTasksQuery) -> Self {
        Self {
            limit: q.limit,
            sort: q.sort,
            cursor_id: q.cursor_id,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,

    /// Number of stored tasks
    pub tasks: usize,
}
