//! Task API endpoints.
//!
//! - `POST /api/todos` - Create a task (201)
//! - `GET /api/todos` - List a page of tasks (200, or 204 when the page is empty)
//! - `PUT /api/todos` - Replace a task identified by the `id` in the body
//! - `GET /api/todos/:id` - Get a single task
//! - `DELETE /api/todos/:id` - Delete a task (204)

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use super::routes::AppState;
use super::types::ListTasksQuery;
use crate::task::{NewTask, Page, Task, TaskError};

impl From<TaskError> for (StatusCode, String) {
    fn from(err: TaskError) -> Self {
        let status = match &err {
            TaskError::Validation(_) => StatusCode::BAD_REQUEST,
            TaskError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        (status, err.to_string())
    }
}

/// Create task routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_tasks).post(create_task).put(update_task))
        .route("/:id", get(get_task).delete(delete_task))
}

/// POST /api/todos - Create a new task.
async fn create_task(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewTask>,
) -> Result<(StatusCode, Json<Task>), (StatusCode, String)> {
    let task = state.tasks.create(req).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/todos - List one page of tasks.
async fn list_tasks(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListTasksQuery>,
) -> Result<Response, (StatusCode, String)> {
    match state.tasks.list(query.into()).await? {
        Page::Items(items) => Ok(Json(items).into_response()),
        Page::Empty => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// GET /api/todos/:id - Get a single task.
async fn get_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Task>, (StatusCode, String)> {
    Ok(Json(state.tasks.get(&id).await?))
}

/// PUT /api/todos - Replace an existing task.
async fn update_task(
    State(state): State<Arc<AppState>>,
    Json(task): Json<Task>,
) -> Result<Json<Task>, (StatusCode, String)> {
    Ok(Json(state.tasks.update(task).await?))
}

/// DELETE /api/todos/:id - Delete a task.
async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    state.tasks.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
