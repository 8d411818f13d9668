//! HTTP API for the task list.
//!
//! ## Endpoints
//!
//! - `GET /api/health` - Health check
//! - `POST /api/todos` - Create a task
//! - `GET /api/todos?limit=&sort=&cursor_id=` - List a page of tasks
//! - `PUT /api/todos` - Update a task
//! - `GET /api/todos/{id}` - Get a task
//! - `DELETE /api/todos/{id}` - Delete a task

mod routes;
mod tasks;
pub mod types;

pub use routes::{router, serve, AppState};
pub use types::*;
