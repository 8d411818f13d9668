//! # tasklist
//!
//! In-memory task list service with cursor-based pagination.
//!
//! This library provides:
//! - An insertion-ordered, lock-guarded task store
//! - Cursor pagination in either sort direction
//! - An HTTP API for create, list, get, update and delete
//!
//! ## List Flow
//! 1. Decode `limit`, `sort` and `cursor_id` from the request
//! 2. Take a snapshot of the store (insertion order)
//! 3. Reverse it for descending order, then resolve the cursor
//! 4. Return the next slice, or "no content" when nothing is left
//!
//! ## Modules
//! - `task`: Task records, store, pagination and service
//! - `api`: HTTP routes and handlers
//! - `config`: Environment configuration

pub mod api;
pub mod config;
pub mod task;

pub use config::Config;
pub use task::{Task, TaskError, TaskService};
