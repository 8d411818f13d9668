//! Error taxonomy for task operations.
//!
//! Two recoverable kinds only. Neither is retried here; the transport layer
//! decides how to render them.

/// Error from a task store or pagination call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    /// Out-of-range or unresolvable input (page size, cursor, sort token, title).
    #[error("{0}")]
    Validation(String),

    /// An operation addressed a task id that is not in the store.
    #[error("{0}")]
    NotFound(String),
}

impl TaskError {
    pub fn page_size_too_large(size: i64, max: usize) -> Self {
        Self::Validation(format!("page size {} exceeds maximum {}", size, max))
    }

    pub fn page_size_too_small(size: i64) -> Self {
        Self::Validation(format!("page size {} must be at least 1", size))
    }

    pub fn unknown_cursor(id: &str) -> Self {
        Self::Validation(format!("cursor id {} not found", id))
    }

    pub fn unknown_sort(token: &str) -> Self {
        Self::Validation(format!("unknown sort direction {}", token))
    }

    pub fn empty_title() -> Self {
        Self::Validation("title must not be empty".to_string())
    }

    pub fn task_not_found(id: &str) -> Self {
        Self::NotFound(format!("task {} not found", id))
    }
}

/// Result alias for task operations.
pub type TaskResult<T> = Result<T, TaskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_echo_offending_value() {
        assert_eq!(
            TaskError::page_size_too_large(101, 100).to_string(),
            "page size 101 exceeds maximum 100"
        );
        assert_eq!(
            TaskError::unknown_cursor("1234").to_string(),
            "cursor id 1234 not found"
        );
        assert_eq!(
            TaskError::task_not_found("abc").to_string(),
            "task abc not found"
        );
    }
}
