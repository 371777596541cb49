//! Error type shared by the task use cases.

use crate::task::{domain::TaskId, ports::TaskRepositoryError};
use thiserror::Error;

/// Service-level errors for task use cases.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// The title is empty after trimming whitespace. Raised before the
    /// repository is touched.
    #[error("task title must not be empty")]
    InvalidTitle,

    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Any other storage failure, forwarded without interpretation.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task use cases.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;
