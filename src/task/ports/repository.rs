//! Repository port for task persistence.

use crate::task::domain::{Task, TaskCategory, TaskId, TaskStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations must be safe for concurrent use and must make a caller's
/// own writes visible to its subsequent reads. Stored order carries no
/// meaning.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every stored task, in no particular order.
    async fn fetch_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Stores a new task and returns the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the identifier is
    /// already in use.
    async fn create(&self, task: Task) -> TaskRepositoryResult<Task>;

    /// Replaces an existing task and returns the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no task has the same
    /// identifier.
    async fn update(&self, task: Task) -> TaskRepositoryResult<Task>;

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Removes every listed task that exists. Missing identifiers are
    /// skipped.
    async fn delete_many(&self, ids: &[TaskId]) -> TaskRepositoryResult<()>;

    /// Returns all tasks with the given status.
    ///
    /// A stored record whose raw status is unrecognised decodes to
    /// [`TaskStatus::Todo`] and is returned when that status is requested,
    /// matching what [`TaskRepository::fetch_all`] reports for it.
    async fn find_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns all tasks in the given category.
    ///
    /// Unrecognised raw categories are reported as
    /// [`TaskCategory::Personal`], as for status.
    async fn find_by_category(&self, category: TaskCategory) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns all tasks that are overdue at `now`.
    async fn find_overdue(&self, now: DateTime<Utc>) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
