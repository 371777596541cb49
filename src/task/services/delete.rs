//! Use case for removing tasks.

use super::TaskServiceResult;
use crate::task::{domain::TaskId, ports::TaskRepository};
use std::sync::Arc;
use tracing::instrument;

/// Removes single tasks or batches of tasks.
#[derive(Clone)]
pub struct DeleteTaskUseCase<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> DeleteTaskUseCase<R>
where
    R: TaskRepository,
{
    /// Creates the use case.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Removes one task.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::NotFound`] when the task does not
    /// exist or [`super::TaskServiceError::Repository`] when storage fails.
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn execute(&self, id: TaskId) -> TaskServiceResult<()> {
        Ok(self.repository.delete(id).await?)
    }

    /// Removes every listed task that exists; missing identifiers are not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Repository`] when storage fails.
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn execute_many(&self, ids: &[TaskId]) -> TaskServiceResult<()> {
        Ok(self.repository.delete_many(ids).await?)
    }
}
