//! Use case for replacing a task's attributes.

use super::{TaskServiceError, TaskServiceResult};
use crate::task::{domain::Task, ports::TaskRepository};
use mockable::Clock;
use std::sync::Arc;
use tracing::instrument;

/// Validates and persists edits to existing tasks.
#[derive(Clone)]
pub struct UpdateTaskUseCase<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> UpdateTaskUseCase<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates the use case.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Replaces the stored task that shares `task`'s identifier.
    ///
    /// Status may move freely between any two values here; only the toggle
    /// use case restricts transitions.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidTitle`] when the trimmed title is
    /// empty, [`TaskServiceError::NotFound`] when the task does not exist,
    /// or [`TaskServiceError::Repository`] when storage fails.
    #[instrument(skip(self, task), fields(task_id = %task.id()))]
    pub async fn execute(&self, mut task: Task) -> TaskServiceResult<Task> {
        if task.has_blank_title() {
            tracing::debug!("rejected update with blank title");
            return Err(TaskServiceError::InvalidTitle);
        }

        task.touch(&*self.clock);
        Ok(self.repository.update(task).await?)
    }
}
