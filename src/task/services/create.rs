//! Use case for creating a task.

use super::{TaskServiceError, TaskServiceResult};
use crate::task::{domain::Task, ports::TaskRepository};
use mockable::Clock;
use std::sync::Arc;
use tracing::instrument;

/// Validates and stores new tasks.
#[derive(Clone)]
pub struct CreateTaskUseCase<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> CreateTaskUseCase<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates the use case.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Stores `task` with a refreshed `updated_at` and returns the stored
    /// value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidTitle`] without touching the
    /// repository when the trimmed title is empty, or
    /// [`TaskServiceError::Repository`] when storage fails.
    #[instrument(skip(self, task), fields(task_id = %task.id()))]
    pub async fn execute(&self, mut task: Task) -> TaskServiceResult<Task> {
        if task.has_blank_title() {
            tracing::debug!("rejected task with blank title");
            return Err(TaskServiceError::InvalidTitle);
        }

        task.touch(&*self.clock);
        let stored = self.repository.create(task).await?;
        tracing::debug!("created task");
        Ok(stored)
    }
}
