//! Use case for flipping a task between done and not done.

use super::TaskServiceResult;
use crate::task::{domain::Task, ports::TaskRepository};
use mockable::Clock;
use std::sync::Arc;
use tracing::instrument;

/// Toggles task completion.
///
/// Completed tasks reopen as in progress; todo and in-progress tasks become
/// completed. See [`crate::task::domain::TaskStatus::toggled`].
#[derive(Clone)]
pub struct ToggleTaskStatusUseCase<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> ToggleTaskStatusUseCase<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates the use case.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Persists `task` with its toggled status and a refreshed `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::NotFound`] when the task does not
    /// exist or [`super::TaskServiceError::Repository`] when storage fails.
    #[instrument(skip(self, task), fields(task_id = %task.id(), from = %task.status()))]
    pub async fn execute(&self, task: Task) -> TaskServiceResult<Task> {
        let next = task.status().toggled();
        let mut toggled = task.with_status(next);
        toggled.touch(&*self.clock);
        Ok(self.repository.update(toggled).await?)
    }
}
