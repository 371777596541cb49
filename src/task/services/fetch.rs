//! Use case for listing tasks.

use super::TaskServiceResult;
use crate::task::{
    domain::{Task, TaskCategory, TaskId, TaskQuery, TaskStatus},
    ports::TaskRepository,
};
use mockable::Clock;
use std::sync::Arc;
use tracing::instrument;

/// Reads tasks, optionally through the filter and sort pipeline.
#[derive(Clone)]
pub struct FetchTasksUseCase<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> FetchTasksUseCase<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates the use case.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Loads every task and applies `query`.
    ///
    /// Overdue filtering is evaluated at the clock's current time.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Repository`] when storage fails.
    #[instrument(
        skip(self, query),
        fields(filter = ?query.filter, sort_key = ?query.sort_key, direction = ?query.direction)
    )]
    pub async fn execute(&self, query: &TaskQuery) -> TaskServiceResult<Vec<Task>> {
        let tasks = self.repository.fetch_all().await?;
        let total = tasks.len();
        let selected = query.apply(tasks, self.clock.utc());
        tracing::debug!(total, selected = selected.len(), "listed tasks");
        Ok(selected)
    }

    /// Returns the tasks in `category`, straight from the repository and in
    /// repository order.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Repository`] when storage fails.
    #[instrument(skip(self), fields(category = %category))]
    pub async fn for_category(&self, category: TaskCategory) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.find_by_category(category).await?)
    }

    /// Returns the tasks with `status`, straight from the repository and in
    /// repository order.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Repository`] when storage fails.
    #[instrument(skip(self), fields(status = %status))]
    pub async fn for_status(&self, status: TaskStatus) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.find_by_status(status).await?)
    }

    /// Returns the tasks that are overdue at the clock's current time.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Repository`] when storage fails.
    #[instrument(skip(self))]
    pub async fn overdue(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.find_overdue(self.clock.utc()).await?)
    }

    /// Looks up a single task.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Repository`] when storage fails.
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn find(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }
}
