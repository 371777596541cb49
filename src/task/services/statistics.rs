//! Use case for computing task statistics.

use super::TaskServiceResult;
use crate::task::{domain::TaskStatistics, ports::TaskRepository};
use mockable::Clock;
use std::sync::Arc;
use tracing::instrument;

/// Aggregates counts over the whole task collection.
#[derive(Clone)]
pub struct FetchTaskStatisticsUseCase<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> FetchTaskStatisticsUseCase<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates the use case.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Loads every task and computes a [`TaskStatistics`] snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskServiceError::Repository`] when storage fails.
    #[instrument(skip(self))]
    pub async fn execute(&self) -> TaskServiceResult<TaskStatistics> {
        let tasks = self.repository.fetch_all().await?;
        Ok(TaskStatistics::from_tasks(&tasks, self.clock.utc()))
    }
}
