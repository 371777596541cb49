//! Explicit construction of the full set of task use cases.

use super::{
    CreateTaskUseCase, DeleteTaskUseCase, FetchTaskStatisticsUseCase, FetchTasksUseCase,
    ToggleTaskStatusUseCase, UpdateTaskUseCase,
};
use crate::task::ports::TaskRepository;
use mockable::Clock;
use std::sync::Arc;

/// Every task use case, sharing one repository and one clock.
///
/// Build this once at the composition root and hand out the individual use
/// cases. There is no global instance.
#[derive(Clone)]
pub struct TaskServices<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates tasks.
    pub create: CreateTaskUseCase<R, C>,
    /// Edits tasks.
    pub update: UpdateTaskUseCase<R, C>,
    /// Toggles completion.
    pub toggle_status: ToggleTaskStatusUseCase<R, C>,
    /// Deletes tasks.
    pub delete: DeleteTaskUseCase<R>,
    /// Lists tasks.
    pub fetch: FetchTasksUseCase<R, C>,
    /// Computes statistics.
    pub statistics: FetchTaskStatisticsUseCase<R, C>,
}

impl<R, C> TaskServices<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Wires every use case to `repository` and `clock`.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            create: CreateTaskUseCase::new(Arc::clone(&repository), Arc::clone(&clock)),
            update: UpdateTaskUseCase::new(Arc::clone(&repository), Arc::clone(&clock)),
            toggle_status: ToggleTaskStatusUseCase::new(
                Arc::clone(&repository),
                Arc::clone(&clock),
            ),
            delete: DeleteTaskUseCase::new(Arc::clone(&repository)),
            fetch: FetchTasksUseCase::new(Arc::clone(&repository), Arc::clone(&clock)),
            statistics: FetchTaskStatisticsUseCase::new(repository, clock),
        }
    }
}
