//! Shared world state for task management BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskmaster::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{TaskServiceError, TaskServices},
};

/// Service bundle used by the BDD world.
pub type TestTaskServices = TaskServices<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for task management behaviour tests.
pub struct TaskManagementWorld {
    pub repository: InMemoryTaskRepository,
    pub services: TestTaskServices,
    pub tasks: Vec<Task>,
    pub listed: Vec<Task>,
    pub last_result: Option<Result<(), TaskServiceError>>,
}

impl TaskManagementWorld {
    /// Creates a world over an empty repository.
    #[must_use]
    pub fn new() -> Self {
        let repository = InMemoryTaskRepository::new();
        let services = TaskServices::new(Arc::new(repository.clone()), Arc::new(DefaultClock));

        Self {
            repository,
            services,
            tasks: Vec::new(),
            listed: Vec::new(),
            last_result: None,
        }
    }

    /// Returns the most recent copy of the task with `title`.
    ///
    /// # Errors
    ///
    /// Returns an error when no task with that title was created in the
    /// scenario.
    pub fn task_titled(&self, title: &str) -> Result<Task, eyre::Report> {
        self.tasks
            .iter()
            .find(|task| task.title() == title)
            .cloned()
            .ok_or_else(|| eyre::eyre!("no task titled {title:?} in scenario world"))
    }

    /// Replaces the remembered copy of a task after it changed.
    pub fn remember(&mut self, task: Task) {
        self.tasks.retain(|known| known.id() != task.id());
        self.tasks.push(task);
    }
}

impl Default for TaskManagementWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskManagementWorld {
    TaskManagementWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
