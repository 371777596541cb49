//! Shared test helpers for in-memory repository integration tests.

use chrono::{DateTime, Utc};
use rstest::fixture;
use std::io;
use taskmaster::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{PersistedTaskData, Task, TaskCategory, TaskId, TaskPriority, TaskStatus},
};
use tokio::runtime::Runtime;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

/// Builds a task with the given title, status, and due date.
pub fn task_with(title: &str, status: TaskStatus, due_date: Option<DateTime<Utc>>) -> Task {
    let created_at = Utc::now();
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        title: title.to_owned(),
        description: String::new(),
        status,
        priority: TaskPriority::Medium,
        category: TaskCategory::Personal,
        due_date,
        created_at,
        updated_at: created_at,
    })
}
