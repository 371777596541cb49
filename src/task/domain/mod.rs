//! Domain model for task management.
//!
//! The domain holds the task entity, its enumerated attributes, and the pure
//! filter, sort, and statistics algorithms. Nothing here performs I/O; the
//! current time always arrives through a `mockable::Clock` or an explicit
//! timestamp.

mod error;
mod fields;
mod ids;
mod query;
mod statistics;
mod task;

pub use error::ParseTaskFieldError;
pub use fields::{TaskCategory, TaskPriority, TaskStatus};
pub use ids::TaskId;
pub use query::{
    SortDirection, TaskFilter, TaskQuery, TaskSortKey, filter_tasks, search_tasks, sort_tasks,
};
pub use statistics::TaskStatistics;
pub use task::{DUE_SOON_WINDOW_DAYS, PersistedTaskData, Task};
