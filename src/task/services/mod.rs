//! Application services for task management.
//!
//! Each use case validates its input, derives computed fields, makes exactly
//! one repository call, and post-processes the result. Use cases never call
//! each other and hold no state beyond their shared collaborators.

mod create;
mod delete;
mod error;
mod fetch;
mod statistics;
mod toggle;
mod update;
mod wiring;

pub use create::CreateTaskUseCase;
pub use delete::DeleteTaskUseCase;
pub use error::{TaskServiceError, TaskServiceResult};
pub use fetch::FetchTasksUseCase;
pub use statistics::FetchTaskStatisticsUseCase;
pub use toggle::ToggleTaskStatusUseCase;
pub use update::UpdateTaskUseCase;
pub use wiring::TaskServices;
