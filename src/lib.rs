//! Taskmaster: personal task management core.
//!
//! This crate provides the task orchestration layer of a personal to-do
//! application: the task model, the filter, sort, and statistics
//! algorithms, and the use cases that validate and mutate tasks on top of a
//! storage port.
//!
//! # Architecture
//!
//! Taskmaster follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`task`]: Task model, repository port, adapters, and use cases

pub mod task;
