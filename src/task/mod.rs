//! Task management.
//!
//! Tasks carry a status, priority, category, and optional due date. Use
//! cases validate titles, refresh timestamps, toggle completion, and read
//! tasks back filtered, sorted, or aggregated into statistics. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Use cases in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
