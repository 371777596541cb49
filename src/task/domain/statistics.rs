//! Aggregate counts over a task collection.

use super::{Task, TaskCategory, TaskPriority, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Derived, non-persisted snapshot of a task collection.
///
/// The histograms only contain buckets that occur at least once; use the
/// `count_for_*` accessors to read a missing bucket as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatistics {
    /// Number of tasks.
    pub total_tasks: usize,
    /// Number of completed tasks.
    pub completed_tasks: usize,
    /// Number of tasks that are not completed.
    pub active_tasks: usize,
    /// Number of overdue tasks.
    pub overdue_tasks: usize,
    /// Task counts per category.
    pub tasks_by_category: BTreeMap<TaskCategory, usize>,
    /// Task counts per priority.
    pub tasks_by_priority: BTreeMap<TaskPriority, usize>,
    /// Task counts per status.
    pub tasks_by_status: BTreeMap<TaskStatus, usize>,
}

impl TaskStatistics {
    /// Computes statistics in a single pass, evaluating overdue tasks at
    /// `now`.
    #[must_use]
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>, now: DateTime<Utc>) -> Self {
        let mut stats = Self::default();
        for task in tasks {
            stats.total_tasks += 1;
            if task.status().is_active() {
                stats.active_tasks += 1;
            } else {
                stats.completed_tasks += 1;
            }
            if task.is_overdue_at(now) {
                stats.overdue_tasks += 1;
            }
            *stats.tasks_by_category.entry(task.category()).or_default() += 1;
            *stats.tasks_by_priority.entry(task.priority()).or_default() += 1;
            *stats.tasks_by_status.entry(task.status()).or_default() += 1;
        }
        stats
    }

    /// Returns `completed / total`, or `0.0` for an empty collection.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        clippy::float_arithmetic,
        reason = "a completion ratio does not need exact integer precision"
    )]
    pub fn completion_rate(&self) -> f64 {
        if self.total_tasks == 0 {
            return 0.0;
        }
        self.completed_tasks as f64 / self.total_tasks as f64
    }

    /// Returns the number of tasks in `category`.
    #[must_use]
    pub fn count_for_category(&self, category: TaskCategory) -> usize {
        self.tasks_by_category.get(&category).copied().unwrap_or(0)
    }

    /// Returns the number of tasks with `priority`.
    #[must_use]
    pub fn count_for_priority(&self, priority: TaskPriority) -> usize {
        self.tasks_by_priority.get(&priority).copied().unwrap_or(0)
    }

    /// Returns the number of tasks with `status`.
    #[must_use]
    pub fn count_for_status(&self, status: TaskStatus) -> usize {
        self.tasks_by_status.get(&status).copied().unwrap_or(0)
    }
}
