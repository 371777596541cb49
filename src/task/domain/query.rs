//! Filtering, searching, and sorting of task lists.
//!
//! The pipeline always filters before it sorts. Descending order reverses
//! the ascending sequence rather than inverting each comparison, except for
//! undated tasks under [`TaskSortKey::DueDate`], which stay last in both
//! directions.

use super::Task;
use chrono::{DateTime, Utc};
use icu_collator::{
    Collator, CollatorPreferences,
    options::{CollatorOptions, Strength},
};
use serde::{Deserialize, Serialize};

/// Subset of tasks selected by a list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskFilter {
    /// Every task.
    #[default]
    All,
    /// Tasks that are not completed.
    Active,
    /// Completed tasks.
    Completed,
    /// Tasks past their due date and not completed.
    Overdue,
}

impl TaskFilter {
    /// Returns `true` when `task` belongs to this subset at time `now`.
    #[must_use]
    pub fn matches(self, task: &Task, now: DateTime<Utc>) -> bool {
        match self {
            Self::All => true,
            Self::Active => task.status().is_active(),
            Self::Completed => !task.status().is_active(),
            Self::Overdue => task.is_overdue_at(now),
        }
    }
}

/// Attribute used to order a task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskSortKey {
    /// Creation timestamp, earliest first.
    #[default]
    CreatedDate,
    /// Due date, earliest first; undated tasks always last.
    DueDate,
    /// Priority by its total order, lowest first.
    Priority,
    /// Title, case-insensitively and in locale collation order.
    Title,
}

/// Direction applied to the ascending sort order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    /// Keep the ascending order.
    Ascending,
    /// Reverse the ascending order.
    #[default]
    Descending,
}

impl SortDirection {
    /// Maps an `ascending` flag to a direction.
    #[must_use]
    pub const fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Self::Ascending
        } else {
            Self::Descending
        }
    }
}

/// Parameters for a filtered, sorted task listing.
///
/// Defaults to every task, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskQuery {
    /// Subset to keep.
    pub filter: TaskFilter,
    /// Sort attribute.
    pub sort_key: TaskSortKey,
    /// Sort direction.
    pub direction: SortDirection,
    /// Case-insensitive text matched against title and description.
    /// Matched as given, whitespace included.
    pub search: Option<String>,
}

impl TaskQuery {
    /// Creates the default query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the filter.
    #[must_use]
    pub const fn with_filter(mut self, filter: TaskFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the sort key and direction.
    #[must_use]
    pub const fn sorted_by(mut self, sort_key: TaskSortKey, direction: SortDirection) -> Self {
        self.sort_key = sort_key;
        self.direction = direction;
        self
    }

    /// Sets the search text.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Runs the full pipeline: filter, then search, then sort.
    #[must_use]
    pub fn apply(&self, tasks: Vec<Task>, now: DateTime<Utc>) -> Vec<Task> {
        let mut selected = filter_tasks(tasks, self.filter, now);
        if let Some(search) = self.search.as_deref() {
            selected = search_tasks(selected, search);
        }
        sort_tasks(selected, self.sort_key, self.direction)
    }
}

/// Keeps the tasks matched by `filter` at time `now`, preserving order.
#[must_use]
pub fn filter_tasks(tasks: Vec<Task>, filter: TaskFilter, now: DateTime<Utc>) -> Vec<Task> {
    if filter == TaskFilter::All {
        return tasks;
    }
    tasks
        .into_iter()
        .filter(|task| filter.matches(task, now))
        .collect()
}

/// Keeps tasks whose title or description contains `needle`,
/// case-insensitively. An empty needle keeps everything.
#[must_use]
pub fn search_tasks(tasks: Vec<Task>, needle: &str) -> Vec<Task> {
    if needle.is_empty() {
        return tasks;
    }
    let folded = needle.to_lowercase();
    tasks
        .into_iter()
        .filter(|task| {
            task.title().to_lowercase().contains(&folded)
                || task.description().to_lowercase().contains(&folded)
        })
        .collect()
}

/// Orders tasks by `key` in `direction`.
///
/// Sorting is stable, so tasks with equal keys keep their input order in
/// ascending mode.
#[must_use]
pub fn sort_tasks(mut tasks: Vec<Task>, key: TaskSortKey, direction: SortDirection) -> Vec<Task> {
    match key {
        TaskSortKey::CreatedDate => tasks.sort_by_key(Task::created_at),
        TaskSortKey::Priority => tasks.sort_by_key(Task::priority),
        TaskSortKey::Title => sort_by_title(&mut tasks),
        TaskSortKey::DueDate => return sort_by_due_date(tasks, direction),
    }
    if direction == SortDirection::Descending {
        tasks.reverse();
    }
    tasks
}

/// Orders titles with root-locale collation at secondary strength: case is
/// ignored, accents are significant only between otherwise equal titles.
fn sort_by_title(tasks: &mut [Task]) {
    let mut options = CollatorOptions::default();
    options.strength = Some(Strength::Secondary);
    match Collator::try_new(CollatorPreferences::default(), options) {
        Ok(collator) => tasks.sort_by(|left, right| collator.compare(left.title(), right.title())),
        Err(err) => {
            tracing::warn!(error = %err, "title collation unavailable, ordering by code point");
            tasks.sort_by_cached_key(|task| task.title().to_lowercase());
        }
    }
}

fn sort_by_due_date(tasks: Vec<Task>, direction: SortDirection) -> Vec<Task> {
    let (mut dated, undated): (Vec<Task>, Vec<Task>) = tasks
        .into_iter()
        .partition(|task| task.due_date().is_some());
    dated.sort_by_key(Task::due_date);
    if direction == SortDirection::Descending {
        dated.reverse();
    }
    dated.extend(undated);
    dated
}
