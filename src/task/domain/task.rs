//! Task entity and its derived due-date predicates.

use super::{TaskCategory, TaskId, TaskPriority, TaskStatus};
use chrono::{DateTime, Duration, TimeZone, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Length of the "due soon" window, in days.
pub const DUE_SOON_WINDOW_DAYS: i64 = 7;

/// A single work item.
///
/// The entity is immutable by replacement: the `with_*` methods consume the
/// task and return a new value. The identifier and creation timestamp are
/// fixed at construction. Title validation is a use-case concern, so any
/// string is accepted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    status: TaskStatus,
    priority: TaskPriority,
    category: TaskCategory,
    due_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted category.
    pub category: TaskCategory,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task with a fresh identifier.
    ///
    /// Both timestamps are taken from `clock`. The task starts as
    /// [`TaskStatus::Todo`] with [`TaskPriority::Medium`] priority in the
    /// [`TaskCategory::Personal`] category, an empty description, and no
    /// due date.
    #[must_use]
    pub fn new(title: impl Into<String>, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: String::new(),
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            category: TaskCategory::default(),
            due_date: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            category: data.category,
            due_date: data.due_date,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title as entered.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> TaskCategory {
        self.category
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replaces the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Replaces the category.
    #[must_use]
    pub const fn with_category(mut self, category: TaskCategory) -> Self {
        self.category = category;
        self
    }

    /// Sets or clears the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.due_date = due_date;
        self
    }

    /// Returns `true` when the trimmed title is empty.
    #[must_use]
    pub fn has_blank_title(&self) -> bool {
        self.title.trim().is_empty()
    }

    /// Returns `true` when the task is past due and not completed.
    #[must_use]
    pub fn is_overdue(&self, clock: &impl Clock) -> bool {
        self.is_overdue_at(clock.utc())
    }

    /// Returns `true` when the due date is strictly before `now` and the
    /// task is not completed.
    #[must_use]
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        self.due_date
            .is_some_and(|due| due < now && self.status != TaskStatus::Completed)
    }

    /// Returns `true` when the due date falls on the clock's local calendar
    /// day.
    #[must_use]
    pub fn is_due_today(&self, clock: &impl Clock) -> bool {
        self.is_due_today_at(&clock.local())
    }

    /// Returns `true` when the due date falls on the calendar day of `now`,
    /// evaluated in `now`'s time zone.
    #[must_use]
    pub fn is_due_today_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> bool {
        self.due_date.is_some_and(|due| {
            due.with_timezone(&now.timezone()).date_naive() == now.date_naive()
        })
    }

    /// Returns `true` when the due date lies within the next seven days.
    #[must_use]
    pub fn is_due_soon(&self, clock: &impl Clock) -> bool {
        self.is_due_soon_at(clock.utc())
    }

    /// Returns `true` when `now <= due <= now + 7 days`.
    #[must_use]
    pub fn is_due_soon_at(&self, now: DateTime<Utc>) -> bool {
        let window_end = now + Duration::days(DUE_SOON_WINDOW_DAYS);
        self.due_date
            .is_some_and(|due| now <= due && due <= window_end)
    }

    /// Sets the last-update timestamp to the current clock time.
    pub(crate) fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
