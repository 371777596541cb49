//! Enumerated task attributes: status, priority, and category.
//!
//! Each enumeration has a canonical raw value used for persistence. Raw
//! values are decoded two ways:
//!
//! - `TryFrom<&str>` is strict and rejects unknown values.
//! - `from_stored` is permissive and substitutes a documented default for
//!   unknown values. Storage adapters and serde deserialization use this
//!   form so that a row written by a newer schema, or corrupted by hand,
//!   still loads. The substitution is logged at `warn` level.

use super::ParseTaskFieldError;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! stored_enum {
    (
        $ty:ident,
        field = $field:literal,
        fallback = $fallback:ident,
        { $($variant:ident => $raw:literal),+ $(,)? }
    ) => {
        impl $ty {
            /// Every member, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the canonical storage representation.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $raw,)+
                }
            }

            #[doc = concat!(
                "Decodes a stored raw value, falling back to `",
                stringify!($fallback),
                "` when the value is not recognised."
            )]
            #[must_use]
            pub fn from_stored(raw: &str) -> Self {
                Self::try_from(raw).unwrap_or_else(|err| {
                    tracing::warn!(
                        field = err.field,
                        value = %err.value,
                        fallback = Self::$fallback.as_str(),
                        "unknown stored task value, using fallback"
                    );
                    Self::$fallback
                })
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::$fallback
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = ParseTaskFieldError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                match value {
                    $($raw => Ok(Self::$variant),)+
                    _ => Err(ParseTaskFieldError::new($field, value)),
                }
            }
        }

        impl From<String> for $ty {
            fn from(value: String) -> Self {
                Self::from_stored(&value)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Progress of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "String")]
pub enum TaskStatus {
    /// Work has not started.
    Todo,
    /// Work is underway.
    InProgress,
    /// Work is finished.
    Completed,
}

stored_enum!(TaskStatus, field = "status", fallback = Todo, {
    Todo => "todo",
    InProgress => "inProgress",
    Completed => "completed",
});

impl TaskStatus {
    /// Returns the status produced by a completion toggle.
    ///
    /// Completed tasks reopen as [`TaskStatus::InProgress`]; every other
    /// status becomes [`TaskStatus::Completed`]. Toggling twice therefore
    /// never returns to [`TaskStatus::Todo`].
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Completed => Self::InProgress,
            Self::Todo | Self::InProgress => Self::Completed,
        }
    }

    /// Returns `true` unless the status is [`TaskStatus::Completed`].
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Completed)
    }
}

/// Urgency of a task, totally ordered `Low < Medium < High < Urgent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "String")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Normal urgency.
    Medium,
    /// Should be handled soon.
    High,
    /// Needs attention now.
    Urgent,
}

stored_enum!(TaskPriority, field = "priority", fallback = Medium, {
    Low => "low",
    Medium => "medium",
    High => "high",
    Urgent => "urgent",
});

/// Closed set of task categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "String")]
pub enum TaskCategory {
    /// Personal errands.
    Personal,
    /// Work items.
    Work,
    /// Things to buy.
    Shopping,
    /// Health and fitness.
    Health,
    /// Money matters.
    Finance,
    /// Household chores.
    Home,
}

stored_enum!(TaskCategory, field = "category", fallback = Personal, {
    Personal => "personal",
    Work => "work",
    Shopping => "shopping",
    Health => "health",
    Finance => "finance",
    Home => "home",
});
