//! Error types for task domain parsing.

use thiserror::Error;

/// Error returned when a raw value does not name a known enumeration member.
///
/// Strict parsing through `TryFrom<&str>` yields this error; the permissive
/// `from_stored` decoders used by storage adapters never do.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task {field}: {value}")]
pub struct ParseTaskFieldError {
    /// Name of the field being parsed, such as `status`.
    pub field: &'static str,
    /// Raw value that failed to parse.
    pub value: String,
}

impl ParseTaskFieldError {
    pub(crate) fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}
