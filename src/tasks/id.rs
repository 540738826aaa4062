//! Task identifiers.
//!
//! Ids are positive integers handed out by the store when a task is created.
//! They grow monotonically and are never reused, even after deletion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a task within one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Wrap a raw id value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Parse an id supplied by a user or a URL path segment.
    ///
    /// Only plain decimal integers greater than zero are accepted. Signs,
    /// whitespace and zero are rejected.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match s.parse::<i64>() {
            Ok(value) if value > 0 => Some(Self(value)),
            _ => None,
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TaskId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<&crate::tasks::Task> for TaskId {
    fn from(task: &crate::tasks::Task) -> Self {
        task.id
    }
}
