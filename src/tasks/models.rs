//! Task model type.

use crate::tasks::TaskId;
use serde::{Deserialize, Serialize};

/// A task in the planner.
///
/// Values handed out by a store are copies: changing one has no effect on
/// the store until it is written back through `toggle_status` or `delete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Identifier assigned by the store on creation.
    pub id: TaskId,
    /// Free-form name, fixed at creation.
    pub name: String,
    /// Whether the task has been completed.
    pub complete: bool,
}

impl Task {
    /// Create a new, incomplete task.
    #[must_use]
    pub fn new(id: TaskId, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), complete: false }
    }

    /// Check if the task is still outstanding.
    #[must_use]
    pub const fn is_outstanding(&self) -> bool {
        !self.complete
    }
}
