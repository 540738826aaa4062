//! Error types for `task_planner`.

use crate::tasks::TaskId;

/// Errors that can occur while planning tasks.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error occurred.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A `SQLite` database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A template error occurred.
    #[error("Template error: {0}")]
    Template(String),

    /// The storage medium failed for a reason other than the database driver.
    #[error("Storage error: {0}")]
    Storage(String),

    /// An operation referenced a task id that does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

impl Error {
    /// Check whether this error means the referenced task does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check whether this error came from the storage medium.
    #[must_use]
    pub const fn is_storage(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Io(_) | Self::Storage(_))
    }
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
