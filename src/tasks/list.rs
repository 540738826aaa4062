//! The task list every front end talks to.

use crate::config::PlannerConfig;
use crate::error::Result;
use crate::tasks::{SqliteTaskStore, Task, TaskId, TaskStore};

/// Entry point for the terminal UI, the HTTP API and the CLI.
///
/// Delegates every call to the store it was built with. Errors from the
/// store are returned unchanged.
#[derive(Debug)]
pub struct TaskList<S> {
    storage: S,
}

impl<S: TaskStore> TaskList<S> {
    /// Create a task list backed by the given store.
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Get the underlying store.
    pub const fn store(&self) -> &S {
        &self.storage
    }

    /// Add a new, incomplete task.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot write the task.
    pub fn add(&self, name: &str) -> Result<TaskId> {
        self.storage.add(name)
    }

    /// Get every task, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn get_all(&self) -> Result<Vec<Task>> {
        self.storage.get_all()
    }

    /// Get the tasks that are not yet complete, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn get_outstanding(&self) -> Result<Vec<Task>> {
        self.storage.get_outstanding()
    }

    /// Get a single task.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if there is no such task, or a
    /// storage error.
    pub fn get_one(&self, id: TaskId) -> Result<Task> {
        self.storage.get_one(id)
    }

    /// Flip a task between complete and incomplete.
    ///
    /// Accepts either an id or a task value (`&Task`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if there is no such task, or a
    /// storage error.
    pub fn toggle_status(&self, task: impl Into<TaskId>) -> Result<()> {
        self.storage.toggle_status(task.into())
    }

    /// Delete a task.
    ///
    /// Accepts either an id or a task value (`&Task`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if there is no such task, or a
    /// storage error.
    pub fn delete(&self, task: impl Into<TaskId>) -> Result<()> {
        self.storage.delete(task.into())
    }
}

impl TaskList<SqliteTaskStore> {
    /// Open the task list stored in the configured database file.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn open(config: &PlannerConfig) -> Result<Self> {
        Ok(Self::new(SqliteTaskStore::new(&config.database_path)?))
    }
}
