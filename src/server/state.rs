//! Application state

use std::sync::Arc;

use crate::tasks::TaskList;

/// Shared application state
pub struct AppState<S> {
    list: Arc<TaskList<S>>,
}

// Derived Clone would require `S: Clone`; only the Arc is cloned.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self { list: Arc::clone(&self.list) }
    }
}

impl<S> AppState<S> {
    /// Create the state around a shared task list
    pub const fn new(list: Arc<TaskList<S>>) -> Self {
        Self { list }
    }

    /// Get a handle to the task list that can be moved onto a worker thread
    pub fn task_list(&self) -> Arc<TaskList<S>> {
        Arc::clone(&self.list)
    }
}
