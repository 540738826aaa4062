//! In-memory task store.
//!
//! Used by tests and as the reference behaviour the `SQLite` store is checked
//! against. Tasks live in a map keyed by id, so deleting one never moves the
//! others.

use crate::error::{Error, Result};
use crate::tasks::{Task, TaskId, TaskStore};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug)]
struct Inner {
    next_id: i64,
    tasks: BTreeMap<TaskId, Task>,
}

/// A task store that keeps everything in process memory.
#[derive(Debug)]
pub struct MemoryTaskStore {
    inner: Mutex<Inner>,
}

impl Default for MemoryTaskStore {
    fn default() -> Self {
        Self { inner: Mutex::new(Inner { next_id: 1, tasks: BTreeMap::new() }) }
    }
}

impl MemoryTaskStore {
    /// Create an empty store. The first task gets id 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner.lock().map_err(|e| Error::Storage(e.to_string()))
    }
}

impl TaskStore for MemoryTaskStore {
    fn add(&self, name: &str) -> Result<TaskId> {
        let mut inner = self.lock()?;
        let id = TaskId::new(inner.next_id);
        inner.next_id += 1;
        inner.tasks.insert(id, Task::new(id, name));
        Ok(id)
    }

    fn get_all(&self) -> Result<Vec<Task>> {
        Ok(self.lock()?.tasks.values().cloned().collect())
    }

    fn get_outstanding(&self) -> Result<Vec<Task>> {
        Ok(self.lock()?.tasks.values().filter(|t| t.is_outstanding()).cloned().collect())
    }

    fn get_one(&self, id: TaskId) -> Result<Task> {
        self.lock()?.tasks.get(&id).cloned().ok_or(Error::NotFound(id))
    }

    fn toggle_status(&self, id: TaskId) -> Result<()> {
        let mut inner = self.lock()?;
        let task = inner.tasks.get_mut(&id).ok_or(Error::NotFound(id))?;
        task.complete = !task.complete;
        Ok(())
    }

    fn delete(&self, id: TaskId) -> Result<()> {
        self.lock()?.tasks.remove(&id).map(|_| ()).ok_or(Error::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, name: &str, complete: bool) -> Task {
        Task { id: TaskId::new(id), name: name.to_string(), complete }
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let store = MemoryTaskStore::new();
        assert_eq!(store.add("a").unwrap(), TaskId::new(1));
        assert_eq!(store.add("b").unwrap(), TaskId::new(2));
        assert_eq!(store.add("c").unwrap(), TaskId::new(3));
    }

    #[test]
    fn test_repeated_deletes_hit_the_right_tasks() {
        let store = MemoryTaskStore::new();
        for name in ["Task 1", "Task 2", "Task 3", "Task 4"] {
            store.add(name).unwrap();
        }

        store.delete(TaskId::new(2)).unwrap();
        store.delete(TaskId::new(3)).unwrap();

        assert_eq!(
            store.get_all().unwrap(),
            vec![task(1, "Task 1", false), task(4, "Task 4", false)]
        );
    }

    #[test]
    fn test_ids_are_not_reused() {
        let store = MemoryTaskStore::new();
        store.add("a").unwrap();
        let b = store.add("b").unwrap();
        store.delete(b).unwrap();
        assert_eq!(store.add("c").unwrap(), TaskId::new(3));
    }

    #[test]
    fn test_unknown_ids_are_not_found() {
        let store = MemoryTaskStore::new();
        store.add("a").unwrap();

        // Id 2 is past the end, id 0 is never valid.
        for id in [TaskId::new(0), TaskId::new(2)] {
            assert!(store.get_one(id).unwrap_err().is_not_found());
            assert!(store.toggle_status(id).unwrap_err().is_not_found());
            assert!(store.delete(id).unwrap_err().is_not_found());
        }
    }

    #[test]
    fn test_toggle_and_outstanding() {
        let store = MemoryTaskStore::new();
        store.add("Task 1").unwrap();
        store.add("Task 2").unwrap();
        store.toggle_status(TaskId::new(1)).unwrap();

        assert_eq!(store.get_outstanding().unwrap(), vec![task(2, "Task 2", false)]);
        assert!(store.get_one(TaskId::new(1)).unwrap().complete);
    }

    #[test]
    fn test_returned_tasks_are_copies() {
        let store = MemoryTaskStore::new();
        let id = store.add("Task 1").unwrap();

        let mut copy = store.get_one(id).unwrap();
        copy.complete = true;
        copy.name = "Changed".to_string();

        assert_eq!(store.get_one(id).unwrap(), task(1, "Task 1", false));
    }
}
