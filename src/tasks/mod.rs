//! Task management.
//!
//! This module provides:
//! - The [`Task`] record and its [`TaskId`]
//! - The [`TaskStore`] trait with an `SQLite` and an in-memory implementation
//! - The [`TaskList`] every front end goes through
//!
//! # Example
//!
//! ```no_run
//! use task_planner::tasks::{SqliteTaskStore, TaskList};
//!
//! let list = TaskList::new(SqliteTaskStore::new("tasks.db").unwrap());
//!
//! let id = list.add("Water the plants").unwrap();
//! list.toggle_status(id).unwrap();
//!
//! let outstanding = list.get_outstanding().unwrap();
//! assert!(outstanding.iter().all(|t| t.id != id));
//! ```

pub mod id;
pub mod list;
pub mod memory;
pub mod models;
pub mod store;

pub use id::TaskId;
pub use list::TaskList;
pub use memory::MemoryTaskStore;
pub use models::Task;
pub use store::{SqliteTaskStore, TaskStore};
