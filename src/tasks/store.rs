//! Task store trait and `SQLite` implementation.

use crate::error::{Error, Result};
use crate::tasks::{Task, TaskId};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};

/// Trait for task storage operations.
///
/// All methods return a `Result` and may fail with storage errors. Methods
/// that address a task by id fail with [`Error::NotFound`] when no such task
/// exists.
#[allow(clippy::missing_errors_doc)]
pub trait TaskStore {
    /// Create a new incomplete task with the given name and return its id.
    fn add(&self, name: &str) -> Result<TaskId>;

    /// Get every task, ordered by ascending id.
    fn get_all(&self) -> Result<Vec<Task>>;

    /// Get the tasks that are not complete, ordered by ascending id.
    fn get_outstanding(&self) -> Result<Vec<Task>>;

    /// Get a task by id.
    fn get_one(&self, id: TaskId) -> Result<Task>;

    /// Flip the completion flag of a task.
    fn toggle_status(&self, id: TaskId) -> Result<()>;

    /// Delete a task. Remaining tasks keep their ids.
    fn delete(&self, id: TaskId) -> Result<()>;
}

/// SQLite-based task store.
///
/// Each operation opens a new connection to the database file, so the store
/// itself holds no handle and can be shared freely between threads.
/// Isolation between concurrent writers is left to `SQLite`.
#[derive(Debug, Clone)]
pub struct SqliteTaskStore {
    db_path: PathBuf,
}

impl SqliteTaskStore {
    /// Create a new `SQLite` task store at the given database path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_path: impl AsRef<Path>) -> Result<Self> {
        let store = Self { db_path: db_path.as_ref().to_path_buf() };
        store.init_schema()?;
        tracing::debug!(path = %store.db_path.display(), "opened task database");
        Ok(store)
    }

    /// Get the database path.
    #[must_use]
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Open a connection to the database.
    fn open(&self) -> Result<Connection> {
        if let Some(parent) = self.db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(&self.db_path)?;
        conn.execute_batch("PRAGMA journal_mode = WAL;")?;
        Ok(conn)
    }

    /// Initialize the database schema.
    fn init_schema(&self) -> Result<()> {
        let conn = self.open()?;

        // AUTOINCREMENT keeps SQLite from handing out the id of a deleted
        // highest row again.
        conn.execute_batch(
            r"
            CREATE TABLE IF NOT EXISTS tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                complete BOOLEAN NOT NULL DEFAULT 0
            );
            ",
        )?;

        Ok(())
    }

    /// Parse a task from a row.
    fn parse_task(row: &rusqlite::Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: TaskId::new(row.get(0)?),
            name: row.get(1)?,
            complete: row.get(2)?,
        })
    }

    /// Run a listing query and collect every row.
    fn query_tasks(&self, sql: &str) -> Result<Vec<Task>> {
        let conn = self.open()?;
        let mut stmt = conn.prepare(sql)?;
        let tasks = stmt.query_map([], Self::parse_task)?.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(tasks)
    }
}

impl TaskStore for SqliteTaskStore {
    fn add(&self, name: &str) -> Result<TaskId> {
        let conn = self.open()?;
        conn.execute("INSERT INTO tasks (name, complete) VALUES (?1, 0)", params![name])?;
        let id = TaskId::new(conn.last_insert_rowid());
        tracing::debug!(%id, name, "added task");
        Ok(id)
    }

    fn get_all(&self) -> Result<Vec<Task>> {
        self.query_tasks("SELECT id, name, complete FROM tasks ORDER BY id ASC")
    }

    fn get_outstanding(&self) -> Result<Vec<Task>> {
        self.query_tasks("SELECT id, name, complete FROM tasks WHERE complete = 0 ORDER BY id ASC")
    }

    fn get_one(&self, id: TaskId) -> Result<Task> {
        let conn = self.open()?;
        conn.query_row(
            "SELECT id, name, complete FROM tasks WHERE id = ?1",
            params![id.get()],
            Self::parse_task,
        )
        .optional()?
        .ok_or(Error::NotFound(id))
    }

    fn toggle_status(&self, id: TaskId) -> Result<()> {
        let conn = self.open()?;
        // One statement, so a concurrent toggle can never be lost between a
        // read and a write.
        let rows = conn
            .execute("UPDATE tasks SET complete = NOT complete WHERE id = ?1", params![id.get()])?;
        if rows == 0 {
            return Err(Error::NotFound(id));
        }
        tracing::debug!(%id, "toggled task");
        Ok(())
    }

    fn delete(&self, id: TaskId) -> Result<()> {
        let conn = self.open()?;
        let rows = conn.execute("DELETE FROM tasks WHERE id = ?1", params![id.get()])?;
        if rows == 0 {
            return Err(Error::NotFound(id));
        }
        tracing::debug!(%id, "deleted task");
        Ok(())
    }
}
