//! Terminal UI state and key handling.
//!
//! The model knows nothing about the terminal: keys arrive as [`Key`] values
//! and the screen comes out of [`Model::view`] as text. The event loop in
//! `terminal` does the translation both ways.

use crate::error::Result;
use crate::tasks::{Task, TaskList, TaskStore};
use crate::templates;
use serde::Serialize;

/// A key press the UI reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Move the cursor up.
    Up,
    /// Move the cursor down.
    Down,
    /// Toggle the selected task.
    Left,
    /// Toggle the selected task.
    Right,
    /// Switch between the outstanding and the full list.
    Tab,
    /// Submit the input line as a new task.
    Enter,
    /// Remove the last character of the input line.
    Backspace,
    /// Type a character into the input line.
    Char(char),
    /// Leave the UI (ctrl-c).
    Quit,
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Redraw and wait for the next key.
    Continue,
    /// Stop the loop.
    Quit,
}

/// One line of the task list as the screen template sees it.
#[derive(Debug, Serialize)]
struct Row<'a> {
    cursor: &'static str,
    mark: &'static str,
    name: &'a str,
}

/// State of the terminal UI between key presses.
#[derive(Debug, Default)]
pub struct Model {
    tasks: Vec<Task>,
    cursor: usize,
    input: String,
    show_all: bool,
    status: Option<String>,
}

impl Model {
    /// Create the initial state, showing the outstanding tasks.
    pub fn new<S: TaskStore>(list: &TaskList<S>) -> Self {
        let mut model = Self::default();
        model.refresh(list);
        model
    }

    /// Tasks currently on screen.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Index of the selected row.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Text typed so far for the next task.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether completed tasks are shown too.
    pub const fn show_all(&self) -> bool {
        self.show_all
    }

    /// The last error message, if the most recent key press hit one.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Apply a key press and re-read the list.
    pub fn update<S: TaskStore>(&mut self, list: &TaskList<S>, key: Key) -> Control {
        self.status = None;

        match key {
            Key::Quit => return Control::Quit,
            Key::Up => self.cursor = self.cursor.saturating_sub(1),
            Key::Down => {
                if self.cursor + 1 < self.tasks.len() {
                    self.cursor += 1;
                }
            }
            Key::Left | Key::Right => {
                if let Some(task) = self.tasks.get(self.cursor) {
                    if let Err(e) = list.toggle_status(task) {
                        self.report(&e);
                    }
                }
            }
            Key::Tab => self.show_all = !self.show_all,
            Key::Enter => {
                if !self.input.is_empty() {
                    // The input is cleared whether or not the add worked.
                    let name = std::mem::take(&mut self.input);
                    if let Err(e) = list.add(&name) {
                        self.report(&e);
                    }
                }
            }
            Key::Backspace => {
                self.input.pop();
            }
            Key::Char(c) => self.input.push(c),
        }

        self.refresh(list);
        Control::Continue
    }

    /// Render the screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the screen template cannot be rendered.
    pub fn view(&self) -> Result<String> {
        let rows: Vec<Row<'_>> = self
            .tasks
            .iter()
            .enumerate()
            .map(|(i, task)| Row {
                cursor: if i == self.cursor { ">" } else { " " },
                mark: if task.complete { "✓" } else { "✖" },
                name: &task.name,
            })
            .collect();

        let mut ctx = templates::context();
        ctx.insert("view", if self.show_all { "full" } else { "outstanding" });
        ctx.insert("rows", &rows);
        ctx.insert("input", &self.input);
        ctx.insert("status", self.status.as_deref().unwrap_or_default());
        templates::render(templates::TUI_SCREEN, &ctx)
    }

    fn refresh<S: TaskStore>(&mut self, list: &TaskList<S>) {
        let result = if self.show_all { list.get_all() } else { list.get_outstanding() };
        match result {
            Ok(tasks) => self.tasks = tasks,
            Err(e) => self.report(&e),
        }
        if self.cursor >= self.tasks.len() {
            self.cursor = 0;
        }
    }

    fn report(&mut self, err: &crate::Error) {
        tracing::warn!(error = %err, "task list operation failed");
        self.status = Some(format!("Error: {err}"));
    }
}
