//! Command execution for the CLI.

use crate::cli::Command;
use crate::error::Error;
use crate::tasks::{Task, TaskId, TaskList, TaskStore};
use crate::templates;
use std::process::ExitCode;

/// Output from running the CLI, with separate stdout and stderr messages.
#[derive(Debug)]
pub struct CliOutput {
    /// Exit code for the process.
    pub exit_code: ExitCode,
    /// Messages to print to stdout.
    pub stdout: Vec<String>,
    /// Messages to print to stderr.
    pub stderr: Vec<String>,
}

/// Run a CLI command against a task list.
pub fn run<S: TaskStore>(command: Command, list: &TaskList<S>) -> CliOutput {
    if command.is_mutation() {
        tracing::debug!(?command, "running mutating command");
    }

    match command {
        Command::Version => run_version(),
        Command::Add { name } => run_add(list, &name),
        Command::List { all } => run_list(list, all),
        Command::Show { id } => with_id(&id, |id| run_show(list, id)),
        Command::Toggle { id } => with_id(&id, |id| run_toggle(list, id)),
        Command::Delete { id } => with_id(&id, |id| run_delete(list, id)),
    }
}

fn run_version() -> CliOutput {
    success_output(format!("planner v{}", crate::VERSION))
}

fn run_add<S: TaskStore>(list: &TaskList<S>, name: &str) -> CliOutput {
    match list.add(name) {
        Ok(id) => success_output(format!("Added task {id}: {name}")),
        Err(e) => store_error_output(&e),
    }
}

fn run_list<S: TaskStore>(list: &TaskList<S>, all: bool) -> CliOutput {
    let tasks = if all { list.get_all() } else { list.get_outstanding() };
    match tasks {
        Ok(tasks) => render_output(templates::CLI_LIST, "tasks", &tasks),
        Err(e) => store_error_output(&e),
    }
}

fn run_show<S: TaskStore>(list: &TaskList<S>, id: TaskId) -> CliOutput {
    match list.get_one(id) {
        Ok(task) => render_output(templates::CLI_TASK, "task", &task),
        Err(e) => store_error_output(&e),
    }
}

fn run_toggle<S: TaskStore>(list: &TaskList<S>, id: TaskId) -> CliOutput {
    let task = list.toggle_status(id).and_then(|()| list.get_one(id));
    match task {
        Ok(task) => success_output(format!("Task {id} is now {}", status_word(&task))),
        Err(e) => store_error_output(&e),
    }
}

fn run_delete<S: TaskStore>(list: &TaskList<S>, id: TaskId) -> CliOutput {
    match list.delete(id) {
        Ok(()) => success_output(format!("Deleted task {id}")),
        Err(e) => store_error_output(&e),
    }
}

// === Helper Functions ===

/// Parse a task id argument, reporting anything that is not a positive
/// integer as a missing task.
fn with_id(raw: &str, f: impl FnOnce(TaskId) -> CliOutput) -> CliOutput {
    TaskId::parse(raw).map_or_else(|| error_output(format!("task not found: {raw}")), f)
}

const fn status_word(task: &Task) -> &'static str {
    if task.complete {
        "complete"
    } else {
        "outstanding"
    }
}

fn render_output<T: serde::Serialize + ?Sized>(template: &str, key: &str, value: &T) -> CliOutput {
    let mut ctx = templates::context();
    ctx.insert(key, value);
    match templates::render(template, &ctx) {
        Ok(text) => success_output(text.trim_end().to_string()),
        Err(e) => error_output(e.to_string()),
    }
}

fn store_error_output(err: &Error) -> CliOutput {
    if !err.is_not_found() {
        tracing::error!(error = %err, "task store failed");
    }
    error_output(err.to_string())
}

fn success_output(msg: String) -> CliOutput {
    CliOutput { exit_code: ExitCode::SUCCESS, stdout: vec![msg], stderr: vec![] }
}

fn error_output(msg: String) -> CliOutput {
    CliOutput { exit_code: ExitCode::from(1), stdout: vec![], stderr: vec![msg] }
}
