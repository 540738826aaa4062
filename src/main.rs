//! Command-line binary for the task planner.
//!
//! This binary is a thin wrapper that parses arguments and delegates to the
//! library.

use std::process::ExitCode;

use clap::Parser;
use task_planner::cli::{Cli, Command};
use task_planner::config::PlannerConfig;
use task_planner::tasks::{SqliteTaskStore, TaskList};
use task_planner::{logging, templates};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_stderr();

    // Version needs no database.
    if matches!(cli.command, Command::Version) {
        println!("planner v{}", task_planner::VERSION);
        return ExitCode::SUCCESS;
    }

    let list = match open_list() {
        Ok(list) => list,
        Err(e) => {
            eprintln!("Error opening task list: {e}");
            return ExitCode::from(1);
        }
    };

    let output = task_planner::cli::run(cli.command, &list);

    for msg in output.stdout {
        println!("{msg}");
    }
    for msg in output.stderr {
        eprintln!("{msg}");
    }

    output.exit_code
}

fn open_list() -> task_planner::Result<TaskList<SqliteTaskStore>> {
    let config = PlannerConfig::load()?;
    templates::init_with_fallback(config.templates_dir.as_deref())?;
    TaskList::open(&config)
}
