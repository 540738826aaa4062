//! Terminal UI binary for the task planner.

use std::process::ExitCode;

use task_planner::config::PlannerConfig;
use task_planner::tasks::TaskList;
use task_planner::tui::terminal;
use task_planner::{logging, templates};

fn main() -> ExitCode {
    let config = match PlannerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("planner-tui: {e}");
            return ExitCode::from(1);
        }
    };

    // The UI owns the terminal, so logs go to a file.
    if let Err(e) = logging::init_file(&config.log_file) {
        eprintln!("Warning: logging init failed: {e}");
    }
    logging::install_panic_hook();
    // Installed last so the terminal is restored before anything is printed.
    terminal::install_panic_hook();

    let result = templates::init_with_fallback(config.templates_dir.as_deref())
        .and_then(|()| TaskList::open(&config))
        .and_then(|list| terminal::run(&list));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "terminal UI failed");
            eprintln!("planner-tui: {e}");
            ExitCode::from(1)
        }
    }
}
