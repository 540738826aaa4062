//! HTTP API binary for the task planner.
//!
//! Serves the task list over HTTP on the configured address (port 5000 by
//! default) until the process is stopped.

use std::process::ExitCode;

use task_planner::config::PlannerConfig;
use task_planner::tasks::TaskList;
use task_planner::{logging, server};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_stderr();
    logging::install_panic_hook();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("planner-server: {e}");
            ExitCode::from(1)
        }
    }
}

async fn run() -> task_planner::Result<()> {
    let config = PlannerConfig::load()?;
    let list = TaskList::open(&config)?;
    tracing::info!(database = %config.database_path.display(), "task list opened");

    server::serve(list, config.listen_addr).await
}
