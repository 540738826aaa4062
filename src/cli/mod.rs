//! Command-line front end for the task planner.
//!
//! Each subcommand maps onto one task list operation. The parsed command is
//! executed by [`run`], which returns the text to print instead of printing
//! it, so the whole front end can be exercised without a process.

mod run;


pub use run::{run, CliOutput};

use clap::{Parser, Subcommand};

/// Personal task planner.
///
/// Tasks are stored in `tasks.db` in the working directory unless
/// `.planner.yaml` points somewhere else.
#[derive(Parser, Debug)]
#[command(name = "planner")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new, incomplete task.
    Add {
        /// Name of the task
        name: String,
    },

    /// List outstanding tasks.
    List {
        /// Include completed tasks
        #[arg(short, long)]
        all: bool,
    },

    /// Show a single task.
    Show {
        /// Task id
        id: String,
    },

    /// Flip a task between complete and outstanding.
    Toggle {
        /// Task id
        id: String,
    },

    /// Delete a task.
    Delete {
        /// Task id
        id: String,
    },

    /// Show version information.
    Version,
}

impl Command {
    /// Returns true if this command changes the stored tasks.
    #[must_use]
    pub const fn is_mutation(&self) -> bool {
        matches!(self, Self::Add { .. } | Self::Toggle { .. } | Self::Delete { .. })
    }
}
