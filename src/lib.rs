//! # `task_planner`
//!
//! A personal task tracker. One [`tasks::TaskList`] backed by SQLite (or
//! memory, in tests) is shared by three front ends: a terminal UI, an HTTP
//! API and a command-line tool.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
#[cfg(feature = "server")]
pub mod server;
pub mod tasks;
pub mod templates;
pub mod tui;

pub use error::{Error, Result};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
