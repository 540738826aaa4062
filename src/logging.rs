//! Logging setup for the planner binaries.
//!
//! The library emits `tracing` events; the binaries decide where they go.
//! The HTTP server and the CLI log to stderr. The terminal UI owns the
//! terminal, so it logs to a file instead.
//!
//! The filter is taken from `RUST_LOG` when set, otherwise [`DEFAULT_FILTER`].

use std::fs::{self, File, OpenOptions};
use std::panic;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "task_planner=info,tower_http=info";

/// Maximum log file size before rotation (1MB).
const MAX_LOG_SIZE: u64 = 1_048_576;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Send log events to stderr.
///
/// Does nothing if a global subscriber is already installed.
pub fn init_stderr() {
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Send log events to a file, appending to what is already there.
///
/// Does nothing beyond opening the file if a global subscriber is already
/// installed.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init_file(path: &Path) -> std::io::Result<()> {
    let file = open_log_file(path)?;

    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init();

    tracing::info!("planner starting");
    Ok(())
}

/// Open a log file for appending, rotating it first if it has grown too large.
///
/// An oversized file is renamed to `<name>.log.old`, replacing any older
/// backup.
///
/// # Errors
///
/// Returns an error if the file or its parent directory cannot be created.
pub fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    if let Ok(metadata) = fs::metadata(path) {
        if metadata.len() > MAX_LOG_SIZE {
            let backup = path.with_extension("log.old");
            let _ = fs::rename(path, backup);
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}

/// Install a panic hook that records panics as log events before running
/// the previous hook.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        let location = info.location().map_or_else(
            || "unknown".to_string(),
            |loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()),
        );
        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic payload".to_string());

        tracing::error!(%location, "panic: {payload}");

        original_hook(info);
    }));
}
