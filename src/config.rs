//! Configuration management for the planner.
//!
//! Every setting has a fixed default, so the planner runs without any
//! configuration at all. A `.planner.yaml` file in the working directory can
//! override individual settings.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Config file path relative to the working directory.
pub const CONFIG_FILE_PATH: &str = ".planner.yaml";

/// Default database file.
pub const DEFAULT_DATABASE_PATH: &str = "tasks.db";

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default log file for the terminal UI.
pub const DEFAULT_LOG_FILE: &str = "planner.log";

/// Planner configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Path of the `SQLite` database holding the tasks.
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// Address the HTTP server listens on.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,

    /// File the terminal UI writes its logs to.
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Directory whose `.tera` files replace the built-in screen and listing
    /// templates. Unset means the built-in templates only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<PathBuf>,
}

fn default_database_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE_PATH)
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT))
}

fn default_log_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            listen_addr: default_listen_addr(),
            log_file: default_log_file(),
            templates_dir: None,
        }
    }
}

impl PlannerConfig {
    /// Load config from the working directory, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        Ok(Self::load_from(Path::new("."))?.unwrap_or_default())
    }

    /// Load config from a specific base directory, returning None if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load_from(base_dir: &Path) -> Result<Option<Self>> {
        let config_path = Self::config_path(base_dir);
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(Some(config))
    }

    /// Save config to a specific base directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, base_dir: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(Self::config_path(base_dir), content)?;
        Ok(())
    }

    /// Get the config file path for a base directory.
    pub fn config_path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE_PATH)
    }
}
