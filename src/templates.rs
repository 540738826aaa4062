//! Template loading and rendering using Tera.
//!
//! User-facing text (the terminal UI screen and CLI listings) lives in
//! template files embedded in the binary. A templates directory named in the
//! config can override any of them; without one only the embedded copies are
//! used, whatever the working directory holds.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;
use tera::{Context, Tera};

/// Template for the terminal UI screen.
pub const TUI_SCREEN: &str = "tui/screen.tera";

/// Template for a CLI task listing.
pub const CLI_LIST: &str = "cli/list.tera";

/// Template for a single task shown by the CLI.
pub const CLI_TASK: &str = "cli/task.tera";

/// Embedded default templates for fallback when files don't exist.
static EMBEDDED_TEMPLATES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(TUI_SCREEN, include_str!("../templates/tui/screen.tera"));
    m.insert(CLI_LIST, include_str!("../templates/cli/list.tera"));
    m.insert(CLI_TASK, include_str!("../templates/cli/task.tera"));
    m
});

/// Global template engine with caching.
static TERA: Lazy<RwLock<Option<Tera>>> = Lazy::new(|| RwLock::new(None));

/// Initialize the template engine, optionally overriding embedded templates
/// with the ones found in `templates_dir`.
///
/// With `None`, or a directory that doesn't exist, only the embedded
/// templates are loaded.
///
/// # Errors
///
/// Returns an error if the templates directory exists but contains invalid
/// templates.
pub fn init_templates(templates_dir: Option<&Path>) -> Result<()> {
    let mut tera = Tera::default();

    if let Some(dir) = templates_dir.filter(|dir| dir.exists()) {
        let glob_pattern = format!("{}/**/*.tera", dir.display());
        tera = Tera::new(&glob_pattern).map_err(|e| {
            Error::Template(format!("Failed to load templates from {}: {e}", dir.display()))
        })?;
    }

    for (name, content) in EMBEDDED_TEMPLATES.iter() {
        if tera.get_template(name).is_err() {
            tera.add_raw_template(name, content)
                .map_err(|e| Error::Template(format!("Invalid embedded template {name}: {e}")))?;
        }
    }

    *TERA.write().map_err(|e| Error::Template(e.to_string()))? = Some(tera);

    Ok(())
}

/// Initialize the template engine from a configured override directory,
/// falling back to the embedded templates if it cannot be loaded.
///
/// # Errors
///
/// Returns an error only if the embedded templates themselves fail to load.
pub fn init_with_fallback(templates_dir: Option<&Path>) -> Result<()> {
    match init_templates(templates_dir) {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring template overrides");
            init_templates(None)
        }
    }
}

/// Render a template with the given context.
///
/// Templates are lazy-loaded from the filesystem on first use, with embedded
/// defaults as fallback.
///
/// # Errors
///
/// Returns an error if the template doesn't exist or rendering fails.
pub fn render(name: &str, context: &Context) -> Result<String> {
    let needs_init = TERA.read().map_err(|e| Error::Template(e.to_string()))?.is_none();

    if needs_init {
        init_templates(None)?;
    }

    let guard = TERA.read().map_err(|e| Error::Template(e.to_string()))?;
    let tera = guard.as_ref().ok_or_else(|| Error::Template("Templates not initialized".into()))?;
    let rendered = tera
        .render(name, context)
        .map_err(|e| Error::Template(format!("Failed to render template {name}: {e}")))?;
    drop(guard);

    Ok(rendered)
}

/// Create a new Tera context.
#[must_use]
pub fn context() -> Context {
    Context::new()
}

/// Reset the template cache, forcing re-initialization on next use.
///
/// # Errors
///
/// Returns an error if the write lock cannot be acquired.
pub fn reset_cache() -> Result<()> {
    *TERA.write().map_err(|e| Error::Template(e.to_string()))? = None;
    Ok(())
}

/// Get the list of all embedded template names.
#[must_use]
pub fn embedded_template_names() -> Vec<&'static str> {
    EMBEDDED_TEMPLATES.keys().copied().collect()
}
