//! Terminal user interface.
//!
//! [`Model`] holds the screen state and reacts to [`Key`] presses; it is
//! always built so it can be tested without a terminal. The crossterm event
//! loop lives in [`terminal`] behind the `tui` feature.

mod model;

#[cfg(feature = "tui")]
pub mod terminal;

pub use model::{Control, Key, Model};
