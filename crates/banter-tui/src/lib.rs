//! Terminal UI for banter
//!
//! A thin shell over [`banter_app::App`] that provides terminal-specific
//! I/O: crossterm for keyboard events, ratatui for rendering, and the
//! async event loop wiring the state machine to the chat service's
//! collaborators.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod runtime;
pub mod terminal;
pub mod ui;

pub use runtime::{Runtime, RuntimeError};
