//! Application layer for banter
//!
//! Pure state machine for the interactive chat session, completely
//! decoupled from I/O: it consumes [`AppEvent`] inputs (key presses,
//! resize, socket deliveries, collaborator completions) and produces
//! [`AppAction`] instructions for the runtime to execute. Because the
//! dispatcher serializes events, no state in this crate needs a lock.
//!
//! # Components
//!
//! - [`App`]: the view state machine and its shared context
//! - [`View`]: one variant per screen, carrying only that screen's fields
//! - [`HistoryStore`]: per-room ordered message buffers
//! - [`Session`]: authenticated identity plus the joined-room directory
//! - [`KeyInput`] / [`TextField`]: terminal-agnostic input handling

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod event;
mod field;
mod input;
mod session;
mod store;
mod view;

pub use action::AppAction;
pub use app::App;
pub use event::AppEvent;
pub use field::TextField;
pub use input::KeyInput;
pub use session::Session;
pub use store::HistoryStore;
pub use view::{AuthField, AuthForm, ChatView, View};
