//! Shared data model for banter
//!
//! Types exchanged between the chat service and the client: the
//! authenticated [`Identity`], the [`Room`] directory entry, and the
//! [`Message`] wire format. Serialization matches the service's JSON
//! field names exactly; everything else in the workspace builds on these
//! types.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod identity;
mod message;
mod room;

pub use identity::Identity;
pub use message::{Message, MessageKind};
pub use room::Room;
