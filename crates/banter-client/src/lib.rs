//! Remote collaborators for banter
//!
//! Two independent halves, both speaking for the chat service:
//!
//! - [`ApiClient`]: synchronous (request/response) HTTP operations:
//!   login, register, room CRUD, history fetch.
//! - The connection manager ([`connect`], [`ChatSocket`],
//!   [`SocketReader`]): the one persistent WebSocket per authenticated
//!   identity, with a read loop that yields [`SocketEvent`]s in transport
//!   arrival order.
//!
//! Neither half owns application state; failures are returned as typed
//! errors for the caller to surface.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod api;
mod error;
mod socket;

pub use api::ApiClient;
pub use error::{AuthError, ConnectError, NetworkError, ReadError, SendError};
pub use socket::{ChatSocket, SocketEvent, SocketReader, connect};
