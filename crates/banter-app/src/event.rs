//! Application input events.
//!
//! The comprehensive set of inputs that drive the [`crate::App`] state
//! machine. Events originate from three sources: user interactions (key,
//! resize), the socket read loop, and completions of collaborator calls
//! the runtime executed on the app's behalf.

use banter_core::{Identity, Message, Room};

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// Login completed: the identity is live and the persistent
    /// connection is open.
    LoggedIn {
        /// The authenticated identity.
        identity: Identity,
        /// Joined-room directory (best-effort; empty if the fetch
        /// failed).
        rooms: Vec<Room>,
    },

    /// Registration completed.
    Registered,

    /// Room creation completed.
    RoomCreated {
        /// The server's copy of the new room.
        room: Room,
    },

    /// Join-by-id completed.
    RoomJoined {
        /// Id of the joined room.
        room_id: String,
        /// Refreshed directory; `None` keeps the current one
        /// (best-effort refresh failed).
        rooms: Option<Vec<Room>>,
    },

    /// History fetch completed.
    HistoryLoaded {
        /// Room the history belongs to.
        room_id: String,
        /// Fetched messages, oldest first.
        messages: Vec<Message>,
    },

    /// An outgoing chat message was written to the connection.
    ChatSent {
        /// Room the message went to.
        room_id: String,
    },

    /// A collaborator call failed. The app stays in its current view
    /// and renders the message.
    RequestFailed {
        /// User-facing error description.
        message: String,
    },

    /// A message arrived on the persistent connection.
    SocketMessage {
        /// The delivered message.
        message: Message,
    },

    /// A transient read failure on the persistent connection. The read
    /// loop has already re-armed.
    SocketError {
        /// User-facing error description.
        message: String,
    },

    /// The persistent connection ended; no further deliveries follow.
    SocketClosed,
}
