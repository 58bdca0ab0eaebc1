//! Application side-effects and intents.
//!
//! Instructions produced by the [`crate::App`] state machine for the
//! runtime to execute. The app never performs I/O itself; every
//! collaborator call and every render goes through one of these.

use banter_core::Message;

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Authenticate and open the persistent connection.
    Login {
        /// Username to authenticate as.
        username: String,
        /// Password.
        password: String,
    },

    /// Create a new account.
    Register {
        /// Requested username.
        username: String,
        /// Password.
        password: String,
    },

    /// Create a room.
    CreateRoom {
        /// Display name for the new room.
        name: String,
    },

    /// Join an existing room by id.
    JoinRoom {
        /// Id of the room to join.
        room_id: String,
    },

    /// Fetch a room's stored history.
    LoadHistory {
        /// Id of the room to fetch.
        room_id: String,
    },

    /// Transmit a chat message on the persistent connection.
    SendChat {
        /// The outgoing message, stamped with room and sender but no
        /// server-assigned fields.
        message: Message,
    },

    /// Close the persistent connection and drop the reader.
    Logout,
}
