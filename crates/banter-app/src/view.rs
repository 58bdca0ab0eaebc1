//! View state.
//!
//! One variant per screen, each carrying only the transient fields that
//! screen needs. Replacing the whole variant on a transition makes stale
//! cross-view fields impossible, which is the point of the sum type.

use crate::TextField;

/// Which field of an auth form has input focus.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    /// The username field.
    #[default]
    Username,
    /// The password field.
    Password,
}

/// Username/password form shared by the login and register screens.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AuthForm {
    /// Username input.
    pub username: TextField,
    /// Password input.
    pub password: TextField,
    /// Currently focused field.
    pub focus: AuthField,
}

impl AuthForm {
    /// Create an empty form focused on the username field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a form with the username pre-filled and the password field
    /// focused (used after a successful registration).
    pub fn with_username(username: impl Into<String>) -> Self {
        let mut form = Self::default();
        for c in username.into().chars() {
            form.username.handle_key(crate::KeyInput::Char(c));
        }
        form.focus = AuthField::Password;
        form
    }

    /// Move focus to the other field.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            AuthField::Username => AuthField::Password,
            AuthField::Password => AuthField::Username,
        };
    }

    /// The field currently holding focus.
    pub fn focused_mut(&mut self) -> &mut TextField {
        match self.focus {
            AuthField::Username => &mut self.username,
            AuthField::Password => &mut self.password,
        }
    }
}

/// Transient state of the chat screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatView {
    /// Room the user is chatting in.
    pub room_id: String,
    /// Draft message input.
    pub input: TextField,
    /// Scroll offset in lines, measured up from the latest entry.
    /// Zero means the viewport is pinned to the bottom.
    pub scroll: u16,
}

impl ChatView {
    /// Enter a room with an empty draft, pinned to the latest entry.
    pub fn new(room_id: impl Into<String>) -> Self {
        Self { room_id: room_id.into(), input: TextField::new(), scroll: 0 }
    }
}

/// The active screen. Exactly one is current at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Login form.
    LoggingIn(AuthForm),
    /// Registration form.
    Registering(AuthForm),
    /// Joined-room directory with a selection cursor.
    ListingRooms {
        /// Index into the joined-room set, clamped to `[0, len-1]`.
        cursor: usize,
    },
    /// Prompt for a new room's name.
    CreatingRoom {
        /// Room name input.
        name: TextField,
    },
    /// Prompt for a room id to join.
    JoiningRoom {
        /// Room id input.
        room_id: TextField,
    },
    /// Live chat in one room.
    Chatting(ChatView),
}
