//! Application state machine.
//!
//! [`App`] owns the active [`View`] plus the shared context every view
//! needs: the session, the history store, the connection liveness flag,
//! terminal geometry, and the transient error/notice messages. It is a
//! pure state machine: it consumes [`AppEvent`] inputs and produces
//! [`AppAction`] instructions for the runtime to execute.
//!
//! Transition rules:
//!
//! - Every (view, event) pair either transitions deterministically or is
//!   a documented no-op.
//! - Error and notice are cleared at the start of every state-changing
//!   interaction and set only on the terminating branch of that
//!   interaction.
//! - Collaborator calls never happen here; the app emits the intent and
//!   the matching completion event drives the follow-up transition.

use banter_core::Message;

use crate::{
    AppAction, AppEvent, AuthField, AuthForm, ChatView, HistoryStore, KeyInput, Session,
    TextField, View,
};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App {
    /// Active view.
    view: View,
    /// Identity and joined-room directory.
    session: Session,
    /// Per-room message history.
    store: HistoryStore,
    /// Whether the persistent connection is live.
    connected: bool,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
    /// Transient error message. `None` if no error.
    error: Option<String>,
    /// Transient success notice. `None` if no notice.
    notice: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new App showing the login view.
    pub fn new() -> Self {
        Self {
            view: View::LoggingIn(AuthForm::new()),
            session: Session::new(),
            store: HistoryStore::new(),
            connected: false,
            terminal_size: (80, 24),
            error: None,
            notice: None,
        }
    }

    /// Process an event and return actions for the runtime.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::LoggedIn { identity, rooms } => {
                tracing::debug!(username = %identity.username, "session started");
                self.session.begin(identity, rooms);
                self.connected = true;
                self.view = View::ListingRooms { cursor: 0 };
                vec![AppAction::Render]
            },
            AppEvent::Registered => {
                if let View::Registering(form) = &mut self.view {
                    let username = form.username.take();
                    self.notice = Some("account created, log in to continue".into());
                    self.view = View::LoggingIn(AuthForm::with_username(username));
                }
                vec![AppAction::Render]
            },
            AppEvent::RoomCreated { room } => {
                if matches!(self.view, View::CreatingRoom { .. }) {
                    self.session.add_room(room);
                    let cursor = self.session.rooms().len().saturating_sub(1);
                    self.view = View::ListingRooms { cursor };
                }
                vec![AppAction::Render]
            },
            AppEvent::RoomJoined { room_id, rooms } => {
                if matches!(self.view, View::JoiningRoom { .. }) {
                    if let Some(rooms) = rooms {
                        self.session.set_rooms(rooms);
                    }
                    vec![AppAction::LoadHistory { room_id }, AppAction::Render]
                } else {
                    vec![AppAction::Render]
                }
            },
            AppEvent::HistoryLoaded { room_id, messages } => match self.view {
                View::ListingRooms { .. } | View::JoiningRoom { .. } => {
                    self.store.load(room_id.clone(), messages);
                    self.view = View::Chatting(ChatView::new(room_id));
                    vec![AppAction::Render]
                },
                // Stale completion; nothing is waiting on it.
                _ => vec![],
            },
            AppEvent::ChatSent { room_id } => {
                if let View::Chatting(chat) = &mut self.view
                    && chat.room_id == room_id
                {
                    chat.input.clear();
                    chat.scroll = 0;
                }
                vec![AppAction::Render]
            },
            AppEvent::RequestFailed { message } => {
                self.error = Some(message);
                vec![AppAction::Render]
            },
            AppEvent::SocketMessage { message } => {
                let room_id = message.room_id.clone();
                self.store.append(message);
                if let View::Chatting(chat) = &mut self.view
                    && chat.room_id == room_id
                {
                    // Re-pin the viewport to the latest entry. Arrivals
                    // for other rooms leave the viewport alone.
                    chat.scroll = 0;
                }
                vec![AppAction::Render]
            },
            AppEvent::SocketError { message } => {
                self.error = Some(message);
                vec![AppAction::Render]
            },
            AppEvent::SocketClosed => {
                self.connected = false;
                self.error = Some("chat connection lost".into());
                vec![AppAction::Render]
            },
        }
    }

    /// Route a key press to the active view's handler.
    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match self.view {
            View::LoggingIn(_) => self.key_logging_in(key),
            View::Registering(_) => self.key_registering(key),
            View::ListingRooms { .. } => self.key_listing_rooms(key),
            View::CreatingRoom { .. } => self.key_creating_room(key),
            View::JoiningRoom { .. } => self.key_joining_room(key),
            View::Chatting(_) => self.key_chatting(key),
        }
    }

    fn key_logging_in(&mut self, key: KeyInput) -> Vec<AppAction> {
        let View::LoggingIn(form) = &mut self.view else {
            return vec![];
        };

        match key {
            KeyInput::Tab | KeyInput::Up | KeyInput::Down => {
                form.toggle_focus();
                vec![AppAction::Render]
            },
            KeyInput::Enter => {
                self.error = None;
                self.notice = None;
                if form.focus != AuthField::Password
                    || form.username.is_empty()
                    || form.password.is_empty()
                {
                    // Incomplete form: no call, no transition.
                    return vec![AppAction::Render];
                }
                vec![
                    AppAction::Login {
                        username: form.username.text().to_owned(),
                        password: form.password.text().to_owned(),
                    },
                    AppAction::Render,
                ]
            },
            KeyInput::Esc => {
                self.error = None;
                self.notice = None;
                self.view = View::Registering(AuthForm::new());
                vec![AppAction::Render]
            },
            other => {
                if form.focused_mut().handle_key(other) {
                    vec![AppAction::Render]
                } else {
                    vec![]
                }
            },
        }
    }

    fn key_registering(&mut self, key: KeyInput) -> Vec<AppAction> {
        let View::Registering(form) = &mut self.view else {
            return vec![];
        };

        match key {
            KeyInput::Tab | KeyInput::Up | KeyInput::Down => {
                form.toggle_focus();
                vec![AppAction::Render]
            },
            KeyInput::Enter => {
                self.error = None;
                self.notice = None;
                if form.focus != AuthField::Password
                    || form.username.is_empty()
                    || form.password.is_empty()
                {
                    return vec![AppAction::Render];
                }
                vec![
                    AppAction::Register {
                        username: form.username.text().to_owned(),
                        password: form.password.text().to_owned(),
                    },
                    AppAction::Render,
                ]
            },
            KeyInput::Esc => {
                self.error = None;
                self.notice = None;
                self.view = View::LoggingIn(AuthForm::new());
                vec![AppAction::Render]
            },
            other => {
                if form.focused_mut().handle_key(other) {
                    vec![AppAction::Render]
                } else {
                    vec![]
                }
            },
        }
    }

    fn key_listing_rooms(&mut self, key: KeyInput) -> Vec<AppAction> {
        let View::ListingRooms { cursor } = &mut self.view else {
            return vec![];
        };

        match key {
            KeyInput::Up => {
                *cursor = cursor.saturating_sub(1);
                vec![AppAction::Render]
            },
            KeyInput::Down => {
                let last = self.session.rooms().len().saturating_sub(1);
                if *cursor < last {
                    *cursor = cursor.saturating_add(1);
                }
                vec![AppAction::Render]
            },
            KeyInput::Enter => {
                self.error = None;
                self.notice = None;
                match self.session.room_at(*cursor) {
                    Some(room) => {
                        vec![AppAction::LoadHistory { room_id: room.id.clone() }, AppAction::Render]
                    },
                    // Empty directory: no call, no transition.
                    None => vec![AppAction::Render],
                }
            },
            KeyInput::Char('n') => {
                self.error = None;
                self.notice = None;
                self.view = View::CreatingRoom { name: TextField::new() };
                vec![AppAction::Render]
            },
            KeyInput::Char('e') => {
                self.error = None;
                self.notice = None;
                self.view = View::JoiningRoom { room_id: TextField::new() };
                vec![AppAction::Render]
            },
            KeyInput::Esc => {
                tracing::debug!("session ended by user");
                self.error = None;
                self.notice = None;
                self.session.end();
                self.store.clear();
                self.connected = false;
                self.view = View::LoggingIn(AuthForm::new());
                vec![AppAction::Logout, AppAction::Render]
            },
            _ => vec![],
        }
    }

    fn key_creating_room(&mut self, key: KeyInput) -> Vec<AppAction> {
        let View::CreatingRoom { name } = &mut self.view else {
            return vec![];
        };

        match key {
            KeyInput::Enter => {
                self.error = None;
                self.notice = None;
                if name.is_empty() {
                    // Empty name: no call, no transition.
                    return vec![AppAction::Render];
                }
                vec![AppAction::CreateRoom { name: name.text().to_owned() }, AppAction::Render]
            },
            KeyInput::Esc => {
                self.error = None;
                self.notice = None;
                self.view = View::ListingRooms { cursor: 0 };
                vec![AppAction::Render]
            },
            other => {
                if name.handle_key(other) {
                    vec![AppAction::Render]
                } else {
                    vec![]
                }
            },
        }
    }

    fn key_joining_room(&mut self, key: KeyInput) -> Vec<AppAction> {
        let View::JoiningRoom { room_id } = &mut self.view else {
            return vec![];
        };

        match key {
            KeyInput::Enter => {
                self.error = None;
                self.notice = None;
                if room_id.is_empty() {
                    return vec![AppAction::Render];
                }
                vec![AppAction::JoinRoom { room_id: room_id.text().to_owned() }, AppAction::Render]
            },
            KeyInput::Esc => {
                self.error = None;
                self.notice = None;
                self.view = View::ListingRooms { cursor: 0 };
                vec![AppAction::Render]
            },
            other => {
                if room_id.handle_key(other) {
                    vec![AppAction::Render]
                } else {
                    vec![]
                }
            },
        }
    }

    fn key_chatting(&mut self, key: KeyInput) -> Vec<AppAction> {
        let View::Chatting(chat) = &mut self.view else {
            return vec![];
        };

        match key {
            KeyInput::Up => {
                chat.scroll = chat.scroll.saturating_add(1);
                vec![AppAction::Render]
            },
            KeyInput::Down => {
                chat.scroll = chat.scroll.saturating_sub(1);
                vec![AppAction::Render]
            },
            KeyInput::Enter => {
                self.error = None;
                self.notice = None;
                if chat.input.is_empty() {
                    // Empty body: no call, nothing stored.
                    return vec![AppAction::Render];
                }
                let Some(identity) = self.session.identity() else {
                    return vec![AppAction::Render];
                };
                let message =
                    Message::outgoing(chat.room_id.clone(), identity, chat.input.text());
                // The draft is cleared by ChatSent, so a failed send
                // keeps it editable.
                vec![AppAction::SendChat { message }, AppAction::Render]
            },
            KeyInput::Esc => {
                self.error = None;
                self.notice = None;
                self.view = View::ListingRooms { cursor: 0 };
                vec![AppAction::Render]
            },
            other => {
                if chat.input.handle_key(other) {
                    vec![AppAction::Render]
                } else {
                    vec![]
                }
            },
        }
    }

    /// Active view.
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Identity and joined-room directory.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// A room's history, oldest first.
    pub fn messages(&self, room_id: &str) -> &[Message] {
        self.store.messages(room_id)
    }

    /// Whether the persistent connection is live.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Transient error message. `None` if no error.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Transient success notice. `None` if no notice.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}
