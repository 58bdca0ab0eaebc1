//! Async runtime
//!
//! Event loop that drives terminal I/O and coordinates between the App
//! state machine, the HTTP client, and the persistent connection. Uses
//! tokio::select! to handle terminal events and socket deliveries
//! concurrently; the select loop is the dispatcher, so App never sees
//! two events at once.

use std::io;

use banter_app::{App, AppAction, AppEvent};
use banter_client::{ApiClient, ChatSocket, SocketEvent, connect};
use banter_core::Identity;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;
use tokio::{sync::mpsc, task::JoinHandle};

use crate::{terminal, ui};

/// Runtime errors.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Async runtime for the TUI.
///
/// Owns the terminal, the App state machine, and both collaborators.
/// Executes the actions the app emits and feeds the completion events
/// back in, so at most one request/response call is in flight at a time.
pub struct Runtime {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: App,
    api: ApiClient,
    ws_url: String,
    socket: Option<ChatSocket>,
    reader: Option<JoinHandle<()>>,
    socket_tx: mpsc::UnboundedSender<SocketEvent>,
    socket_rx: mpsc::UnboundedReceiver<SocketEvent>,
}

impl Runtime {
    /// Create a runtime talking to the service at the given URLs.
    pub fn new(api_url: &str, ws_url: String) -> Result<Self, RuntimeError> {
        let terminal = terminal::setup()?;
        let (socket_tx, socket_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            app: App::new(),
            api: ApiClient::new(api_url),
            ws_url,
            socket: None,
            reader: None,
            socket_tx,
            socket_rx,
        })
    }

    /// Run the main event loop until the user quits.
    pub async fn run(mut self) -> Result<(), RuntimeError> {
        self.render()?;

        let mut event_stream = EventStream::new();

        loop {
            let should_quit = tokio::select! {
                // Terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_terminal_event(event).await?,
                        Some(Err(e)) => return Err(RuntimeError::Io(e)),
                        None => true,
                    }
                }

                // Deliveries from the socket read loop. The runtime
                // holds a sender, so the channel never closes.
                Some(socket_event) = self.socket_rx.recv() => {
                    let actions = self.app.handle(Self::convert_socket_event(socket_event));
                    self.process_actions(actions).await?
                }
            };

            if should_quit {
                break;
            }
        }

        Ok(())
    }

    fn convert_socket_event(event: SocketEvent) -> AppEvent {
        match event {
            SocketEvent::Message(message) => AppEvent::SocketMessage { message },
            SocketEvent::ReadError(e) => {
                AppEvent::SocketError { message: format!("read failed: {e}") }
            },
            SocketEvent::Closed { reason } => {
                if let Some(e) = reason {
                    tracing::warn!("chat connection lost: {e}");
                }
                AppEvent::SocketClosed
            },
        }
    }

    /// Handle a terminal event and return whether to quit.
    async fn handle_terminal_event(&mut self, event: Event) -> Result<bool, RuntimeError> {
        let app_event = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if is_quit_key(&key) {
                    return Ok(true);
                }
                match terminal::convert_key(key.code) {
                    Some(key_input) => AppEvent::Key(key_input),
                    None => return Ok(false),
                }
            },
            Event::Resize(cols, rows) => AppEvent::Resize(cols, rows),
            _ => return Ok(false),
        };

        let actions = self.app.handle(app_event);
        self.process_actions(actions).await
    }

    /// Process actions returned by the app. Returns true if should quit.
    ///
    /// Iterative: completion events produced by executing one batch are
    /// handled before the next batch, avoiding async recursion between
    /// actions and events.
    async fn process_actions(
        &mut self,
        initial_actions: Vec<AppAction>,
    ) -> Result<bool, RuntimeError> {
        let mut pending_actions = initial_actions;

        while !pending_actions.is_empty() {
            let actions = std::mem::take(&mut pending_actions);

            for action in actions {
                match action {
                    AppAction::Render => self.render()?,
                    AppAction::Quit => return Ok(true),
                    AppAction::Logout => self.disconnect(),
                    other => {
                        if let Some(event) = self.execute(other).await {
                            pending_actions.extend(self.app.handle(event));
                        }
                    },
                }
            }
        }
        Ok(false)
    }

    /// Execute one collaborator call and return its completion event.
    async fn execute(&mut self, action: AppAction) -> Option<AppEvent> {
        match action {
            AppAction::Login { username, password } => {
                Some(self.login(&username, &password).await)
            },
            AppAction::Register { username, password } => {
                Some(match self.api.register(&username, &password).await {
                    Ok(()) => AppEvent::Registered,
                    Err(e) => AppEvent::RequestFailed { message: e.to_string() },
                })
            },
            AppAction::CreateRoom { name } => {
                let identity = self.identity()?;
                Some(match self.api.create_room(&identity, &name).await {
                    Ok(room) => AppEvent::RoomCreated { room },
                    Err(e) => AppEvent::RequestFailed { message: e.to_string() },
                })
            },
            AppAction::JoinRoom { room_id } => {
                let identity = self.identity()?;
                Some(match self.api.join_room(&identity, &room_id).await {
                    Ok(()) => {
                        // Best-effort refresh; the join itself already
                        // succeeded.
                        let rooms = match self.api.list_joined_rooms(&identity).await {
                            Ok(rooms) => Some(rooms),
                            Err(e) => {
                                tracing::warn!("directory refresh failed: {e}");
                                None
                            },
                        };
                        AppEvent::RoomJoined { room_id, rooms }
                    },
                    Err(e) => AppEvent::RequestFailed { message: e.to_string() },
                })
            },
            AppAction::LoadHistory { room_id } => {
                let identity = self.identity()?;
                Some(match self.api.load_history(&identity, &room_id).await {
                    Ok(messages) => AppEvent::HistoryLoaded { room_id, messages },
                    Err(e) => AppEvent::RequestFailed { message: e.to_string() },
                })
            },
            AppAction::SendChat { message } => {
                let Some(socket) = self.socket.as_mut() else {
                    return Some(AppEvent::RequestFailed {
                        message: "chat connection is not open".into(),
                    });
                };
                Some(match socket.send(&message).await {
                    Ok(()) => AppEvent::ChatSent { room_id: message.room_id },
                    Err(e) => {
                        AppEvent::RequestFailed { message: format!("could not send message: {e}") }
                    },
                })
            },
            // Handled by the caller.
            AppAction::Render | AppAction::Quit | AppAction::Logout => None,
        }
    }

    /// Authenticate, fetch the directory, and open the persistent
    /// connection. The user stays on the login screen unless both the
    /// login and the connection succeed.
    async fn login(&mut self, username: &str, password: &str) -> AppEvent {
        let identity = match self.api.login(username, password).await {
            Ok(identity) => identity,
            Err(e) => return AppEvent::RequestFailed { message: e.to_string() },
        };

        // Best-effort: an empty directory is usable, a dead connection
        // is not.
        let rooms = match self.api.list_joined_rooms(&identity).await {
            Ok(rooms) => rooms,
            Err(e) => {
                tracing::warn!("directory fetch failed: {e}");
                Vec::new()
            },
        };

        match connect(&self.ws_url, &identity).await {
            Ok((socket, reader)) => {
                self.socket = Some(socket);
                self.reader = Some(reader.spawn(self.socket_tx.clone()));
                AppEvent::LoggedIn { identity, rooms }
            },
            Err(e) => AppEvent::RequestFailed {
                message: format!("could not open chat connection: {e}"),
            },
        }
    }

    /// The session identity, cloned so calls can run without borrowing
    /// the app.
    fn identity(&self) -> Option<Identity> {
        let identity = self.app.session().identity().cloned();
        if identity.is_none() {
            tracing::warn!("authenticated action without a session");
        }
        identity
    }

    /// Tear down the persistent connection.
    fn disconnect(&mut self) {
        if let Some(reader) = self.reader.take() {
            reader.abort();
        }
        self.socket = None;

        // Drop events the old reader already queued, so a later session
        // does not see a stale close.
        while self.socket_rx.try_recv().is_ok() {}
    }

    /// Render the UI.
    fn render(&mut self) -> Result<(), RuntimeError> {
        self.terminal.draw(|frame| {
            ui::render(frame, &self.app);
        })?;
        Ok(())
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        self.disconnect();
        terminal::restore();
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}
