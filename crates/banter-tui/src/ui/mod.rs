//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O): one module per
//! screen plus the shared status bar. Which module draws is decided
//! entirely by the active view variant.

mod auth;
mod chat;
mod prompt;
mod rooms;
mod status;

use banter_app::{App, View};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    const MAIN_AREA_MIN_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(MAIN_AREA_MIN_HEIGHT), Constraint::Length(STATUS_HEIGHT)])
        .split(frame.area());

    let [main_area, status_area] = chunks.as_ref() else {
        return;
    };

    match app.view() {
        View::LoggingIn(form) => auth::render(frame, form, auth::Screen::Login, *main_area),
        View::Registering(form) => auth::render(frame, form, auth::Screen::Register, *main_area),
        View::ListingRooms { cursor } => rooms::render(frame, app, *cursor, *main_area),
        View::CreatingRoom { name } => {
            prompt::render(frame, prompt::Kind::CreateRoom, name, *main_area);
        },
        View::JoiningRoom { room_id } => {
            prompt::render(frame, prompt::Kind::JoinRoom, room_id, *main_area);
        },
        View::Chatting(chat) => chat::render(frame, app, chat, *main_area),
    }

    status::render(frame, app, *status_area);
}

/// A `width` x `height` rect centered in `area`, clamped to it.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x.saturating_add((area.width.saturating_sub(width)) / 2);
    let y = area.y.saturating_add((area.height.saturating_sub(height)) / 2);
    Rect { x, y, width, height }
}
