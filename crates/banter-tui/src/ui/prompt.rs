//! Single-line prompts.
//!
//! The create-room and join-room screens are the same widget with
//! different labels.

use banter_app::TextField;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

const PROMPT_WIDTH: u16 = 44;
const PROMPT_HEIGHT: u16 = 3;

/// Which prompt is being drawn.
#[derive(Debug, Clone, Copy)]
pub enum Kind {
    /// Name for a room to create.
    CreateRoom,
    /// Id of a room to join.
    JoinRoom,
}

/// Render a centered one-line prompt with the cursor in it.
pub fn render(frame: &mut Frame, kind: Kind, field: &TextField, area: Rect) {
    let title = match kind {
        Kind::CreateRoom => " new room name ",
        Kind::JoinRoom => " room id to join ",
    };

    let prompt_area = super::centered(area, PROMPT_WIDTH, PROMPT_HEIGHT);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Yellow));
    frame.render_widget(Paragraph::new(field.text()).block(block), prompt_area);

    const BORDER: u16 = 1;
    let available = prompt_area.width.saturating_sub(BORDER * 2).saturating_sub(1);
    let offset = u16::try_from(field.cursor()).unwrap_or(u16::MAX).min(available);
    frame.set_cursor_position((
        prompt_area.x.saturating_add(BORDER).saturating_add(offset),
        prompt_area.y.saturating_add(BORDER),
    ));
}
