//! Joined-room directory.
//!
//! Full-screen list of the session's rooms with a selection cursor.
//! Tombstoned rooms stay listed (their history is still readable) but
//! carry a marker.

use banter_app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

const SELECTED_PREFIX: &str = "> ";
const UNSELECTED_PREFIX: &str = "  ";
const DELETED_MARKER: &str = " (deleted)";
const HELP_HEIGHT: u16 = 1;

/// Render the room directory.
pub fn render(frame: &mut Frame, app: &App, cursor: usize, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(HELP_HEIGHT)])
        .split(area);

    let [list_area, help_area] = chunks.as_ref() else {
        return;
    };

    let rooms = app.session().rooms();
    let items: Vec<ListItem> = if rooms.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "no rooms yet. press [n] to create one or [e] to join by id",
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        rooms
            .iter()
            .enumerate()
            .map(|(i, room)| {
                let selected = i == cursor;
                let (prefix, style) = if selected {
                    (SELECTED_PREFIX, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                } else {
                    (UNSELECTED_PREFIX, Style::default())
                };

                let mut spans = vec![
                    Span::raw(prefix),
                    Span::styled(room.name.clone(), style),
                    Span::styled(format!("  {}", room.id), Style::default().fg(Color::DarkGray)),
                ];
                if room.is_deleted() {
                    spans.push(Span::styled(DELETED_MARKER, Style::default().fg(Color::Red)));
                }

                ListItem::new(Line::from(spans))
            })
            .collect()
    };

    let block = Block::default().borders(Borders::ALL).title(" rooms ");
    frame.render_widget(List::new(items).block(block), *list_area);

    let help = Paragraph::new("[enter] open  [n] new room  [e] join by id  [esc] log out")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, *help_area);
}
