//! Chat screen.
//!
//! Message log for the active room plus the draft input line. The log
//! is tail-pinned: scroll offset zero shows the latest entries, and
//! scrolling up moves the window back through history.

use banter_app::{App, ChatView};
use banter_core::Message;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

const INPUT_HEIGHT: u16 = 3;
const BORDER_SIZE: u16 = 2;

/// Render the chat screen.
pub fn render(frame: &mut Frame, app: &App, chat: &ChatView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(INPUT_HEIGHT)])
        .split(area);

    let [log_area, input_area] = chunks.as_ref() else {
        return;
    };

    render_log(frame, app, chat, *log_area);
    render_input(frame, chat, *input_area);
}

fn render_log(frame: &mut Frame, app: &App, chat: &ChatView, area: Rect) {
    // The directory knows the display name; fall back to the raw id for
    // a room joined in another session.
    let title = app
        .session()
        .rooms()
        .iter()
        .find(|room| room.id == chat.room_id)
        .map_or_else(|| format!(" {} ", chat.room_id), |room| format!(" {} ", room.name));

    let own_username = app.session().identity().map(|identity| identity.username.as_str());
    let items: Vec<ListItem> = app
        .messages(&chat.room_id)
        .iter()
        .map(|message| message_line(message, own_username))
        .collect();

    let visible_height = area.height.saturating_sub(BORDER_SIZE) as usize;
    let scrolled_past = items.len().saturating_sub(usize::from(chat.scroll));
    let skip = scrolled_past.saturating_sub(visible_height);
    let visible_items: Vec<_> = items.into_iter().take(scrolled_past).skip(skip).collect();

    let block = Block::default().borders(Borders::ALL).title(title);
    frame.render_widget(List::new(visible_items).block(block), area);
}

fn message_line(message: &Message, own_username: Option<&str>) -> ListItem<'static> {
    let own = own_username == Some(message.sender_username.as_str());
    let sender_style = if own {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    };

    let timestamp = message
        .sent_at
        .map_or_else(String::new, |at| format!("{} ", at.format("%H:%M")));

    ListItem::new(Line::from(vec![
        Span::styled(timestamp, Style::default().fg(Color::DarkGray)),
        Span::styled(format!("<{}>", message.sender_username), sender_style),
        Span::raw(" "),
        Span::raw(message.body.clone()),
    ]))
}

fn render_input(frame: &mut Frame, chat: &ChatView, area: Rect) {
    const PROMPT: &str = "> ";
    const PROMPT_WIDTH: u16 = 3;
    const RIGHT_PADDING: u16 = 1;
    const INPUT_LINE_OFFSET_Y: u16 = 1;

    let block = Block::default().borders(Borders::ALL).title(" message | [esc] rooms ");
    let text = format!("{PROMPT}{}", chat.input.text());
    frame.render_widget(Paragraph::new(text).block(block), area);

    let available = area.width.saturating_sub(PROMPT_WIDTH + RIGHT_PADDING);
    let offset = u16::try_from(chat.input.cursor()).unwrap_or(u16::MAX).min(available);
    let x = area.x.saturating_add(PROMPT_WIDTH).saturating_add(offset);
    let y = area.y.saturating_add(INPUT_LINE_OFFSET_Y);
    frame.set_cursor_position((x, y));
}
