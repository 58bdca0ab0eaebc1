//! Status bar
//!
//! One line: connection state, who is logged in, and the current
//! transient error or notice.

use banter_app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let connection = if app.is_connected() {
        Span::styled("online", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
    } else {
        Span::styled("offline", Style::default().fg(Color::Red))
    };

    let who = app
        .session()
        .identity()
        .map_or_else(String::new, |identity| format!(" | {}", identity.username));

    let transient = if let Some(error) = app.error() {
        Span::styled(format!(" | {error}"), Style::default().fg(Color::Red))
    } else if let Some(notice) = app.notice() {
        Span::styled(format!(" | {notice}"), Style::default().fg(Color::Green))
    } else {
        Span::raw(String::new())
    };

    let status_line = Line::from(vec![
        Span::raw(" "),
        connection,
        Span::styled(who, Style::default().fg(Color::Gray)),
        transient,
    ]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
