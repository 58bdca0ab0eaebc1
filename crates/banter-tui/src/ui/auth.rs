//! Login and registration forms.
//!
//! Both screens share the same two-field layout; only the titles and
//! the help line differ.

use banter_app::{AuthField, AuthForm, TextField};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

const FIELD_HEIGHT: u16 = 3;
const HELP_HEIGHT: u16 = 1;
const FORM_WIDTH: u16 = 44;
const MASK: char = '*';

const BANNER: [&str; 5] = [
    r" _                 _            ",
    r"| |__   __ _ _ __ | |_ ___ _ __ ",
    r"| '_ \ / _` | '_ \| __/ _ \ '__|",
    r"| |_) | (_| | | | | ||  __/ |   ",
    r"|_.__/ \__,_|_| |_|\__\___|_|   ",
];

/// Which auth screen is being drawn.
#[derive(Debug, Clone, Copy)]
pub enum Screen {
    /// The login form.
    Login,
    /// The registration form.
    Register,
}

/// Render an auth form centered in `area`.
pub fn render(frame: &mut Frame, form: &AuthForm, screen: Screen, area: Rect) {
    let (title, help) = match screen {
        Screen::Login => (" banter | log in ", "[enter] log in  [esc] register  [ctrl-c] quit"),
        Screen::Register => {
            (" banter | register ", "[enter] create account  [esc] back  [ctrl-c] quit")
        },
    };

    let form_area = super::centered(area, FORM_WIDTH, FIELD_HEIGHT * 2 + HELP_HEIGHT + 2);
    render_banner(frame, area, form_area);

    let outer = Block::default().borders(Borders::ALL).title(title);
    let inner = outer.inner(form_area);
    frame.render_widget(outer, form_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(HELP_HEIGHT),
        ])
        .split(inner);

    let [username_area, password_area, help_area] = chunks.as_ref() else {
        return;
    };

    let focus_username = form.focus == AuthField::Username;
    render_field(frame, " username ", &form.username, focus_username, false, *username_area);
    render_field(frame, " password ", &form.password, !focus_username, true, *password_area);

    let help_line =
        Paragraph::new(Line::from(help)).style(Style::default().fg(Color::DarkGray)).centered();
    frame.render_widget(help_line, *help_area);
}

/// Render the name banner above the form when the screen is tall enough.
fn render_banner(frame: &mut Frame, area: Rect, form_area: Rect) {
    let banner_height = BANNER.len() as u16;
    if form_area.y < area.y.saturating_add(banner_height).saturating_add(1) {
        return;
    }

    let banner_area = Rect {
        x: area.x,
        y: form_area.y - banner_height - 1,
        width: area.width,
        height: banner_height,
    };
    let lines: Vec<Line> = BANNER.iter().map(|l| Line::from(*l)).collect();
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().fg(Color::Cyan)).centered(),
        banner_area,
    );
}

/// Render one bordered input field; the focused field gets the cursor.
fn render_field(
    frame: &mut Frame,
    title: &str,
    field: &TextField,
    focused: bool,
    masked: bool,
    area: Rect,
) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default().borders(Borders::ALL).title(title).border_style(border_style);

    let shown = if masked {
        MASK.to_string().repeat(field.text().chars().count())
    } else {
        field.text().to_owned()
    };
    frame.render_widget(Paragraph::new(shown).block(block), area);

    if focused {
        set_cursor_in_field(frame, field, area);
    }
}

/// Place the terminal cursor at the field's edit position.
fn set_cursor_in_field(frame: &mut Frame, field: &TextField, area: Rect) {
    const BORDER: u16 = 1;

    let available = area.width.saturating_sub(BORDER * 2).saturating_sub(1);
    let offset = u16::try_from(field.cursor()).unwrap_or(u16::MAX).min(available);
    let x = area.x.saturating_add(BORDER).saturating_add(offset);
    let y = area.y.saturating_add(BORDER);
    frame.set_cursor_position((x, y));
}
