use ratatui::style::{Color, Modifier, Style};

pub const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

/// Row marker for the week whose anchor is the committed selection.
pub const SELECTED_STYLE: Style = Style::new().fg(Color::Black).bg(Color::LightYellow);

/// Row marker for the keyboard focus week; never combined with
/// `SELECTED_STYLE` on the same row.
pub const KEYBOARD_SELECTED_STYLE: Style = Style::new().fg(Color::Black).bg(Color::LightBlue);

pub const WEEK_NUMBER_STYLE: Style = Style::new().fg(Color::DarkGray);

pub const WEEKDAY_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);
