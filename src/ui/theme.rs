//! Theme and styling configuration.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the schedule view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Caption (table title) style.
    pub caption: Style,
    /// Header cell style.
    pub header: Style,
    /// Border color.
    pub border: Color,
    /// Style of the selected row.
    pub selected_row: Style,
    /// Style of search matches inside cells.
    pub search_match: Style,
    /// Style of the error message.
    pub error: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            caption: Style::default()
                .fg(Color::White)
                .bg(Color::Gray)
                .add_modifier(Modifier::BOLD),
            header: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0xff, 0x66, 0x00))
                .add_modifier(Modifier::BOLD),
            border: Color::DarkGray,
            selected_row: Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            search_match: Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            error: Style::default().fg(Color::Red),
        }
    }
}
