//! Search bar component for filtering schedule rows.
//!
//! The search term itself lives in `ScheduleState`; this component tracks
//! whether the bar has input focus, renders it, and highlights matches.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::schedule::ScheduleState;
use crate::ui::theme::Theme;

/// Placeholder shown when the search term is empty.
const PLACEHOLDER: &str = "Search courses...";

/// Search bar focus state.
#[derive(Debug, Clone, Default)]
pub struct SearchBar {
    /// Whether the bar is accepting input.
    active: bool,
}

impl SearchBar {
    /// Create an inactive search bar.
    pub fn new() -> Self {
        Self { active: false }
    }

    /// Give the bar input focus.
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Take input focus away.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Check if the bar has input focus.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Handle a key while active, editing the term in `state`.
    ///
    /// Enter keeps the term and leaves the bar; Esc clears it and leaves.
    /// Returns `true` if the key was consumed.
    pub fn handle_input(&mut self, key: KeyEvent, state: &mut ScheduleState) -> bool {
        if !self.active {
            return false;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => self.deactivate(),
            (KeyCode::Esc, _) => {
                state.clear_search();
                self.deactivate();
            }
            (KeyCode::Backspace, _) => {
                state.pop_search_char();
            }
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => state.clear_search(),
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                state.push_search_char(c)
            }
            _ => return false,
        }
        true
    }

    /// Render the bar into a single-line area.
    pub fn render(&self, frame: &mut Frame, area: Rect, term: &str, match_count: usize) {
        let prompt_style = if self.active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut spans = vec![Span::styled("/ ", prompt_style)];
        if term.is_empty() && !self.active {
            spans.push(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)));
        } else {
            spans.push(Span::raw(term.to_string()));
            if !term.is_empty() {
                spans.push(Span::styled(
                    format!("  [{} rows]", match_count),
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);

        if self.active {
            frame.set_cursor_position(Position::new(
                area.x + 2 + term.chars().count() as u16,
                area.y,
            ));
        }
    }
}

/// Highlight occurrences of `query` in `text`, ignoring case.
///
/// Matching runs on a lower-cased copy whose bytes are mapped back to the
/// source characters, so highlights always start and end on character
/// boundaries of `text`.
pub fn highlight_text(text: &str, query: &str, theme: &Theme) -> Line<'static> {
    if query.is_empty() {
        return Line::from(text.to_string());
    }

    // For each byte of `lowered`, the byte range of the source character.
    let mut lowered = String::with_capacity(text.len());
    let mut sources: Vec<(usize, usize)> = Vec::with_capacity(text.len());
    for (start, c) in text.char_indices() {
        let end = start + c.len_utf8();
        for lower in c.to_lowercase() {
            lowered.push(lower);
            sources.extend(std::iter::repeat((start, end)).take(lower.len_utf8()));
        }
    }

    let query_lower: String = query.chars().flat_map(char::to_lowercase).collect();
    let mut spans = Vec::new();
    let mut last_end = 0;

    for (lower_start, matched) in lowered.match_indices(&query_lower) {
        let start = sources[lower_start].0.max(last_end);
        let end = sources[lower_start + matched.len() - 1].1;
        if start >= end {
            continue;
        }
        if start > last_end {
            spans.push(Span::raw(text[last_end..start].to_string()));
        }
        spans.push(Span::styled(text[start..end].to_string(), theme.search_match));
        last_end = end;
    }

    if spans.is_empty() {
        return Line::from(text.to_string());
    }
    if last_end < text.len() {
        spans.push(Span::raw(text[last_end..].to_string()));
    }
    Line::from(spans)
}
