//! Contextual help bar component.
//!
//! Displays context-sensitive keyboard shortcut hints at the bottom of the screen.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::events::{get_context_hints, KeyContext};

/// Render a single line of key hints for the given context.
pub fn render_context_help(frame: &mut Frame, area: Rect, context: KeyContext) {
    render_help_line(frame, area, get_context_hints(context), None);
}

/// Render hints with an optional right-hand status suffix.
pub fn render_help_line(frame: &mut Frame, area: Rect, hints: &str, status: Option<String>) {
    let mut spans = parse_hints_to_spans(hints);
    if let Some(status) = status {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(status, Style::default().fg(Color::Yellow)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Parse hint text into styled spans.
///
/// Highlights the key portion (in brackets) differently from the description.
fn parse_hints_to_spans(hints: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut current = String::new();
    let mut in_bracket = false;

    for c in hints.chars() {
        match c {
            '[' => {
                if !current.is_empty() {
                    spans.push(Span::styled(
                        current.clone(),
                        Style::default().fg(Color::DarkGray),
                    ));
                    current.clear();
                }
                in_bracket = true;
                current.push(c);
            }
            ']' => {
                current.push(c);
                if in_bracket {
                    spans.push(Span::styled(
                        current.clone(),
                        Style::default().fg(Color::Cyan),
                    ));
                    current.clear();
                    in_bracket = false;
                }
            }
            _ => {
                current.push(c);
            }
        }
    }

    if !current.is_empty() {
        spans.push(Span::styled(current, Style::default().fg(Color::DarkGray)));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hints_to_spans_multiple_keys() {
        let spans = parse_hints_to_spans("[h] previous  [l] next");
        // [h], " previous  ", [l], " next"
        assert_eq!(spans.len(), 4);
        assert_eq!(spans[0].content, "[h]");
        assert_eq!(spans[0].style.fg, Some(Color::Cyan));
        assert_eq!(spans[3].content, " next");
    }

    #[test]
    fn test_parse_hints_to_spans_empty() {
        assert!(parse_hints_to_spans("").is_empty());
    }

    #[test]
    fn test_parse_hints_to_spans_no_brackets() {
        assert_eq!(parse_hints_to_spans("just text").len(), 1);
    }
}
