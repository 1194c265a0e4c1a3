//! Contextual help bar component.
//!
//! Displays context-sensitive keyboard shortcut hints at the bottom of the screen.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::events::{get_context_hints, KeyContext};
use crate::ui::theme::theme;

/// Render a contextual help bar for the given context.
///
/// `status` (e.g. the loading spinner) is shown at the start of the line,
/// followed by the key hints.
pub fn render_context_help(frame: &mut Frame, area: Rect, context: KeyContext, status: &str) {
    let mut spans = Vec::new();
    if !status.is_empty() {
        spans.push(Span::styled(
            format!(" {} ", status),
            Style::default().fg(theme().accent),
        ));
    }
    spans.push(Span::raw(" "));
    spans.extend(parse_hints_to_spans(get_context_hints(context)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Split hint text into spans, styling `[key]` portions with the accent color.
fn parse_hints_to_spans(hints: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut current = String::new();
    let mut in_bracket = false;

    for c in hints.chars() {
        match c {
            '[' => {
                // Flush any pending text
                if !current.is_empty() {
                    spans.push(Span::styled(current.clone(), theme().muted()));
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
                        Style::default().fg(theme().accent),
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

    // Flush any remaining text
    if !current.is_empty() {
        spans.push(Span::styled(current, theme().muted()));
    }

    spans
}
