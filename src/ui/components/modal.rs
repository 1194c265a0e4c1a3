//! Modal message dialog.
//!
//! Every request outcome the user needs to see (success confirmations and
//! errors alike) goes through this dialog. While it is visible it captures
//! all input until dismissed. Messages that arrive while one is showing are
//! queued and shown in order.

use std::collections::VecDeque;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::error::AppError;
use crate::ui::theme::theme;

/// The kind of message, which determines the dialog's color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

type Message = (MessageKind, String, String);

/// A blocking message dialog.
#[derive(Debug, Default)]
pub struct MessageDialog {
    /// The message currently shown, if any.
    current: Option<Message>,
    /// Messages waiting behind the current one.
    queued: VecDeque<Message>,
}

impl MessageDialog {
    /// Create a hidden dialog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an informational message.
    pub fn show_info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push((MessageKind::Info, title.into(), message.into()));
    }

    /// Show an error message with a custom title.
    pub fn show_error_message(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push((MessageKind::Error, title.into(), message.into()));
    }

    /// Show an application error.
    pub fn show_error(&mut self, error: &AppError) {
        self.show_error_message(error.title(), error.user_message());
    }

    fn push(&mut self, message: Message) {
        if self.current.is_none() {
            self.current = Some(message);
        } else {
            self.queued.push_back(message);
        }
    }

    /// Hide the current message, showing the next queued one if any.
    pub fn dismiss(&mut self) {
        self.current = self.queued.pop_front();
    }

    /// Number of messages waiting behind the visible one.
    pub fn queued(&self) -> usize {
        self.queued.len()
    }

    /// Check if the dialog is visible.
    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Get the kind of the visible message.
    pub fn kind(&self) -> Option<MessageKind> {
        self.current.as_ref().map(|(kind, _, _)| *kind)
    }

    /// Get the title of the visible message.
    pub fn title(&self) -> Option<&str> {
        self.current.as_ref().map(|(_, title, _)| title.as_str())
    }

    /// Get the visible message text.
    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|(_, _, message)| message.as_str())
    }

    /// Handle a key while the dialog is visible.
    ///
    /// Returns true if the dialog was dismissed.
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                self.dismiss();
                true
            }
            _ => false,
        }
    }

    /// Render the dialog centered over `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let Some((kind, title, message)) = &self.current else {
            return;
        };

        let t = theme();
        let color = match kind {
            MessageKind::Info => t.accent,
            MessageKind::Error => t.error,
        };

        let width = 60u16.min(area.width.saturating_sub(4));
        let height = dialog_height(
            message,
            width.saturating_sub(4),
            area.height.saturating_sub(2),
        );
        let dialog_area = centered_rect(area, width, height);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(1)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let body: Vec<Line> = message.lines().map(Line::raw).collect();
        frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: false }), chunks[0]);

        let footer = Paragraph::new(Span::styled("[Enter] OK", t.muted()))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[1]);
    }
}

/// Height needed to show `message` wrapped at `inner_width`, plus borders
/// and footer, capped at `max_height`.
fn dialog_height(message: &str, inner_width: u16, max_height: u16) -> u16 {
    let inner_width = usize::from(inner_width.max(1));
    let text_lines: usize = message
        .lines()
        .map(|l| (l.chars().count().max(1) + inner_width - 1) / inner_width)
        .sum::<usize>()
        .max(1);
    let height = text_lines.saturating_add(4).min(usize::from(max_height));
    u16::try_from(height).unwrap_or(max_height)
}

/// Compute a rectangle of the given size centered in `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_new_dialog_hidden() {
        let dialog = MessageDialog::new();
        assert!(!dialog.is_visible());
        assert!(dialog.message().is_none());
    }

    #[test]
    fn test_show_info() {
        let mut dialog = MessageDialog::new();
        dialog.show_info("Done", "Issue added successfully");
        assert!(dialog.is_visible());
        assert_eq!(dialog.kind(), Some(MessageKind::Info));
        assert_eq!(dialog.message(), Some("Issue added successfully"));
    }

    #[test]
    fn test_show_error_uses_user_message() {
        let mut dialog = MessageDialog::new();
        let err = AppError::Api(ApiError::GraphQL {
            code: "INTERNAL_SERVER_ERROR".to_string(),
            message: "boom".to_string(),
        });
        dialog.show_error(&err);
        assert_eq!(dialog.kind(), Some(MessageKind::Error));
        assert_eq!(dialog.title(), Some("Server Error"));
        assert_eq!(dialog.message(), Some("INTERNAL_SERVER_ERROR: boom"));
    }

    #[test]
    fn test_enter_dismisses() {
        let mut dialog = MessageDialog::new();
        dialog.show_info("Done", "ok");
        assert!(!dialog.handle_input(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)));
        assert!(dialog.is_visible());
        assert!(dialog.handle_input(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(!dialog.is_visible());
    }

    #[test]
    fn test_messages_queue_in_order() {
        let mut dialog = MessageDialog::new();
        dialog.show_info("Done", "Issue added successfully");
        dialog.show_error_message("Error", "Error in sending data to server: refused");
        assert_eq!(dialog.message(), Some("Issue added successfully"));
        assert_eq!(dialog.queued(), 1);

        dialog.dismiss();
        assert_eq!(dialog.kind(), Some(MessageKind::Error));
        assert_eq!(
            dialog.message(),
            Some("Error in sending data to server: refused")
        );

        dialog.dismiss();
        assert!(!dialog.is_visible());
    }

    #[test]
    fn test_dialog_height_wraps_lines() {
        assert_eq!(dialog_height("short", 56, 40), 5);
        assert_eq!(dialog_height(&"x".repeat(112), 56, 40), 6);
        assert_eq!(dialog_height("", 56, 40), 5);
    }

    #[test]
    fn test_dialog_height_huge_message_is_capped() {
        let body = "<p>Bad Gateway</p>\n".repeat(70_000);
        assert_eq!(dialog_height(&body, 56, 38), 38);
    }

    #[test]
    fn test_render_huge_message() {
        let mut dialog = MessageDialog::new();
        dialog.show_error_message("Request Failed", "line\n".repeat(70_000));

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| dialog.render(f, f.area())).unwrap();
        assert!(dialog.is_visible());
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(area, 60, 10);
        assert_eq!(rect, Rect::new(20, 15, 60, 10));
    }

    #[test]
    fn test_centered_rect_larger_than_area() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect(area, 60, 10);
        assert_eq!(rect, area);
    }

    #[test]
    fn test_render_shows_message() {
        let mut dialog = MessageDialog::new();
        dialog.show_info("Blacklist", "Successfully added Ravan to blacklist");

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| dialog.render(f, f.area())).unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("Successfully added Ravan to blacklist"));
        assert!(content.contains("Blacklist"));
    }
}
