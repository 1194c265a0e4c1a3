//! Blacklist form.
//!
//! A single owner name field. Unlike the add issue form, the name stays in
//! place until the request completes, then it is cleared either way.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::add_issue::render_submit_button;
use crate::ui::components::TextInput;
use crate::ui::theme::theme;

/// Actions returned from the blacklist form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlacklistAction {
    /// Add this name to the blacklist.
    Submit(String),
    /// Leave the form.
    Cancel,
}

/// The blacklist form.
#[derive(Debug)]
pub struct BlacklistView {
    name: TextInput,
    submit_focused: bool,
    /// Set while a request for the current name is outstanding.
    submitting: bool,
}

impl Default for BlacklistView {
    fn default() -> Self {
        Self::new()
    }
}

impl BlacklistView {
    pub fn new() -> Self {
        Self {
            name: TextInput::with_placeholder("Name"),
            submit_focused: false,
            submitting: false,
        }
    }

    /// Get the current name.
    pub fn name(&self) -> &str {
        self.name.value()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Insert pasted text into the name field.
    pub fn paste(&mut self, text: &str) {
        if !self.submit_focused && !self.submitting {
            self.name.insert_str(text);
        }
    }

    /// Mark the outstanding request as complete and clear the field.
    pub fn finish(&mut self) {
        self.name.clear();
        self.submitting = false;
        self.submit_focused = false;
    }

    /// Handle keyboard input.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<BlacklistAction> {
        match key.code {
            KeyCode::Esc => Some(BlacklistAction::Cancel),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
                self.submit_focused = !self.submit_focused;
                None
            }
            KeyCode::Enter => {
                // One request at a time for the same draft.
                if self.submitting {
                    return None;
                }
                self.submitting = true;
                Some(BlacklistAction::Submit(self.name.value().to_string()))
            }
            _ => {
                if !self.submit_focused && !self.submitting {
                    self.name.handle_input(key);
                }
                None
            }
        }
    }

    /// Render the form.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let block = Block::default()
            .title(" Blacklist Owner ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        self.name
            .render_with_label(frame, chunks[0], "Name", !self.submit_focused);
        render_submit_button(frame, chunks[1], "Add", self.submit_focused);

        if self.submitting {
            frame.render_widget(
                Paragraph::new(Line::styled(
                    format!("Adding {} to blacklist...", self.name.value()),
                    t.muted(),
                )),
                chunks[2],
            );
        }
    }
}
