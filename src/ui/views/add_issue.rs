//! Add issue form.
//!
//! Collects owner, title and effort. On submit the draft becomes an
//! [`IssueInputs`] due a fixed number of days from now, and the fields are
//! cleared straight away.

use chrono::{DateTime, TimeDelta, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::api::IssueInputs;
use crate::ui::components::TextInput;
use crate::ui::theme::theme;

/// Actions returned from the add issue form.
#[derive(Debug, Clone, PartialEq)]
pub enum IssueAddAction {
    /// Create this issue.
    Submit(IssueInputs),
    /// The draft was rejected before sending.
    Invalid(String),
    /// Leave the form.
    Cancel,
}

/// The focusable elements of the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddField {
    #[default]
    Owner,
    Title,
    Effort,
    Submit,
}

impl AddField {
    fn next(self) -> Self {
        match self {
            AddField::Owner => AddField::Title,
            AddField::Title => AddField::Effort,
            AddField::Effort => AddField::Submit,
            AddField::Submit => AddField::Owner,
        }
    }

    fn prev(self) -> Self {
        match self {
            AddField::Owner => AddField::Submit,
            AddField::Title => AddField::Owner,
            AddField::Effort => AddField::Title,
            AddField::Submit => AddField::Effort,
        }
    }
}

/// Parse the effort field. Empty means no estimate.
fn parse_effort(raw: &str) -> Result<Option<i64>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<i64>()
        .map(Some)
        .map_err(|_| format!("Effort must be a whole number, got '{}'", raw))
}

/// The add issue form.
#[derive(Debug)]
pub struct IssueAddView {
    owner: TextInput,
    title: TextInput,
    effort: TextInput,
    focus: AddField,
    /// Days between submission and the new issue's due date.
    due_offset_days: i64,
}

impl IssueAddView {
    /// Create an empty form.
    pub fn new(due_offset_days: i64) -> Self {
        Self {
            owner: TextInput::with_placeholder("Owner"),
            title: TextInput::with_placeholder("Title"),
            effort: TextInput::with_placeholder("Effort"),
            focus: AddField::default(),
            due_offset_days,
        }
    }

    /// Get the focused element.
    pub fn focus(&self) -> AddField {
        self.focus
    }

    /// Get the draft values as (owner, title, effort).
    pub fn draft(&self) -> (&str, &str, &str) {
        (self.owner.value(), self.title.value(), self.effort.value())
    }

    /// Check whether every field is empty.
    pub fn is_empty(&self) -> bool {
        self.owner.is_empty() && self.title.is_empty() && self.effort.is_empty()
    }

    /// Clear all fields and move focus back to the first one.
    pub fn reset(&mut self) {
        self.owner.clear();
        self.title.clear();
        self.effort.clear();
        self.focus = AddField::default();
    }

    /// Insert pasted text into the focused field.
    pub fn paste(&mut self, text: &str) {
        if let Some(input) = self.focused_input() {
            input.insert_str(text);
        }
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            AddField::Owner => Some(&mut self.owner),
            AddField::Title => Some(&mut self.title),
            AddField::Effort => Some(&mut self.effort),
            AddField::Submit => None,
        }
    }

    /// Handle keyboard input.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<IssueAddAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => Some(IssueAddAction::Cancel),
            (KeyCode::Tab, KeyModifiers::NONE) | (KeyCode::Down, _) => {
                self.focus = self.focus.next();
                None
            }
            (KeyCode::BackTab, _) | (KeyCode::Tab, KeyModifiers::SHIFT) | (KeyCode::Up, _) => {
                self.focus = self.focus.prev();
                None
            }
            (KeyCode::Enter, _) => Some(self.submit_at(Utc::now())),
            _ => {
                if let Some(input) = self.focused_input() {
                    input.handle_input(key);
                }
                None
            }
        }
    }

    /// Build the issue from the draft as of `now`.
    ///
    /// A valid draft is cleared; an invalid one is kept so it can be fixed.
    pub fn submit_at(&mut self, now: DateTime<Utc>) -> IssueAddAction {
        let effort = match parse_effort(self.effort.value()) {
            Ok(effort) => effort,
            Err(msg) => {
                self.focus = AddField::Effort;
                return IssueAddAction::Invalid(msg);
            }
        };

        let Some(due) = TimeDelta::try_days(self.due_offset_days)
            .and_then(|offset| now.checked_add_signed(offset))
        else {
            return IssueAddAction::Invalid(format!(
                "Due date {} days from now is out of range",
                self.due_offset_days
            ));
        };

        let inputs = IssueInputs {
            owner: self.owner.value().to_string(),
            title: self.title.value().to_string(),
            effort,
            due,
        };

        self.reset();
        IssueAddAction::Submit(inputs)
    }

    /// Render the form.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let block = Block::default()
            .title(" Add Issue ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Owner
                Constraint::Length(3), // Title
                Constraint::Length(3), // Effort
                Constraint::Length(1), // Submit
                Constraint::Min(0),
            ])
            .split(inner);

        self.owner
            .render_with_label(frame, chunks[0], "Owner", self.focus == AddField::Owner);
        self.title
            .render_with_label(frame, chunks[1], "Title", self.focus == AddField::Title);
        self.effort
            .render_with_label(frame, chunks[2], "Effort", self.focus == AddField::Effort);

        render_submit_button(frame, chunks[3], "Submit", self.focus == AddField::Submit);
    }
}

/// Render a one-line button, highlighted when focused.
pub(super) fn render_submit_button(frame: &mut Frame, area: Rect, label: &str, focused: bool) {
    let t = theme();
    let style = if focused {
        t.header()
    } else {
        Style::default().fg(t.accent).add_modifier(Modifier::BOLD)
    };
    let button = Paragraph::new(Line::from(Span::styled(format!("[ {} ]", label), style)))
        .alignment(Alignment::Center);
    frame.render_widget(button, area);
}
