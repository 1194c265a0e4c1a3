//! Help overlay listing the keyboard shortcuts.
//!
//! Opened with '?' from the filter and table views; closed with '?', 'q' or
//! Escape. Scrolls when the terminal is too short to show every section.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::components::centered_rect;
use crate::ui::theme::theme;

/// Shortcut sections shown in the overlay, as (section, [(keys, description)]).
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("F1-F4", "Filter / Table / Add / Blacklist"),
            ("1-4", "Select view (outside forms)"),
            ("Tab / l / →", "Next view"),
            ("S-Tab / h / ←", "Previous view"),
            ("Ctrl+C", "Quit"),
            ("q", "Quit (outside forms)"),
        ],
    ),
    (
        "Issue Table",
        &[
            ("j / ↓", "Select next issue"),
            ("k / ↑", "Select previous issue"),
            ("g / G", "First / last issue"),
            ("r", "Reload issues"),
        ],
    ),
    (
        "Forms",
        &[
            ("Tab / ↓", "Next field"),
            ("S-Tab / ↑", "Previous field"),
            ("Enter", "Submit"),
            ("Esc", "Back to the issue table"),
            ("Ctrl+U", "Clear field"),
            ("Ctrl+W", "Delete word"),
        ],
    ),
];

/// Actions returned from the help overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpAction {
    Close,
}

/// The help overlay.
#[derive(Debug, Default)]
pub struct HelpView {
    scroll: u16,
    /// Visible height from the last render.
    visible_height: u16,
}

impl HelpView {
    pub fn new() -> Self {
        Self::default()
    }

    fn total_lines() -> u16 {
        // Header and blank line per section, plus the footer.
        SECTIONS
            .iter()
            .map(|(_, keys)| keys.len() as u16 + 2)
            .sum::<u16>()
            + 1
    }

    fn max_scroll(&self) -> u16 {
        Self::total_lines().saturating_sub(self.visible_height)
    }

    /// Scroll back to the top, for reopening.
    pub fn reset_scroll(&mut self) {
        self.scroll = 0;
    }

    /// Handle keyboard input. All keys are consumed while open.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<HelpAction> {
        match key.code {
            KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc => Some(HelpAction::Close),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll = (self.scroll + 1).min(self.max_scroll());
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            _ => None,
        }
    }

    fn content_lines() -> Vec<Line<'static>> {
        let t = theme();
        let mut lines = Vec::new();

        for (section, keys) in SECTIONS {
            lines.push(Line::from(Span::styled(
                format!("── {} ──", section),
                Style::default().fg(t.focus).add_modifier(Modifier::BOLD),
            )));
            for (key, description) in keys.iter() {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{:>14}", key),
                        Style::default().fg(t.success).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::raw(*description),
                ]));
            }
            lines.push(Line::raw(""));
        }

        lines.push(Line::styled("Press ?, q, or Esc to close", t.muted()));
        lines
    }

    /// Render the overlay centered over `area`.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let popup = centered_rect(area, 56, Self::total_lines() + 2);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Help - Keyboard Shortcuts ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.accent));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        self.visible_height = inner.height;
        self.scroll = self.scroll.min(self.max_scroll());

        let paragraph = Paragraph::new(Self::content_lines()).scroll((self.scroll, 0));
        frame.render_widget(paragraph, inner);
    }
}
