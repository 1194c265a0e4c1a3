//! Issue filter view.
//!
//! Filtering is not implemented yet; this view only holds its place in the
//! navigation bar.

use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::theme;

/// Text shown in place of the filter controls.
pub const FILTER_PLACEHOLDER: &str = "This is a placeholder for the issue filter.";

/// The issue filter view.
#[derive(Debug, Default)]
pub struct FilterView;

impl FilterView {
    /// Create a new filter view.
    pub fn new() -> Self {
        Self
    }

    /// Render the view.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let block = Block::default()
            .title(" Filter ")
            .borders(Borders::ALL)
            .border_style(t.muted());

        let text = vec![Line::raw(""), Line::styled(FILTER_PLACEHOLDER, t.muted())];
        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, area);
    }
}
