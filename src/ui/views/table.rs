//! Issue table view.
//!
//! Renders the issue list as a table with one row per issue. Timestamps are
//! shown as plain dates in the local time zone.

use chrono::{DateTime, Local, TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::api::Issue;
use crate::ui::theme::theme;

/// Column headers, in display order.
pub const TABLE_HEADER: [&str; 7] = ["ID", "Status", "Owner", "Created", "Effort", "Due Date", "Title"];

/// Date format used for table cells, e.g. `Mon Jan 15 2024`.
const DATE_FORMAT: &str = "%a %b %d %Y";

/// Actions returned from the table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    /// Reload the issue list from the server.
    Reload,
}

/// Format a timestamp as a date in the given time zone.
pub fn format_date<Tz>(dt: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    dt.with_timezone(tz).format(DATE_FORMAT).to_string()
}

/// Build the display cells for one issue.
pub fn issue_row_cells<Tz>(issue: &Issue, tz: &Tz) -> [String; 7]
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    [
        issue.id.to_string(),
        issue.status.clone(),
        issue.owner_name().to_string(),
        format_date(&issue.created, tz),
        issue.effort.map(|e| e.to_string()).unwrap_or_default(),
        issue
            .due
            .as_ref()
            .map(|d| format_date(d, tz))
            .unwrap_or_default(),
        issue.title.clone(),
    ]
}

/// The issue table view.
#[derive(Debug, Default)]
pub struct IssueTableView {
    state: TableState,
}

impl IssueTableView {
    /// Create a new table view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the selected row index.
    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Keep the selection valid after the issue list changed.
    pub fn sync_len(&mut self, len: usize) {
        match (self.state.selected(), len) {
            (_, 0) => self.state.select(None),
            (None, _) => self.state.select(Some(0)),
            (Some(i), len) if i >= len => self.state.select(Some(len - 1)),
            _ => {}
        }
    }

    /// Handle keyboard input.
    ///
    /// `len` is the number of issues currently displayed.
    pub fn handle_input(&mut self, key: KeyEvent, len: usize) -> Option<TableAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('r'), KeyModifiers::NONE) => return Some(TableAction::Reload),
            _ if len == 0 => {}
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
                let next = self.state.selected().map_or(0, |i| (i + 1).min(len - 1));
                self.state.select(Some(next));
            }
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => {
                let prev = self.state.selected().map_or(0, |i| i.saturating_sub(1));
                self.state.select(Some(prev));
            }
            (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => {
                self.state.select(Some(0));
            }
            (KeyCode::Char('G'), _) | (KeyCode::End, _) => {
                self.state.select(Some(len - 1));
            }
            _ => {}
        }
        None
    }

    /// Render the table of `issues`.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, issues: &[Issue]) {
        let t = theme();
        let block = Block::default()
            .title(format!(" Issues ({}) ", issues.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.border));

        if issues.is_empty() {
            let empty = Paragraph::new(vec![
                Line::raw(""),
                Line::styled("No issues to show. Press 'r' to reload.", t.muted()),
            ])
            .block(block)
            .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        self.sync_len(issues.len());

        let header = Row::new(TABLE_HEADER.iter().map(|h| Cell::from(*h)))
            .style(t.header())
            .height(1);

        let rows = issues.iter().map(|issue| {
            Row::new(issue_row_cells(issue, &Local).map(Cell::from)).style(Style::default().fg(t.fg))
        });

        let widths = [
            Constraint::Length(5),
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Length(15),
            Constraint::Length(6),
            Constraint::Length(15),
            Constraint::Min(10),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(1)
            .highlight_style(
                Style::default()
                    .bg(t.selection_bg)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_stateful_widget(table, area, &mut self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn issue(id: i64, due: Option<DateTime<Utc>>) -> Issue {
        Issue {
            id,
            title: format!("Issue {}", id),
            status: "New".to_string(),
            owner: Some("Ravan".to_string()),
            created: Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
            effort: Some(5),
            due,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_format_date() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(format_date(&dt, &Utc), "Mon Jan 15 2024");
    }

    #[test]
    fn test_format_date_respects_time_zone() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 23, 30, 0).unwrap();
        let tz = chrono::FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_date(&dt, &tz), "Tue Jan 16 2024");
    }

    #[test]
    fn test_issue_row_cells() {
        let due = Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap();
        let cells = issue_row_cells(&issue(3, Some(due)), &Utc);
        assert_eq!(
            cells,
            [
                "3".to_string(),
                "New".to_string(),
                "Ravan".to_string(),
                "Mon Jan 15 2024".to_string(),
                "5".to_string(),
                "Thu Feb 01 2024".to_string(),
                "Issue 3".to_string(),
            ]
        );
    }

    #[test]
    fn test_issue_row_cells_missing_fields() {
        let mut i = issue(4, None);
        i.owner = None;
        i.effort = None;
        let cells = issue_row_cells(&i, &Utc);
        assert_eq!(cells[2], "");
        assert_eq!(cells[4], "");
        assert_eq!(cells[5], "");
    }

    #[test]
    fn test_reload_action() {
        let mut view = IssueTableView::new();
        assert_eq!(
            view.handle_input(key(KeyCode::Char('r')), 0),
            Some(TableAction::Reload)
        );
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut view = IssueTableView::new();
        view.sync_len(3);
        assert_eq!(view.selected(), Some(0));

        view.handle_input(key(KeyCode::Char('k')), 3);
        assert_eq!(view.selected(), Some(0));

        view.handle_input(key(KeyCode::Char('j')), 3);
        view.handle_input(key(KeyCode::Down), 3);
        view.handle_input(key(KeyCode::Down), 3);
        assert_eq!(view.selected(), Some(2));

        view.handle_input(key(KeyCode::Char('g')), 3);
        assert_eq!(view.selected(), Some(0));

        view.handle_input(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT), 3);
        assert_eq!(view.selected(), Some(2));
    }

    #[test]
    fn test_sync_len_shrinks_selection() {
        let mut view = IssueTableView::new();
        view.sync_len(5);
        view.handle_input(key(KeyCode::End), 5);
        view.sync_len(2);
        assert_eq!(view.selected(), Some(1));
        view.sync_len(0);
        assert_eq!(view.selected(), None);
    }

    #[test]
    fn test_render_rows() {
        let mut view = IssueTableView::new();
        let issues = vec![issue(1, None), issue(2, None)];

        let mut terminal = Terminal::new(TestBackend::new(120, 10)).unwrap();
        terminal
            .draw(|f| view.render(f, f.area(), &issues))
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("Due Date"));
        assert!(content.contains("Issue 1"));
        assert!(content.contains("Issue 2"));
        assert!(content.contains("Issues (2)"));
    }

    #[test]
    fn test_render_empty() {
        let mut view = IssueTableView::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 6)).unwrap();
        terminal.draw(|f| view.render(f, f.area(), &[])).unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("No issues to show"));
    }
}
