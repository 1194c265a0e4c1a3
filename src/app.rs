//! Main application state and event loop.
//!
//! This module implements The Elm Architecture (TEA) pattern: `update` is the
//! only place state changes in response to input, `handle_api_message` applies
//! results from background tasks, and `view` renders the current state.
//!
//! Network calls are not made here. The app queues [`ApiRequest`]s that the
//! main loop collects with [`App::take_pending_requests`] and hands to the
//! task spawner.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, error, info, trace};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
};

use crate::api::{ApiError, Issue, IssueInputs};
use crate::config::Config;
use crate::error::AppError;
use crate::events::{Event, KeyContext};
use crate::tasks::{ApiMessage, ApiRequest};
use crate::ui::theme::theme;
use crate::ui::{
    render_context_help, BlacklistAction, BlacklistView, FilterView, HelpAction, HelpView,
    IssueAddAction, IssueAddView, IssueTableView, LoadingIndicator, MessageDialog, TableAction,
};

/// The sub-view shown below the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selector {
    #[default]
    Filter,
    Table,
    Add,
    Blacklist,
}

impl Selector {
    /// All selectors in navigation order.
    pub const ALL: [Selector; 4] = [
        Selector::Filter,
        Selector::Table,
        Selector::Add,
        Selector::Blacklist,
    ];

    /// Position in the navigation bar.
    pub fn index(self) -> usize {
        match self {
            Selector::Filter => 0,
            Selector::Table => 1,
            Selector::Add => 2,
            Selector::Blacklist => 3,
        }
    }

    /// Look up a selector by navigation position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Label shown in the navigation bar.
    pub fn title(self) -> &'static str {
        match self {
            Selector::Filter => "Filter",
            Selector::Table => "Issue Table",
            Selector::Add => "Add Issue",
            Selector::Blacklist => "Blacklist",
        }
    }

    /// Whether this view takes text input.
    fn is_form(self) -> bool {
        matches!(self, Selector::Add | Selector::Blacklist)
    }
}

/// The main application struct that holds all state.
pub struct App {
    selector: Selector,
    should_quit: bool,
    /// The issue list, replaced wholesale on every successful load.
    issues: Vec<Issue>,
    filter_view: FilterView,
    table_view: IssueTableView,
    add_view: IssueAddView,
    blacklist_view: BlacklistView,
    help_view: HelpView,
    show_help: bool,
    /// Blocking dialog for request outcomes and validation errors.
    dialog: MessageDialog,
    loading: LoadingIndicator,
    /// Requests queued since the main loop last collected them.
    pending: Vec<ApiRequest>,
    endpoint: String,
}

impl App {
    /// Create the application and queue the initial issue load.
    pub fn new(config: &Config) -> Self {
        debug!(endpoint = %config.endpoint, "Creating application");

        let mut app = Self {
            selector: Selector::default(),
            should_quit: false,
            issues: Vec::new(),
            filter_view: FilterView::new(),
            table_view: IssueTableView::new(),
            add_view: IssueAddView::new(config.settings.due_offset_days),
            blacklist_view: BlacklistView::new(),
            help_view: HelpView::new(),
            show_help: false,
            dialog: MessageDialog::new(),
            loading: LoadingIndicator::new(),
            pending: Vec::new(),
            endpoint: config.endpoint.clone(),
        };
        app.load_data();
        app
    }

    pub fn selector(&self) -> Selector {
        self.selector
    }

    /// Show the sub-view for `selector`.
    pub fn set_selector(&mut self, selector: Selector) {
        if self.selector != selector {
            debug!(from = ?self.selector, to = ?selector, "Switching view");
            self.selector = selector;
        }
    }

    /// The most recently loaded issues.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn dialog(&self) -> &MessageDialog {
        &self.dialog
    }

    pub fn loading(&self) -> &LoadingIndicator {
        &self.loading
    }

    pub fn add_view(&self) -> &IssueAddView {
        &self.add_view
    }

    pub fn blacklist_view(&self) -> &BlacklistView {
        &self.blacklist_view
    }

    pub fn is_help_visible(&self) -> bool {
        self.show_help
    }

    /// Queue a fetch of the full issue list.
    pub fn load_data(&mut self) {
        info!("Loading issue list");
        self.queue(ApiRequest::LoadIssues, "Loading issues...");
    }

    /// Queue creation of a new issue.
    pub fn create_issue(&mut self, inputs: IssueInputs) {
        info!(owner = %inputs.owner, title = %inputs.title, "Creating issue");
        self.queue(ApiRequest::CreateIssue(inputs), "Adding issue...");
    }

    /// Queue adding `name` to the blacklist.
    pub fn add_to_blacklist(&mut self, name: String) {
        info!(name = %name, "Adding name to blacklist");
        self.queue(ApiRequest::AddToBlacklist(name), "Updating blacklist...");
    }

    fn queue(&mut self, request: ApiRequest, message: &str) {
        self.loading.begin(message);
        self.pending.push(request);
    }

    /// Take the requests queued since the last call.
    pub fn take_pending_requests(&mut self) -> Vec<ApiRequest> {
        std::mem::take(&mut self.pending)
    }

    /// Apply the result of a finished background request.
    pub fn handle_api_message(&mut self, message: ApiMessage) {
        self.loading.finish();

        match message {
            ApiMessage::IssuesLoaded(Ok(issues)) => {
                info!(count = issues.len(), "Issue list loaded");
                self.issues = issues;
                self.table_view.sync_len(self.issues.len());
            }
            ApiMessage::IssuesLoaded(Err(e)) => {
                error!(error = %e, "Failed to load issues");
                self.show_api_error(e);
            }
            ApiMessage::IssueCreated(Ok(id)) => {
                info!(id, "Issue created");
                self.dialog.show_info("Issue Added", "Issue added successfully");
                self.load_data();
            }
            ApiMessage::IssueCreated(Err(e)) => {
                error!(error = %e, "Failed to create issue");
                self.show_api_error(e);
            }
            ApiMessage::BlacklistAdded { name, result } => {
                self.blacklist_view.finish();
                match result {
                    Ok(()) => {
                        info!(name = %name, "Added to blacklist");
                        self.dialog.show_info(
                            "Blacklist",
                            format!("Successfully added {} to blacklist", name),
                        );
                    }
                    Err(e) => {
                        error!(name = %name, error = %e, "Failed to add to blacklist");
                        self.show_api_error(e);
                    }
                }
            }
        }
    }

    fn show_api_error(&mut self, error: ApiError) {
        self.dialog.show_error(&AppError::Api(error));
    }

    /// Update the application state based on an event.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Key(key_event) => {
                trace!(key = ?key_event.code, modifiers = ?key_event.modifiers, "Key event");
                self.handle_key_event(key_event);
            }
            Event::Paste(text) => self.handle_paste(&text),
            Event::Resize(width, height) => {
                trace!(width, height, "Terminal resize event");
            }
            Event::Tick => self.loading.tick(),
        }
    }

    fn handle_paste(&mut self, text: &str) {
        if self.dialog.is_visible() || self.show_help {
            return;
        }
        match self.selector {
            Selector::Add => self.add_view.paste(text),
            Selector::Blacklist => self.blacklist_view.paste(text),
            Selector::Filter | Selector::Table => {}
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Ctrl+C always quits
        if key_event.code == KeyCode::Char('c') && key_event.modifiers == KeyModifiers::CONTROL {
            self.should_quit = true;
            return;
        }

        // The dialog blocks all other input
        if self.dialog.is_visible() {
            self.dialog.handle_input(key_event);
            return;
        }

        if self.show_help {
            if let Some(HelpAction::Close) = self.help_view.handle_input(key_event) {
                self.show_help = false;
            }
            return;
        }

        if let KeyCode::F(n @ 1..=4) = key_event.code {
            if let Some(selector) = Selector::from_index(usize::from(n) - 1) {
                self.set_selector(selector);
            }
            return;
        }

        if self.selector.is_form() {
            self.handle_form_key(key_event);
        } else {
            self.handle_browse_key(key_event);
        }
    }

    /// Keys for the filter and table views, which take no text input.
    fn handle_browse_key(&mut self, key_event: KeyEvent) {
        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => {
                self.should_quit = true;
            }
            (KeyCode::Char('?'), _) => {
                self.help_view.reset_scroll();
                self.show_help = true;
            }
            (KeyCode::Char(c @ '1'..='4'), KeyModifiers::NONE) => {
                let index = c as usize - '1' as usize;
                if let Some(selector) = Selector::from_index(index) {
                    self.set_selector(selector);
                }
            }
            (KeyCode::Tab, KeyModifiers::NONE)
            | (KeyCode::Right, _)
            | (KeyCode::Char('l'), KeyModifiers::NONE) => {
                self.set_selector(self.selector.next());
            }
            (KeyCode::BackTab, _)
            | (KeyCode::Tab, KeyModifiers::SHIFT)
            | (KeyCode::Left, _)
            | (KeyCode::Char('h'), KeyModifiers::NONE) => {
                self.set_selector(self.selector.prev());
            }
            (KeyCode::Char('r'), KeyModifiers::NONE) if self.selector == Selector::Filter => {
                self.load_data();
            }
            _ if self.selector == Selector::Table => {
                let len = self.issues.len();
                if let Some(TableAction::Reload) = self.table_view.handle_input(key_event, len) {
                    self.load_data();
                }
            }
            _ => {}
        }
    }

    /// Keys for the add issue and blacklist forms.
    fn handle_form_key(&mut self, key_event: KeyEvent) {
        match self.selector {
            Selector::Add => match self.add_view.handle_input(key_event) {
                Some(IssueAddAction::Submit(inputs)) => self.create_issue(inputs),
                Some(IssueAddAction::Invalid(msg)) => {
                    debug!(reason = %msg, "Rejected issue draft");
                    self.dialog.show_error(&AppError::validation(msg));
                }
                Some(IssueAddAction::Cancel) => self.set_selector(Selector::Table),
                None => {}
            },
            Selector::Blacklist => match self.blacklist_view.handle_input(key_event) {
                Some(BlacklistAction::Submit(name)) => self.add_to_blacklist(name),
                Some(BlacklistAction::Cancel) => self.set_selector(Selector::Table),
                None => {}
            },
            Selector::Filter | Selector::Table => {}
        }
    }

    fn key_context(&self) -> KeyContext {
        if self.dialog.is_visible() {
            KeyContext::Dialog
        } else if self.show_help {
            KeyContext::Help
        } else {
            match self.selector {
                Selector::Filter => KeyContext::Filter,
                Selector::Table => KeyContext::Table,
                Selector::Add | Selector::Blacklist => KeyContext::Form,
            }
        }
    }

    /// Render the application UI.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Navigation
                Constraint::Min(0),    // Content
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        self.render_nav(frame, chunks[0]);

        match self.selector {
            Selector::Filter => self.filter_view.render(frame, chunks[1]),
            Selector::Table => self.table_view.render(frame, chunks[1], &self.issues),
            Selector::Add => self.add_view.render(frame, chunks[1]),
            Selector::Blacklist => self.blacklist_view.render(frame, chunks[1]),
        }

        render_context_help(frame, chunks[2], self.key_context(), &self.loading.text());

        if self.show_help {
            self.help_view.render(frame, chunks[1]);
        }
        self.dialog.render(frame, area);
    }

    fn render_nav(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let endpoint_width = (self.endpoint.chars().count() as u16 + 2).min(area.width / 3);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(endpoint_width)])
            .split(area);

        let titles = Selector::ALL
            .iter()
            .enumerate()
            .map(|(i, s)| Line::from(format!("F{} {}", i + 1, s.title())));
        let tabs = Tabs::new(titles)
            .select(self.selector.index())
            .style(t.tab())
            .highlight_style(t.header())
            .divider("|");
        frame.render_widget(tabs, chunks[0]);

        frame.render_widget(
            Paragraph::new(Span::styled(self.endpoint.as_str(), t.muted())),
            chunks[1],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use ratatui::{backend::TestBackend, Terminal};

    fn test_app() -> App {
        let mut app = App::new(&Config::default());
        app.take_pending_requests();
        app.handle_api_message(ApiMessage::IssuesLoaded(Ok(Vec::new())));
        app
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.update(key(KeyCode::Char(c)));
        }
    }

    fn issue(id: i64, title: &str) -> Issue {
        Issue {
            id,
            title: title.to_string(),
            status: "New".to_string(),
            owner: Some("Ravan".to_string()),
            created: Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
            effort: Some(5),
            due: None,
        }
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_new_selects_filter_and_queues_load() {
        let mut app = App::new(&Config::default());
        assert_eq!(app.selector(), Selector::Filter);
        assert!(app.loading().is_active());
        assert_eq!(app.take_pending_requests(), vec![ApiRequest::LoadIssues]);
        assert!(app.take_pending_requests().is_empty());
    }

    #[test]
    fn test_selector_cycle() {
        assert_eq!(Selector::Filter.next(), Selector::Table);
        assert_eq!(Selector::Blacklist.next(), Selector::Filter);
        assert_eq!(Selector::Filter.prev(), Selector::Blacklist);
        assert_eq!(Selector::from_index(2), Some(Selector::Add));
        assert_eq!(Selector::from_index(4), None);
    }

    #[test]
    fn test_function_keys_select_views() {
        let mut app = test_app();
        app.update(key(KeyCode::F(3)));
        assert_eq!(app.selector(), Selector::Add);
        app.update(key(KeyCode::F(4)));
        assert_eq!(app.selector(), Selector::Blacklist);
        app.update(key(KeyCode::F(2)));
        assert_eq!(app.selector(), Selector::Table);
        app.update(key(KeyCode::F(1)));
        assert_eq!(app.selector(), Selector::Filter);
    }

    #[test]
    fn test_number_keys_select_views_outside_forms() {
        let mut app = test_app();
        app.update(key(KeyCode::Char('2')));
        assert_eq!(app.selector(), Selector::Table);
        app.update(key(KeyCode::Char('3')));
        assert_eq!(app.selector(), Selector::Add);

        // In a form, digits are text
        app.update(key(KeyCode::Char('4')));
        assert_eq!(app.selector(), Selector::Add);
        assert_eq!(app.add_view().draft().0, "4");
    }

    #[test]
    fn test_tab_cycles_views() {
        let mut app = test_app();
        app.update(key(KeyCode::Tab));
        assert_eq!(app.selector(), Selector::Table);
        app.update(key(KeyCode::BackTab));
        assert_eq!(app.selector(), Selector::Filter);
        app.update(key(KeyCode::Char('h')));
        assert_eq!(app.selector(), Selector::Blacklist);
    }

    #[test]
    fn test_escape_leaves_form_for_table() {
        let mut app = test_app();
        app.set_selector(Selector::Blacklist);
        app.update(key(KeyCode::Esc));
        assert_eq!(app.selector(), Selector::Table);
    }

    #[test]
    fn test_q_quits_only_outside_forms() {
        let mut app = test_app();
        app.set_selector(Selector::Add);
        app.update(key(KeyCode::Char('q')));
        assert!(!app.should_quit());

        app.set_selector(Selector::Table);
        app.update(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn test_ctrl_c_quits_from_form() {
        let mut app = test_app();
        app.set_selector(Selector::Add);
        app.update(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit());
    }

    #[test]
    fn test_reload_key_queues_load() {
        let mut app = test_app();
        app.set_selector(Selector::Table);
        app.update(key(KeyCode::Char('r')));
        assert_eq!(app.take_pending_requests(), vec![ApiRequest::LoadIssues]);

        app.set_selector(Selector::Filter);
        app.update(key(KeyCode::Char('r')));
        assert_eq!(app.take_pending_requests(), vec![ApiRequest::LoadIssues]);
    }

    #[test]
    fn test_issues_loaded_replaces_list() {
        let mut app = test_app();
        app.handle_api_message(ApiMessage::IssuesLoaded(Ok(vec![issue(1, "First")])));
        app.handle_api_message(ApiMessage::IssuesLoaded(Ok(vec![
            issue(2, "Second"),
            issue(3, "Third"),
        ])));
        let ids: Vec<i64> = app.issues().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert!(!app.dialog().is_visible());
    }

    #[test]
    fn test_load_failure_shows_dialog_and_keeps_list() {
        let mut app = test_app();
        app.handle_api_message(ApiMessage::IssuesLoaded(Ok(vec![issue(1, "First")])));
        app.handle_api_message(ApiMessage::IssuesLoaded(Err(ApiError::InvalidResponse(
            "connection refused".to_string(),
        ))));
        assert_eq!(app.issues().len(), 1);
        assert_eq!(app.dialog().title(), Some("Connection Error"));
        assert_eq!(
            app.dialog().message(),
            Some("Error in sending data to server: connection refused")
        );
    }

    #[test]
    fn test_add_form_submit_queues_create_and_clears() {
        let mut app = test_app();
        app.set_selector(Selector::Add);
        type_str(&mut app, "Ravan");
        app.update(key(KeyCode::Tab));
        type_str(&mut app, "Broken link");
        app.update(key(KeyCode::Enter));

        let requests = app.take_pending_requests();
        match requests.as_slice() {
            [ApiRequest::CreateIssue(inputs)] => {
                assert_eq!(inputs.owner, "Ravan");
                assert_eq!(inputs.title, "Broken link");
                assert!(inputs.effort.is_none());
            }
            other => panic!("Expected one CreateIssue, got {:?}", other),
        }
        assert!(app.add_view().is_empty());
        assert!(app.loading().is_active());
    }

    #[test]
    fn test_create_success_reloads() {
        let mut app = test_app();
        app.create_issue(IssueInputs {
            owner: "Ravan".to_string(),
            title: "Broken link".to_string(),
            effort: None,
            due: Utc::now(),
        });
        app.take_pending_requests();

        app.handle_api_message(ApiMessage::IssueCreated(Ok(7)));
        assert_eq!(app.dialog().message(), Some("Issue added successfully"));
        assert_eq!(app.take_pending_requests(), vec![ApiRequest::LoadIssues]);
    }

    #[test]
    fn test_create_failure_does_not_reload() {
        let mut app = test_app();
        app.handle_api_message(ApiMessage::IssueCreated(Err(ApiError::BadUserInput {
            message: "Invalid input(s)".to_string(),
            details: vec!["title too short".to_string()],
        })));
        assert_eq!(app.dialog().title(), Some("Server Error"));
        assert_eq!(
            app.dialog().message(),
            Some("Invalid input(s):\n title too short")
        );
        assert!(app.take_pending_requests().is_empty());
    }

    #[test]
    fn test_invalid_effort_shows_dialog_without_request() {
        let mut app = test_app();
        app.set_selector(Selector::Add);
        app.update(key(KeyCode::Tab));
        app.update(key(KeyCode::Tab));
        type_str(&mut app, "lots");
        app.update(key(KeyCode::Enter));

        assert!(app.take_pending_requests().is_empty());
        assert_eq!(app.dialog().title(), Some("Invalid Input"));
        assert_eq!(app.add_view().draft().2, "lots");
    }

    #[test]
    fn test_blacklist_flow() {
        let mut app = test_app();
        app.set_selector(Selector::Blacklist);
        type_str(&mut app, "Ravan");
        app.update(key(KeyCode::Enter));

        assert_eq!(
            app.take_pending_requests(),
            vec![ApiRequest::AddToBlacklist("Ravan".to_string())]
        );
        assert_eq!(app.blacklist_view().name(), "Ravan");

        app.handle_api_message(ApiMessage::BlacklistAdded {
            name: "Ravan".to_string(),
            result: Ok(()),
        });
        assert_eq!(app.blacklist_view().name(), "");
        assert_eq!(
            app.dialog().message(),
            Some("Successfully added Ravan to blacklist")
        );
        assert!(!app.loading().is_active());
    }

    #[test]
    fn test_blacklist_failure_clears_field() {
        let mut app = test_app();
        app.set_selector(Selector::Blacklist);
        type_str(&mut app, "Ravan");
        app.update(key(KeyCode::Enter));
        app.handle_api_message(ApiMessage::BlacklistAdded {
            name: "Ravan".to_string(),
            result: Err(ApiError::GraphQL {
                code: "INTERNAL_SERVER_ERROR".to_string(),
                message: "db down".to_string(),
            }),
        });
        assert_eq!(app.blacklist_view().name(), "");
        assert_eq!(app.dialog().message(), Some("INTERNAL_SERVER_ERROR: db down"));
    }

    #[test]
    fn test_dialog_captures_input() {
        let mut app = test_app();
        app.set_selector(Selector::Table);
        app.handle_api_message(ApiMessage::IssuesLoaded(Err(ApiError::EmptyResponse)));

        app.update(key(KeyCode::Char('q')));
        assert!(!app.should_quit());
        app.update(key(KeyCode::F(3)));
        assert_eq!(app.selector(), Selector::Table);

        app.update(key(KeyCode::Enter));
        assert!(!app.dialog().is_visible());
        app.update(key(KeyCode::F(3)));
        assert_eq!(app.selector(), Selector::Add);
    }

    #[test]
    fn test_help_toggle() {
        let mut app = test_app();
        app.update(key(KeyCode::Char('?')));
        assert!(app.is_help_visible());
        app.update(key(KeyCode::Char('2')));
        assert_eq!(app.selector(), Selector::Filter);
        app.update(key(KeyCode::Esc));
        assert!(!app.is_help_visible());
    }

    #[test]
    fn test_paste_goes_to_focused_form() {
        let mut app = test_app();
        app.update(Event::Paste("ignored".to_string()));
        app.set_selector(Selector::Blacklist);
        app.update(Event::Paste("Eddie".to_string()));
        assert_eq!(app.blacklist_view().name(), "Eddie");
    }

    #[test]
    fn test_loading_tracks_outstanding_requests() {
        let mut app = test_app();
        assert!(!app.loading().is_active());
        app.load_data();
        app.add_to_blacklist("Ravan".to_string());
        assert_eq!(app.loading().in_flight(), 2);
        app.handle_api_message(ApiMessage::IssuesLoaded(Ok(Vec::new())));
        assert!(app.loading().is_active());
        app.handle_api_message(ApiMessage::BlacklistAdded {
            name: "Ravan".to_string(),
            result: Ok(()),
        });
        assert!(!app.loading().is_active());
    }

    #[test]
    fn test_view_renders_selected_tab() {
        let mut app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(120, 20)).unwrap();

        terminal.draw(|f| app.view(f)).unwrap();
        let content = buffer_text(&terminal);
        assert!(content.contains("F1 Filter"));
        assert!(content.contains("placeholder for the issue filter"));

        app.handle_api_message(ApiMessage::IssuesLoaded(Ok(vec![issue(1, "Broken link")])));
        app.set_selector(Selector::Table);
        terminal.draw(|f| app.view(f)).unwrap();
        let content = buffer_text(&terminal);
        assert!(content.contains("Broken link"));
        assert!(content.contains("2024"));
    }
}
