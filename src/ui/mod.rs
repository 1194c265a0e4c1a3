//! User interface components and views.
//!
//! All rendering lives here. Views own their local form state and report
//! what the user asked for through action enums; the app decides what to do.

mod components;
pub mod theme;
mod views;

pub use components::{render_context_help, LoadingIndicator, MessageDialog};
pub use views::{
    BlacklistAction, BlacklistView, FilterView, HelpAction, HelpView, IssueAddAction,
    IssueAddView, IssueTableView, TableAction,
};
