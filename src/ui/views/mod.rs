//! Application views (screens).

mod add_issue;
mod blacklist;
mod filter;
mod help;
mod table;

pub use add_issue::{IssueAddAction, IssueAddView};
pub use blacklist::{BlacklistAction, BlacklistView};
pub use filter::FilterView;
pub use help::{HelpAction, HelpView};
pub use table::{IssueTableView, TableAction};
