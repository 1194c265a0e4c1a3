//! Key hint definitions.

/// The input context that determines which key hints are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// The filter placeholder view.
    Filter,
    /// The issue table.
    Table,
    /// A text-entry form (add issue or blacklist).
    Form,
    /// A message dialog is open.
    Dialog,
    /// The help overlay is open.
    Help,
}

/// Get the key hints for a context.
///
/// Keys are wrapped in brackets so the help bar can style them.
pub fn get_context_hints(context: KeyContext) -> &'static str {
    match context {
        KeyContext::Filter => "[1-4] view  [Tab] next view  [r] reload  [?] help  [q] quit",
        KeyContext::Table => {
            "[j/k] select  [1-4] view  [Tab] next view  [r] reload  [?] help  [q] quit"
        }
        KeyContext::Form => "[Tab/↓] next field  [↑] previous field  [Enter] submit  [Esc] back  [F1-F4] view",
        KeyContext::Dialog => "[Enter/Esc] dismiss",
        KeyContext::Help => "[Esc/?] close help",
    }
}
