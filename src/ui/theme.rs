//! Theme and styling configuration.
//!
//! The palette follows the issue tracker's web client: a blue accent for the
//! navigation bar and table header, light grey separators.

use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the application.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary accent (navigation tabs, table header).
    pub accent: Color,
    /// Text drawn on top of the accent color.
    pub on_accent: Color,
    /// Regular foreground text.
    pub fg: Color,
    /// De-emphasized text (placeholders, hints).
    pub muted: Color,
    /// Borders of unfocused elements.
    pub border: Color,
    /// Focused input fields.
    pub focus: Color,
    /// Selected table row background.
    pub selection_bg: Color,
    /// Success messages.
    pub success: Color,
    /// Error messages.
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(0x00, 0x7b, 0xff),
            on_accent: Color::White,
            fg: Color::Reset,
            muted: Color::DarkGray,
            border: Color::Rgb(0xce, 0xd4, 0xda),
            focus: Color::Yellow,
            selection_bg: Color::DarkGray,
            success: Color::Green,
            error: Color::Red,
        }
    }
}

impl Theme {
    /// Style for the header row and active tab.
    pub fn header(&self) -> Style {
        Style::default()
            .fg(self.on_accent)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for inactive navigation tabs.
    pub fn tab(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for hint and placeholder text.
    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

static THEME: OnceLock<Theme> = OnceLock::new();

/// Get the active theme.
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}
