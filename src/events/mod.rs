//! Event handling for the application.
//!
//! This module handles keyboard input, terminal resizes, and ticks.

mod handler;
mod keys;

use crossterm::event::KeyEvent;

pub use handler::EventHandler;
pub use keys::{get_context_hints, KeyContext};

/// An event fed into `App::update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Text was pasted into the terminal.
    Paste(String),
    /// The terminal was resized.
    Resize(u16, u16),
    /// The tick interval elapsed without other input.
    Tick,
}
