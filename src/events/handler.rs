//! Event handler implementation.
//!
//! Polls crossterm for terminal events and converts them to application events.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};

use super::Event;

/// The default tick rate for the event loop in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 100;

/// Polls the terminal for input.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler with the given tick rate.
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Get the tick rate.
    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Poll for the next event.
    ///
    /// Blocks until an event is available or the tick rate elapses, in which
    /// case `Event::Tick` is returned.
    pub fn next(&self) -> std::io::Result<Event> {
        if !event::poll(self.tick_rate)? {
            return Ok(Event::Tick);
        }

        Ok(convert(event::read()?))
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_RATE_MS)
    }
}

/// Map a crossterm event onto an application event.
///
/// Key releases (reported on Windows) are dropped so each press is handled once.
fn convert(event: CrosstermEvent) -> Event {
    match event {
        CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => Event::Key(key),
        CrosstermEvent::Paste(text) => Event::Paste(text),
        CrosstermEvent::Resize(width, height) => Event::Resize(width, height),
        _ => Event::Tick,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_event_handler_new() {
        let handler = EventHandler::new(50);
        assert_eq!(handler.tick_rate(), Duration::from_millis(50));
    }

    #[test]
    fn test_event_handler_default() {
        let handler = EventHandler::default();
        assert_eq!(handler.tick_rate(), Duration::from_millis(DEFAULT_TICK_RATE_MS));
    }

    #[test]
    fn test_convert_key_press() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(convert(CrosstermEvent::Key(key)), Event::Key(key));
    }

    #[test]
    fn test_convert_drops_key_release() {
        let key = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(convert(CrosstermEvent::Key(key)), Event::Tick);
    }

    #[test]
    fn test_convert_paste_and_resize() {
        assert_eq!(
            convert(CrosstermEvent::Paste("Ravan".to_string())),
            Event::Paste("Ravan".to_string())
        );
        assert_eq!(convert(CrosstermEvent::Resize(80, 24)), Event::Resize(80, 24));
        assert_eq!(convert(CrosstermEvent::FocusGained), Event::Tick);
    }
}
