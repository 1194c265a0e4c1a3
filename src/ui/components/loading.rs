//! Loading indicator component.
//!
//! An animated spinner shown in the status bar while requests are in flight.

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// A loading indicator that tracks how many requests are outstanding.
#[derive(Debug, Clone)]
pub struct LoadingIndicator {
    /// The message to display.
    message: String,
    /// Current spinner frame index.
    spinner_state: usize,
    /// Number of requests in flight.
    in_flight: usize,
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingIndicator {
    /// Create an idle loading indicator.
    pub fn new() -> Self {
        Self {
            message: "Loading...".to_string(),
            spinner_state: 0,
            in_flight: 0,
        }
    }

    /// Record a new request, showing `message` while it runs.
    pub fn begin(&mut self, message: impl Into<String>) {
        self.message = message.into();
        if self.in_flight == 0 {
            self.spinner_state = 0;
        }
        self.in_flight += 1;
    }

    /// Record that a request has finished.
    pub fn finish(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Check if any request is in flight.
    pub fn is_active(&self) -> bool {
        self.in_flight > 0
    }

    /// Get the number of requests in flight.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Get the current message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Advance the spinner animation. Called on each tick.
    pub fn tick(&mut self) {
        if self.is_active() {
            self.spinner_state = (self.spinner_state + 1) % SPINNER_FRAMES.len();
        }
    }

    /// Get the current spinner frame.
    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_state]
    }

    /// Get the formatted loading text, or an empty string when idle.
    pub fn text(&self) -> String {
        if self.is_active() {
            format!("{} {}", self.spinner_frame(), self.message)
        } else {
            String::new()
        }
    }
}
