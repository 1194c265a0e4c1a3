//! Application settings configuration.

use serde::{Deserialize, Serialize};

/// Upper bound on `due_offset_days`, roughly one hundred years.
pub const MAX_DUE_OFFSET_DAYS: i64 = 36_500;

/// Application-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Event loop tick rate in milliseconds.
    pub tick_rate_ms: u64,
    /// How many days ahead new issues are due.
    pub due_offset_days: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            due_offset_days: 10,
        }
    }
}

impl Settings {
    /// Check that the settings are usable.
    pub fn validate(&self) -> Result<(), String> {
        if self.tick_rate_ms == 0 {
            return Err("tick_rate_ms must be greater than zero".to_string());
        }
        if self.due_offset_days < 0 {
            return Err("due_offset_days cannot be negative".to_string());
        }
        if self.due_offset_days > MAX_DUE_OFFSET_DAYS {
            return Err(format!(
                "due_offset_days cannot exceed {}",
                MAX_DUE_OFFSET_DAYS
            ));
        }
        Ok(())
    }
}
