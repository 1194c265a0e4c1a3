//! Centralized error types for issuelist.
//!
//! This module provides a unified error hierarchy for the application with
//! user-friendly error messages. All error types use `thiserror` for
//! ergonomic error handling.

use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// API-related errors.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// IO errors (file system, etc.).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal-related errors.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Input rejected before it was sent to the server.
    #[error("{0}")]
    Validation(String),
}

impl AppError {
    /// Create a terminal error.
    pub fn terminal(msg: impl Into<String>) -> Self {
        AppError::Terminal(msg.into())
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    /// Get a user-friendly message for display.
    ///
    /// API errors already carry the text the server-facing dialog shows, so
    /// they are passed through unchanged.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find configuration directory. Please check your system settings."
                        .to_string()
                }
                ConfigError::ReadError(_) => {
                    "Could not read configuration file. Please check the file is readable."
                        .to_string()
                }
                ConfigError::ParseError(_) => {
                    "Configuration file is invalid. Please check the file format.".to_string()
                }
                ConfigError::ValidationError(msg) => format!("Configuration error: {}", msg),
            },
            AppError::Api(e) => e.to_string(),
            AppError::Io(_) => "A file operation failed. Please check file permissions.".to_string(),
            AppError::Terminal(msg) => format!("Terminal error: {}", msg),
            AppError::Validation(msg) => msg.clone(),
        }
    }

    /// Get the dialog title to use when showing this error.
    pub fn title(&self) -> &'static str {
        match self {
            AppError::Config(_) => "Configuration Error",
            AppError::Api(e) if e.is_graphql() => "Server Error",
            AppError::Api(_) => "Connection Error",
            AppError::Io(_) | AppError::Terminal(_) => "Error",
            AppError::Validation(_) => "Invalid Input",
        }
    }

    /// Check if this error is critical and prevents the application from running.
    pub fn is_critical(&self) -> bool {
        matches!(self, AppError::Config(_) | AppError::Terminal(_))
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;
