//! API error types for the GraphQL client.

use thiserror::Error;

/// GraphQL error code used by the server for input validation failures.
pub const BAD_USER_INPUT: &str = "BAD_USER_INPUT";

/// Errors that can occur when talking to the issue tracker's GraphQL endpoint.
///
/// The `Display` output of each variant is the text shown to the user in the
/// blocking message dialog.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or HTTP transport error.
    #[error("Error in sending data to server: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body could not be parsed.
    #[error("Error in sending data to server: {0}")]
    InvalidResponse(String),

    /// The server answered with a non-success status and no GraphQL payload.
    #[error("Error in sending data to server: HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The server rejected the request variables.
    #[error("{message}:\n {}", details.join("\n "))]
    BadUserInput {
        message: String,
        details: Vec<String>,
    },

    /// Any other error reported in the GraphQL `errors` array.
    #[error("{code}: {message}")]
    GraphQL { code: String, message: String },

    /// The response carried neither data nor errors.
    #[error("Empty response from server")]
    EmptyResponse,
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Check if this error was reported by the GraphQL layer rather than transport.
    pub fn is_graphql(&self) -> bool {
        matches!(self, ApiError::BadUserInput { .. } | ApiError::GraphQL { .. })
    }
}
