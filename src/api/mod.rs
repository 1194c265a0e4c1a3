//! GraphQL client and types.
//!
//! This module provides the interface for communicating with the issue
//! tracker's GraphQL endpoint.

mod client;
pub mod dates;
pub mod error;
pub mod types;

pub use client::{GraphQLClient, DEFAULT_TIMEOUT_SECS};
pub use error::ApiError;
pub use types::{Issue, IssueId, IssueInputs};
