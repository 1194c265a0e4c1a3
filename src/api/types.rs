//! GraphQL request and response types.
//!
//! These types model the issue tracker schema: the `issueList` query and the
//! `issueAdd` / `addToBlacklist` mutations.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::dates;

/// Identifier of an issue as assigned by the server.
pub type IssueId = i64;

/// A tracked work item.
///
/// Returned by the `issueList` query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// The issue ID.
    pub id: IssueId,
    /// The issue title.
    pub title: String,
    /// Workflow status (e.g. "New", "Assigned").
    pub status: String,
    /// The issue owner, if any.
    #[serde(default)]
    pub owner: Option<String>,
    /// When the issue was created.
    #[serde(with = "dates::revived")]
    pub created: DateTime<Utc>,
    /// Estimated effort in days.
    #[serde(default)]
    pub effort: Option<i64>,
    /// Due date, if set.
    #[serde(default, with = "dates::revived_option")]
    pub due: Option<DateTime<Utc>>,
}

impl Issue {
    /// Get the owner name, or an empty string if unowned.
    pub fn owner_name(&self) -> &str {
        self.owner.as_deref().unwrap_or("")
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}: {}", self.id, self.title)
    }
}

/// Payload for the `issueAdd` mutation.
///
/// Serializes to the server's `IssueInputs` input type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueInputs {
    pub owner: String,
    pub title: String,
    pub effort: Option<i64>,
    #[serde(with = "dates::revived")]
    pub due: DateTime<Utc>,
}

/// Response data of the `issueList` query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueListData {
    pub issue_list: Vec<Issue>,
}

/// The created issue's ID, as selected by the `issueAdd` mutation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedIssue {
    pub id: IssueId,
}

/// Response data of the `issueAdd` mutation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueAddData {
    pub issue_add: CreatedIssue,
}

/// Response data of the `addToBlacklist` mutation.
///
/// The server schema varies in what it returns here, so the value is kept raw.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToBlacklistData {
    #[serde(default)]
    pub add_to_blacklist: serde_json::Value,
}

/// The body POSTed to the GraphQL endpoint.
#[derive(Debug, Serialize)]
pub struct GraphQLRequest<'a> {
    pub query: &'a str,
    pub variables: serde_json::Value,
}

/// The envelope every GraphQL response is wrapped in.
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQLError>>,
}

/// A single entry of the GraphQL `errors` array.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    #[serde(default)]
    pub extensions: Option<ErrorExtensions>,
}

/// Server-provided error metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorExtensions {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub exception: Option<ErrorException>,
}

/// Validation details attached to `BAD_USER_INPUT` errors.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorException {
    #[serde(default)]
    pub errors: Vec<String>,
}

impl GraphQLError {
    /// Get the error code, if the server supplied one.
    pub fn code(&self) -> Option<&str> {
        self.extensions.as_ref().and_then(|e| e.code.as_deref())
    }

    /// Get the validation details, or an empty slice.
    pub fn details(&self) -> &[String] {
        self.extensions
            .as_ref()
            .and_then(|e| e.exception.as_ref())
            .map(|ex| ex.errors.as_slice())
            .unwrap_or(&[])
    }
}
