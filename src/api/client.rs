//! GraphQL client implementation.
//!
//! This module provides the client for the issue tracker's GraphQL endpoint.
//! Every call is a single POST of `{query, variables}`; the response text is
//! parsed with date revival and the first reported GraphQL error, if any, is
//! turned into an [`ApiError`] whose message is ready to show to the user.

use std::time::Duration;

use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument, warn};

use super::error::{ApiError, Result, BAD_USER_INPUT};
use super::types::{
    AddToBlacklistData, GraphQLError, GraphQLRequest, GraphQLResponse, Issue, IssueAddData,
    IssueId, IssueInputs, IssueListData,
};
use crate::config::Config;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Code reported when the server omits one.
const UNKNOWN_ERROR_CODE: &str = "INTERNAL_SERVER_ERROR";

const ISSUE_LIST_QUERY: &str = r#"query {
  issueList {
    id title status owner
    created effort due
  }
}"#;

const ISSUE_ADD_MUTATION: &str = r#"mutation issueAdd($issue: IssueInputs!) {
  issueAdd(issue: $issue) {
    id
  }
}"#;

const ADD_TO_BLACKLIST_MUTATION: &str = r#"mutation addToBlacklist($nameInput: String!) {
  addToBlacklist(nameInput: $nameInput)
}"#;

/// The GraphQL client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct GraphQLClient {
    /// The HTTP client.
    client: Client,
    /// The GraphQL endpoint URL.
    endpoint: String,
}

impl GraphQLClient {
    /// Create a new client from the application configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_endpoint(&config.endpoint, Duration::from_secs(config.timeout_secs))
    }

    /// Create a new client for an explicit endpoint.
    pub fn with_endpoint(endpoint: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the full list of issues.
    #[instrument(skip(self))]
    pub async fn list_issues(&self) -> Result<Vec<Issue>> {
        let data: IssueListData = self
            .graphql_fetch(ISSUE_LIST_QUERY, serde_json::json!({}))
            .await?;
        debug!("Fetched {} issues", data.issue_list.len());
        Ok(data.issue_list)
    }

    /// Create a new issue, returning the server-assigned ID.
    #[instrument(skip(self, issue), fields(title = %issue.title))]
    pub async fn add_issue(&self, issue: &IssueInputs) -> Result<IssueId> {
        let data: IssueAddData = self
            .graphql_fetch(ISSUE_ADD_MUTATION, serde_json::json!({ "issue": issue }))
            .await?;
        info!(id = data.issue_add.id, "Issue created");
        Ok(data.issue_add.id)
    }

    /// Add a name to the server-side blacklist.
    #[instrument(skip(self))]
    pub async fn add_to_blacklist(&self, name: &str) -> Result<()> {
        let _: AddToBlacklistData = self
            .graphql_fetch(
                ADD_TO_BLACKLIST_MUTATION,
                serde_json::json!({ "nameInput": name }),
            )
            .await?;
        info!("Name added to blacklist");
        Ok(())
    }

    /// POST a query and its variables, and decode the `data` payload.
    ///
    /// The body is read as text whatever the HTTP status, since GraphQL
    /// servers report validation failures with a 400 and a regular payload.
    #[instrument(skip(self, query, variables), fields(endpoint = %self.endpoint))]
    pub async fn graphql_fetch<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T> {
        let request = GraphQLRequest { query, variables };

        let response = self
            .client
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Request failed: {}", e);
                ApiError::Network(e)
            })?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "Response received");

        parse_response(status.as_u16(), &body)
    }
}

/// Parse a GraphQL response body.
pub(crate) fn parse_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    let envelope: GraphQLResponse<T> = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(e) if !(200..300).contains(&status) => {
            warn!(status, "Non-GraphQL error response: {}", e);
            return Err(ApiError::Http {
                status,
                body: body.to_string(),
            });
        }
        Err(e) => {
            warn!("Failed to parse response: {}", e);
            return Err(ApiError::InvalidResponse(e.to_string()));
        }
    };

    if let Some(first) = envelope.errors.as_ref().and_then(|errors| errors.first()) {
        if envelope.data.is_some() {
            warn!("Discarding partial data returned alongside errors");
        }
        return Err(error_from_graphql(first));
    }

    envelope.data.ok_or(ApiError::EmptyResponse)
}

/// Convert the first GraphQL error into an [`ApiError`].
fn error_from_graphql(error: &GraphQLError) -> ApiError {
    match error.code() {
        Some(BAD_USER_INPUT) => ApiError::BadUserInput {
            message: error.message.clone(),
            details: error.details().to_vec(),
        },
        code => ApiError::GraphQL {
            code: code.unwrap_or(UNKNOWN_ERROR_CODE).to_string(),
            message: error.message.clone(),
        },
    }
}
