//! Async task management for non-blocking API operations.
//!
//! Network calls run on background tokio tasks while the UI keeps rendering.
//! Results are sent back through an unbounded channel that the main loop
//! drains with `try_recv()` on every iteration:
//! 1. `App` queues an [`ApiRequest`] in response to user input
//! 2. The main loop hands it to [`TaskSpawner::spawn`]
//! 3. The spawned task sends an [`ApiMessage`] when the call finishes
//! 4. The main loop passes the message to `App::handle_api_message`

use tokio::sync::mpsc;
use tracing::debug;

use crate::api::{ApiError, GraphQLClient, Issue, IssueId, IssueInputs};

/// A network operation requested by the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    /// Load the full issue list.
    LoadIssues,
    /// Create a new issue.
    CreateIssue(IssueInputs),
    /// Add a name to the blacklist.
    AddToBlacklist(String),
}

/// Messages sent from background tasks to the main event loop.
#[derive(Debug)]
pub enum ApiMessage {
    /// Issue list fetched.
    IssuesLoaded(Result<Vec<Issue>, ApiError>),

    /// Issue creation finished.
    IssueCreated(Result<IssueId, ApiError>),

    /// Blacklist addition finished.
    BlacklistAdded {
        name: String,
        result: Result<(), ApiError>,
    },
}

/// Spawns background tasks for API requests.
#[derive(Clone)]
pub struct TaskSpawner {
    tx: mpsc::UnboundedSender<ApiMessage>,
    client: GraphQLClient,
}

impl TaskSpawner {
    /// Create a new TaskSpawner with the given channel sender and client.
    pub fn new(tx: mpsc::UnboundedSender<ApiMessage>, client: GraphQLClient) -> Self {
        Self { tx, client }
    }

    /// Spawn the task for a queued request.
    pub fn spawn(&self, request: ApiRequest) {
        debug!(?request, "Spawning API task");
        match request {
            ApiRequest::LoadIssues => self.spawn_load_issues(),
            ApiRequest::CreateIssue(inputs) => self.spawn_create_issue(inputs),
            ApiRequest::AddToBlacklist(name) => self.spawn_add_to_blacklist(name),
        }
    }

    /// Spawn a task to fetch the issue list.
    pub fn spawn_load_issues(&self) {
        let tx = self.tx.clone();
        let client = self.client.clone();
        tokio::spawn(async move {
            let result = client.list_issues().await;
            let _ = tx.send(ApiMessage::IssuesLoaded(result));
        });
    }

    /// Spawn a task to create an issue.
    pub fn spawn_create_issue(&self, inputs: IssueInputs) {
        let tx = self.tx.clone();
        let client = self.client.clone();
        tokio::spawn(async move {
            let result = client.add_issue(&inputs).await;
            let _ = tx.send(ApiMessage::IssueCreated(result));
        });
    }

    /// Spawn a task to add a name to the blacklist.
    pub fn spawn_add_to_blacklist(&self, name: String) {
        let tx = self.tx.clone();
        let client = self.client.clone();
        tokio::spawn(async move {
            let result = client.add_to_blacklist(&name).await;
            let _ = tx.send(ApiMessage::BlacklistAdded { name, result });
        });
    }
}

/// Create a new task channel and spawner.
///
/// Returns a tuple of (receiver, spawner). The receiver should be polled
/// in the main event loop, and the spawner should be used to spawn tasks.
pub fn create_task_channel(
    client: GraphQLClient,
) -> (mpsc::UnboundedReceiver<ApiMessage>, TaskSpawner) {
    let (tx, rx) = mpsc::unbounded_channel();
    (rx, TaskSpawner::new(tx, client))
}
