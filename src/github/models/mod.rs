//! Data models for the GitHub resources the workflow utilities touch.
//!
//! Types prefixed with `Api` are internal deserialisation targets that
//! convert into public domain types.

use serde::Deserialize;
use serde_json::Value;

/// Issue view of a pull request, carrying its description.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueDescription {
    /// Issue or pull request number.
    pub number: u64,
    /// Description text; an absent body is treated as empty.
    pub body: String,
    /// HTML URL for displaying to a user.
    pub html_url: Option<String>,
    /// Last update timestamp (ISO 8601 format).
    pub updated_at: Option<String>,
    /// The full JSON payload as returned by GitHub.
    pub raw: Value,
}

/// Result of updating a pull request description.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatedIssue {
    /// Update timestamp reported by GitHub.
    pub updated_at: Option<String>,
    /// The full JSON payload as returned by GitHub.
    pub raw: Value,
}

/// A newly created issue comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedComment {
    /// Comment identifier.
    pub id: u64,
    /// HTML URL of the comment.
    pub html_url: Option<String>,
}

/// One status context reported against a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusContext {
    /// Context name, e.g. `ci/e2e`.
    pub context: String,
    /// Context state: `success`, `pending`, `failure`, or `error`.
    pub state: String,
}

/// Combined commit status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinedStatus {
    /// Combined state across all contexts.
    pub state: String,
    /// Individual contexts.
    pub statuses: Vec<StatusContext>,
}

/// A GitHub Actions workflow run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowRun {
    /// Run identifier.
    pub id: u64,
    /// Triggering event, e.g. `pull_request`.
    pub event: String,
    /// Numbers of the pull requests associated with the run.
    pub pull_request_numbers: Vec<u64>,
}

/// A GitHub Actions artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Artifact identifier.
    pub id: u64,
    /// Artifact name as uploaded by the workflow.
    pub name: String,
    /// Archive size in bytes.
    pub size_in_bytes: u64,
    /// Whether the artifact has expired and can no longer be downloaded.
    pub expired: bool,
}

const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiIssue {
    pub(super) number: u64,
    pub(super) body: Option<String>,
    pub(super) html_url: Option<String>,
    pub(super) updated_at: Option<String>,
}

impl ApiIssue {
    pub(super) fn into_description(self, raw: Value) -> IssueDescription {
        IssueDescription {
            number: self.number,
            body: self.body.unwrap_or_default(),
            html_url: self.html_url,
            updated_at: self.updated_at,
            raw,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiComment {
    pub(super) id: u64,
    pub(super) html_url: Option<String>,
}

impl From<ApiComment> for PostedComment {
    fn from(value: ApiComment) -> Self {
        Self {
            id: value.id,
            html_url: value.html_url,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiPullRequest {
    pub(super) head: Option<ApiHead>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiHead {
    pub(super) sha: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiCombinedStatus {
    pub(super) state: Option<String>,
    #[serde(default)]
    pub(super) statuses: Option<Vec<ApiStatus>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiStatus {
    pub(super) context: Option<String>,
    pub(super) state: Option<String>,
}

impl From<ApiCombinedStatus> for CombinedStatus {
    fn from(value: ApiCombinedStatus) -> Self {
        Self {
            state: value.state.unwrap_or_else(|| UNKNOWN.to_owned()),
            statuses: value
                .statuses
                .unwrap_or_default()
                .into_iter()
                .map(|status| StatusContext {
                    context: status.context.unwrap_or_else(|| UNKNOWN.to_owned()),
                    state: status.state.unwrap_or_else(|| UNKNOWN.to_owned()),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiWorkflowRuns {
    #[serde(default)]
    pub(super) workflow_runs: Vec<ApiWorkflowRun>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiWorkflowRun {
    pub(super) id: u64,
    pub(super) event: Option<String>,
    #[serde(default)]
    pub(super) pull_requests: Option<Vec<ApiRunPullRequest>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiRunPullRequest {
    pub(super) number: Option<u64>,
}

impl From<ApiWorkflowRun> for WorkflowRun {
    fn from(value: ApiWorkflowRun) -> Self {
        Self {
            id: value.id,
            event: value.event.unwrap_or_default(),
            pull_request_numbers: value
                .pull_requests
                .unwrap_or_default()
                .into_iter()
                .filter_map(|pr| pr.number)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiArtifacts {
    #[serde(default)]
    pub(super) artifacts: Vec<ApiArtifact>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiArtifact {
    pub(super) id: u64,
    pub(super) name: String,
    #[serde(default)]
    pub(super) size_in_bytes: u64,
    #[serde(default)]
    pub(super) expired: bool,
}

impl From<ApiArtifact> for Artifact {
    fn from(value: ApiArtifact) -> Self {
        Self {
            id: value.id,
            name: value.name,
            size_in_bytes: value.size_in_bytes,
            expired: value.expired,
        }
    }
}
