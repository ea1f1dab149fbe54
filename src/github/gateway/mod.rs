//! Gateways for the GitHub REST calls made by the workflow utilities.
//!
//! Each concern sits behind a trait so that orchestration code can be tested
//! with mocks, while [`OctocrabGateway`] performs the real HTTP requests.

mod actions;
mod client;
mod error_mapping;
mod issues;
mod status;

use async_trait::async_trait;
use octocrab::Octocrab;

use crate::github::error::WorkflowError;
use crate::github::locator::{PersonalAccessToken, PullRequestLocator};
use crate::github::models::{
    Artifact, CombinedStatus, IssueDescription, PostedComment, UpdatedIssue, WorkflowRun,
};

pub(crate) use error_mapping::map_reqwest_error;

/// Gateway for reading and writing a pull request's issue resources.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueGateway: Send + Sync {
    /// Fetch the issue view of the pull request, including its description.
    async fn issue(&self, locator: &PullRequestLocator) -> Result<IssueDescription, WorkflowError>;

    /// Replace the pull request description.
    async fn update_issue_body(
        &self,
        locator: &PullRequestLocator,
        body: &str,
    ) -> Result<UpdatedIssue, WorkflowError>;

    /// Post a new comment on the pull request.
    async fn post_comment(
        &self,
        locator: &PullRequestLocator,
        body: &str,
    ) -> Result<PostedComment, WorkflowError>;
}

/// Gateway for commit status lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusGateway: Send + Sync {
    /// Fetch the SHA of the pull request head commit.
    async fn head_sha(&self, locator: &PullRequestLocator) -> Result<String, WorkflowError>;

    /// Fetch the combined status of a commit.
    async fn combined_status(
        &self,
        locator: &PullRequestLocator,
        sha: &str,
    ) -> Result<CombinedStatus, WorkflowError>;
}

/// Gateway for GitHub Actions runs and artifacts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActionsGateway: Send + Sync {
    /// List the most recent workflow runs of the repository.
    async fn workflow_runs(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<WorkflowRun>, WorkflowError>;

    /// List the artifacts produced by a workflow run.
    async fn run_artifacts(
        &self,
        locator: &PullRequestLocator,
        run_id: u64,
    ) -> Result<Vec<Artifact>, WorkflowError>;

    /// List the most recent artifacts of the repository.
    async fn repository_artifacts(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<Artifact>, WorkflowError>;

    /// Download an artifact's zip archive.
    async fn download_artifact(
        &self,
        locator: &PullRequestLocator,
        artifact_id: u64,
    ) -> Result<Vec<u8>, WorkflowError>;
}

/// Octocrab-backed gateway implementing every GitHub trait.
///
/// JSON endpoints go through Octocrab; the artifact archive, which GitHub
/// serves as a redirect to blob storage, is fetched with `reqwest`.
pub struct OctocrabGateway {
    client: Octocrab,
    downloads: reqwest::Client,
    token: Option<PersonalAccessToken>,
}

impl OctocrabGateway {
    /// Builds a gateway for the given token and pull request locator.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::InvalidUrl` when the base URI cannot be parsed
    /// or `WorkflowError::Api` when a client fails to build.
    pub fn for_token(
        token: &PersonalAccessToken,
        locator: &PullRequestLocator,
    ) -> Result<Self, WorkflowError> {
        Self::new(Some(token), locator)
    }

    /// Builds a gateway that authenticates only when a token is given.
    ///
    /// Unauthenticated requests are subject to GitHub's anonymous rate limit
    /// and can only see public repositories.
    ///
    /// # Errors
    ///
    /// See [`OctocrabGateway::for_token`].
    pub fn new(
        token: Option<&PersonalAccessToken>,
        locator: &PullRequestLocator,
    ) -> Result<Self, WorkflowError> {
        Ok(Self {
            client: client::build_octocrab_client(token, locator.api_base().as_str())?,
            downloads: client::build_download_client()?,
            token: token.cloned(),
        })
    }
}
