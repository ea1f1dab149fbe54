//! Pull request head and combined commit status calls.

use async_trait::async_trait;

use crate::github::error::WorkflowError;
use crate::github::locator::PullRequestLocator;
use crate::github::models::{ApiCombinedStatus, ApiPullRequest, CombinedStatus};

use super::error_mapping::map_octocrab_error;
use super::{OctocrabGateway, StatusGateway};

#[async_trait]
impl StatusGateway for OctocrabGateway {
    async fn head_sha(&self, locator: &PullRequestLocator) -> Result<String, WorkflowError> {
        let pull_request = self
            .client
            .get::<ApiPullRequest, _, _>(locator.pull_request_path(), None::<&()>)
            .await
            .map_err(|error| map_octocrab_error("pull request", &error))?;

        pull_request
            .head
            .and_then(|head| head.sha)
            .filter(|sha| !sha.is_empty())
            .ok_or_else(|| WorkflowError::Api {
                message: "pull request response has no head SHA".to_owned(),
            })
    }

    async fn combined_status(
        &self,
        locator: &PullRequestLocator,
        sha: &str,
    ) -> Result<CombinedStatus, WorkflowError> {
        self.client
            .get::<ApiCombinedStatus, _, _>(locator.commit_status_path(sha), None::<&()>)
            .await
            .map(CombinedStatus::from)
            .map_err(|error| map_octocrab_error("commit status", &error))
    }
}
