//! GitHub Actions workflow run and artifact calls.

use async_trait::async_trait;
use http::header::{ACCEPT, AUTHORIZATION};
use serde::Serialize;

use crate::github::error::WorkflowError;
use crate::github::locator::PullRequestLocator;
use crate::github::models::{ApiArtifacts, ApiWorkflowRuns, Artifact, WorkflowRun};

use super::error_mapping::{
    extract_github_message, map_http_error, map_octocrab_error, map_reqwest_error,
};
use super::{ActionsGateway, OctocrabGateway};

/// Page size used for every listing call.
const PER_PAGE: u8 = 50;

#[derive(Debug, Serialize)]
struct ListingParams {
    per_page: u8,
}

const LISTING: ListingParams = ListingParams { per_page: PER_PAGE };

#[async_trait]
impl ActionsGateway for OctocrabGateway {
    async fn workflow_runs(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<WorkflowRun>, WorkflowError> {
        self.client
            .get::<ApiWorkflowRuns, _, _>(locator.workflow_runs_path(), Some(&LISTING))
            .await
            .map(|runs| runs.workflow_runs.into_iter().map(WorkflowRun::from).collect())
            .map_err(|error| map_octocrab_error("workflow runs", &error))
    }

    async fn run_artifacts(
        &self,
        locator: &PullRequestLocator,
        run_id: u64,
    ) -> Result<Vec<Artifact>, WorkflowError> {
        self.client
            .get::<ApiArtifacts, _, _>(locator.run_artifacts_path(run_id), Some(&LISTING))
            .await
            .map(|listing| listing.artifacts.into_iter().map(Artifact::from).collect())
            .map_err(|error| map_octocrab_error("run artifacts", &error))
    }

    async fn repository_artifacts(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<Artifact>, WorkflowError> {
        self.client
            .get::<ApiArtifacts, _, _>(locator.repository_artifacts_path(), Some(&LISTING))
            .await
            .map(|listing| listing.artifacts.into_iter().map(Artifact::from).collect())
            .map_err(|error| map_octocrab_error("repository artifacts", &error))
    }

    async fn download_artifact(
        &self,
        locator: &PullRequestLocator,
        artifact_id: u64,
    ) -> Result<Vec<u8>, WorkflowError> {
        let url = locator.artifact_archive_url(artifact_id)?;
        tracing::debug!(%url, "downloading artifact archive");

        let mut request = self
            .downloads
            .get(url)
            .header(ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token.value()));
        }
        let response = request
            .send()
            .await
            .map_err(|error| map_reqwest_error("artifact download", &error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_http_error(
                "artifact download",
                status,
                extract_github_message(&body),
            ));
        }

        response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(|error| map_reqwest_error("artifact download", &error))
    }
}
