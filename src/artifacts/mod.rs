//! Locating and unpacking GitHub Actions artifacts for a pull request.
//!
//! The artifact is looked up on the most recent `pull_request` run that
//! belongs to the pull request first, then among the repository's recent
//! artifacts. The archive is saved next to its extracted contents.

mod archive;

use camino::{Utf8Path, Utf8PathBuf};

use crate::github::{ActionsGateway, Artifact, PullRequestLocator, WorkflowError, WorkflowRun};
use crate::workspace;

pub use archive::extract_archive;

/// Default artifact name uploaded by the end-to-end workflow.
pub const DEFAULT_ARTIFACT_NAME: &str = "playwright-artifacts";

/// Suffix identifying a Playwright trace archive among extracted files.
pub const TRACE_ARCHIVE_SUFFIX: &str = "trace.zip";

/// Result of downloading and extracting an artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedArtifact {
    /// The artifact that was downloaded.
    pub artifact: Artifact,
    /// Where the raw zip archive was saved.
    pub archive_path: Utf8PathBuf,
    /// Extracted files, in archive order.
    pub extracted: Vec<Utf8PathBuf>,
}

impl FetchedArtifact {
    /// First extracted file that looks like a Playwright trace archive.
    #[must_use]
    pub fn trace_archive(&self) -> Option<&Utf8Path> {
        self.extracted
            .iter()
            .find(|path| path.as_str().ends_with(TRACE_ARCHIVE_SUFFIX))
            .map(Utf8PathBuf::as_path)
    }
}

/// Latest `pull_request` run associated with pull request `number`.
///
/// Runs are expected newest first, as GitHub lists them.
#[must_use]
pub fn latest_run_for_pull_request(runs: &[WorkflowRun], number: u64) -> Option<&WorkflowRun> {
    runs.iter().find(|run| {
        run.event == "pull_request" && run.pull_request_numbers.contains(&number)
    })
}

fn find_named(artifacts: Vec<Artifact>, name: &str) -> Option<Artifact> {
    artifacts.into_iter().find(|artifact| artifact.name == name)
}

/// Finds and downloads artifacts through an [`ActionsGateway`].
pub struct ArtifactFetcher<'client, Gateway>
where
    Gateway: ActionsGateway,
{
    gateway: &'client Gateway,
}

impl<'client, Gateway> ArtifactFetcher<'client, Gateway>
where
    Gateway: ActionsGateway,
{
    /// Creates a fetcher using the provided gateway.
    #[must_use]
    pub const fn new(gateway: &'client Gateway) -> Self {
        Self { gateway }
    }

    /// Finds the artifact called `name` for the pull request.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures from either lookup.
    pub async fn find(
        &self,
        locator: &PullRequestLocator,
        name: &str,
    ) -> Result<Option<Artifact>, WorkflowError> {
        let runs = self.gateway.workflow_runs(locator).await?;
        if let Some(run) = latest_run_for_pull_request(&runs, locator.number().get()) {
            tracing::debug!(run_id = run.id, "checking artifacts of pull request run");
            let artifacts = self.gateway.run_artifacts(locator, run.id).await?;
            if let Some(found) = find_named(artifacts, name) {
                return Ok(Some(found));
            }
        }

        tracing::debug!("falling back to repository artifact listing");
        let artifacts = self.gateway.repository_artifacts(locator).await?;
        Ok(find_named(artifacts, name))
    }

    /// Finds, downloads, and extracts the artifact called `name` into
    /// `output_dir`.
    ///
    /// Returns `Ok(None)` when no artifact with that name exists.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures, [`WorkflowError::Io`] when files cannot be
    /// written, and [`WorkflowError::Archive`] when the zip is unreadable.
    pub async fn fetch(
        &self,
        locator: &PullRequestLocator,
        name: &str,
        output_dir: &Utf8Path,
    ) -> Result<Option<FetchedArtifact>, WorkflowError> {
        let Some(artifact) = self.find(locator, name).await? else {
            return Ok(None);
        };

        let bytes = self.gateway.download_artifact(locator, artifact.id).await?;
        let archive_path = output_dir.join(format!("artifact_{}.zip", artifact.id));
        workspace::write_file(&archive_path, &bytes)?;
        let extracted = extract_archive(&bytes, output_dir)?;

        Ok(Some(FetchedArtifact {
            artifact,
            archive_path,
            extracted,
        }))
    }
}

#[cfg(test)]
mod tests;
