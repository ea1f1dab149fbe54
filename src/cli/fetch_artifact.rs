//! CI artifact fetch operation.

use std::io::{self, Write};
use std::process::ExitCode;

use camino::Utf8Path;
use exhibit::ExhibitConfig;
use exhibit::artifacts::ArtifactFetcher;
use exhibit::github::{ActionsGateway, OctocrabGateway, PullRequestLocator, WorkflowError};

use super::output::{write_fetch_report_to, write_line_to};

/// Downloads and extracts the configured artifact.
///
/// Lookup and download failures are reported on stdout and do not fail the
/// process, so CI jobs can continue without the artifact.
///
/// # Errors
///
/// Returns [`WorkflowError::Configuration`] if required configuration is
/// missing.
pub async fn run(config: &ExhibitConfig) -> Result<ExitCode, WorkflowError> {
    let locator = config.locator()?;
    let token = config.resolve_token()?;

    let gateway = OctocrabGateway::for_token(&token, &locator)?;
    fetch_and_report(
        &gateway,
        &locator,
        &config.artifact_name,
        config.artifact_dir(),
        &mut io::stdout(),
    )
    .await?;
    Ok(ExitCode::SUCCESS)
}

/// Fetches the artifact and writes the outcome.
///
/// # Errors
///
/// Returns [`WorkflowError::Io`] only when the report cannot be written.
pub async fn fetch_and_report<G, W>(
    gateway: &G,
    locator: &PullRequestLocator,
    name: &str,
    output_dir: &Utf8Path,
    writer: &mut W,
) -> Result<(), WorkflowError>
where
    G: ActionsGateway,
    W: Write,
{
    match ArtifactFetcher::new(gateway)
        .fetch(locator, name, output_dir)
        .await
    {
        Ok(fetched) => write_fetch_report_to(writer, fetched.as_ref()),
        Err(error) => {
            tracing::warn!(%error, artifact = name, "artifact fetch failed");
            write_line_to(writer, &format!("Error: {error}"))
        }
    }
}
