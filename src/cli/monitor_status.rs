//! Commit status monitoring operation.

use std::io;
use std::process::ExitCode;

use exhibit::ExhibitConfig;
use exhibit::github::{OctocrabGateway, WorkflowError};
use exhibit::monitor::{PollOutcome, StatusMonitor, TimestampedLog};
use exhibit::workspace::LineLog;

/// Polls the combined status of the configured pull request.
///
/// A token is optional here; public repositories can be polled
/// anonymously. Without `--once` this runs until interrupted. With it, the
/// process fails when the head commit or its status could not be fetched.
///
/// # Errors
///
/// Returns [`WorkflowError::Configuration`] if required configuration is
/// missing and [`WorkflowError::Io`] when the log cannot be written.
pub async fn run(config: &ExhibitConfig) -> Result<ExitCode, WorkflowError> {
    let locator = config.locator()?;
    let token = config.optional_token()?;
    if token.is_none() {
        tracing::info!("no GitHub token found; polling anonymously");
    }
    let log = LineLog::open(&config.monitor_log_path(locator.number().get()))?;

    let gateway = OctocrabGateway::new(token.as_ref(), &locator)?;
    let mut sink = TimestampedLog::new(log, io::stdout());
    let mut monitor = StatusMonitor::new(&gateway, locator);

    match monitor
        .run(&mut sink, config.poll_interval(), config.once)
        .await?
    {
        PollOutcome::Reported(_) => Ok(ExitCode::SUCCESS),
        PollOutcome::Failed => Ok(ExitCode::FAILURE),
    }
}
