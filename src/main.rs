//! Exhibit CLI entrypoint for pull request evidence workflows.

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use exhibit::{ExhibitConfig, OperationMode, WorkflowError};
use ortho_config::OrthoConfig;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "exhibit=warn";

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(code) => code,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn run() -> Result<ExitCode, WorkflowError> {
    let config = load_config()?;

    match config.operation_mode()? {
        OperationMode::RewriteEvidence => cli::rewrite_evidence::run(&config).await,
        OperationMode::CheckLinks => cli::check_links::run(&config).await,
        OperationMode::FetchArtifact => cli::fetch_artifact::run(&config).await,
        OperationMode::Monitor => cli::monitor_status::run(&config).await,
        OperationMode::Comment => cli::post_comment::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`WorkflowError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ExhibitConfig, WorkflowError> {
    ExhibitConfig::load().map_err(|error| WorkflowError::Configuration {
        message: error.to_string(),
    })
}
