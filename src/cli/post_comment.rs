//! Pull request comment operation.

use std::io;
use std::process::ExitCode;

use exhibit::github::{OctocrabGateway, WorkflowError};
use exhibit::{ExhibitConfig, comment};

use super::output::write_line_to;

/// Posts the configured comment and prints its URL.
///
/// # Errors
///
/// Returns [`WorkflowError::Configuration`] when no body or pull request is
/// configured, and gateway errors when posting fails.
pub async fn run(config: &ExhibitConfig) -> Result<ExitCode, WorkflowError> {
    let body = comment::resolve_body(config.body.as_deref(), config.body_file())?;
    let locator = config.locator()?;
    let token = config.resolve_token()?;

    let gateway = OctocrabGateway::for_token(&token, &locator)?;
    let posted = comment::post_comment(&gateway, &locator, &body, config.prefix.as_deref()).await?;

    write_line_to(
        &mut io::stdout(),
        posted.html_url.as_deref().unwrap_or("commented"),
    )?;
    Ok(ExitCode::SUCCESS)
}
