//! Evidence link check operation.

use std::io::{self, Write};
use std::process::ExitCode;

use exhibit::ExhibitConfig;
use exhibit::evidence::extract;
use exhibit::github::{IssueGateway, OctocrabGateway, PullRequestLocator, WorkflowError};
use exhibit::links::{HttpLinkProbe, LinkProbe, check_links, failure_count};

use super::output::write_link_report_to;

/// Checks the evidence links of the configured pull request.
///
/// Exits with failure only in strict mode when a link fails.
///
/// # Errors
///
/// Returns [`WorkflowError::Configuration`] if required configuration is
/// missing, and gateway errors when the description cannot be fetched.
pub async fn run(config: &ExhibitConfig) -> Result<ExitCode, WorkflowError> {
    let locator = config.locator()?;
    let token = config.resolve_token()?;

    let gateway = OctocrabGateway::for_token(&token, &locator)?;
    let probe = HttpLinkProbe::new(config.link_timeout())?;
    let failures = check_description_links(&gateway, &probe, &locator, &mut io::stdout()).await?;

    if failures > 0 && config.strict {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Extracts the evidence links of the description, probes them, and writes
/// the report. Returns the number of failed links.
///
/// # Errors
///
/// Propagates gateway failures and write failures.
pub async fn check_description_links<G, P, W>(
    gateway: &G,
    probe: &P,
    locator: &PullRequestLocator,
    writer: &mut W,
) -> Result<usize, WorkflowError>
where
    G: IssueGateway,
    P: LinkProbe,
    W: Write,
{
    let issue = gateway.issue(locator).await?;
    let evidence = extract(&issue.body);
    let checks = check_links(&evidence, probe).await;
    write_link_report_to(writer, &checks)?;
    Ok(failure_count(&checks))
}
