//! Evidence block rewrite operation.

use std::io::{self, Write};
use std::process::ExitCode;

use camino::{Utf8Path, Utf8PathBuf};
use exhibit::evidence::{CheckboxState, EvidenceMap, normalize, rewrite, unified_diff};
use exhibit::github::{IssueGateway, OctocrabGateway, PullRequestLocator, WorkflowError};
use exhibit::{ExhibitConfig, workspace};

use super::output::{NO_OP_MESSAGE, write_line_to};

/// Settings for a rewrite, independent of how they were loaded.
#[derive(Debug, Clone)]
pub struct RewriteSettings {
    /// Directory receiving request and response snapshots.
    pub log_dir: Utf8PathBuf,
    /// Optional JSON file of evidence URLs keyed by label.
    pub urls_file: Utf8PathBuf,
    /// Checkbox state applied to every item.
    pub checkbox: CheckboxState,
    /// Print a unified diff of the normalised bodies before patching.
    pub debug_diff: bool,
}

impl RewriteSettings {
    /// Reads rewrite settings from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Configuration`] for an invalid checkbox value.
    pub fn from_config(config: &ExhibitConfig) -> Result<Self, WorkflowError> {
        Ok(Self {
            log_dir: config.log_dir().to_path_buf(),
            urls_file: config.urls_file().to_path_buf(),
            checkbox: config.checkbox_state()?,
            debug_diff: config.debug_diff,
        })
    }
}

/// Rewrites the evidence block of the configured pull request.
///
/// # Errors
///
/// Returns [`WorkflowError::Configuration`] if required configuration is
/// missing, and gateway or I/O errors from the rewrite itself.
pub async fn run(config: &ExhibitConfig) -> Result<ExitCode, WorkflowError> {
    let locator = config.locator()?;
    let token = config.resolve_token()?;
    let settings = RewriteSettings::from_config(config)?;

    let gateway = OctocrabGateway::for_token(&token, &locator)?;
    rewrite_description(&gateway, &locator, &settings, &mut io::stdout()).await?;
    Ok(ExitCode::SUCCESS)
}

/// Fetches the description, rewrites its evidence block, and patches it
/// when the normalised text changed.
///
/// Returns whether the description was patched.
///
/// # Errors
///
/// Propagates gateway failures and snapshot write failures.
pub async fn rewrite_description<G, W>(
    gateway: &G,
    locator: &PullRequestLocator,
    settings: &RewriteSettings,
    writer: &mut W,
) -> Result<bool, WorkflowError>
where
    G: IssueGateway,
    W: Write,
{
    let number = locator.number().get();
    let issue = gateway.issue(locator).await?;
    workspace::write_json(
        &snapshot_path(&settings.log_dir, number, "detail_for_update.json"),
        &issue.raw,
    )?;

    let supplied = load_supplied_evidence(&settings.urls_file);
    let outcome = rewrite(&issue.body, supplied.as_ref(), settings.checkbox);
    workspace::write_file(
        &snapshot_path(&settings.log_dir, number, "body_groups.md"),
        &outcome.updated,
    )?;

    if !outcome.changed {
        tracing::info!(number, "evidence block already up to date");
        write_line_to(writer, NO_OP_MESSAGE)?;
        return Ok(false);
    }

    if settings.debug_diff {
        let diff = unified_diff(
            &normalize(&issue.body),
            &normalize(&outcome.updated),
            "before",
            "after",
        );
        write_line_to(writer, diff.trim_end_matches('\n'))?;
    }

    let updated = gateway.update_issue_body(locator, &outcome.updated).await?;
    workspace::write_json(
        &snapshot_path(&settings.log_dir, number, "patch_groups_resp.json"),
        &updated.raw,
    )?;
    write_line_to(writer, updated.updated_at.as_deref().unwrap_or_default())?;
    Ok(true)
}

fn snapshot_path(log_dir: &Utf8Path, number: u64, suffix: &str) -> Utf8PathBuf {
    log_dir.join(format!("pr{number}_{suffix}"))
}

/// Loads the external evidence map; missing or unreadable files yield
/// `None`.
fn load_supplied_evidence(path: &Utf8Path) -> Option<EvidenceMap> {
    let contents = match workspace::read_optional(path) {
        Ok(Some(contents)) => contents,
        Ok(None) => {
            tracing::debug!(file = %path, "no evidence URL file");
            return None;
        }
        Err(error) => {
            tracing::warn!(file = %path, %error, "ignoring unreadable evidence URL file");
            return None;
        }
    };

    match EvidenceMap::from_json(&contents) {
        Ok(map) => Some(map),
        Err(error) => {
            tracing::warn!(file = %path, %error, "ignoring malformed evidence URL file");
            None
        }
    }
}
