//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.exhibit.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `EXHIBIT_PR_URL`, `EXHIBIT_TOKEN`, and so on
//! 4. **Command-line arguments** – `--pr-url`/`-u`, `--rewrite-evidence`, ...
//!
//! Boolean switches are not read from the environment because `ortho_config`
//! does not load boolean values from it.
//!
//! # Configuration File
//!
//! ```toml
//! owner = "octocat"
//! repo = "hello-world"
//! checkbox = "unchecked"
//! log_dir = "build-ci-logs"
//! interval_seconds = 60
//! ```

use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::evidence::CheckboxState;
use crate::github::{PersonalAccessToken, PullRequestLocator, WorkflowError, token};

/// Operation selected by the boolean switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Rewrite the evidence block of the pull request description.
    RewriteEvidence,
    /// Probe the evidence links found in the description.
    CheckLinks,
    /// Download and extract the CI artifact.
    FetchArtifact,
    /// Poll the combined commit status.
    Monitor,
    /// Post a comment on the pull request.
    Comment,
}

impl OperationMode {
    const fn flag(self) -> &'static str {
        match self {
            Self::RewriteEvidence => "--rewrite-evidence",
            Self::CheckLinks => "--check-links",
            Self::FetchArtifact => "--fetch-artifact",
            Self::Monitor => "--monitor",
            Self::Comment => "--comment",
        }
    }
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use exhibit::ExhibitConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = ExhibitConfig::load().expect("failed to load configuration");
/// let mode = config.operation_mode().expect("one operation required");
/// let locator = config.locator().expect("pull request required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "EXHIBIT",
    discovery(
        dotfile_name = ".exhibit.toml",
        config_file_name = "exhibit.toml",
        app_name = "exhibit"
    )
)]
pub struct ExhibitConfig {
    /// GitHub pull request URL.
    ///
    /// Can be provided via:
    /// - CLI: `--pr-url <URL>` or `-u <URL>`
    /// - Environment: `EXHIBIT_PR_URL`
    /// - Config file: `pr_url = "..."`
    #[ortho_config(cli_short = 'u')]
    pub pr_url: Option<String>,

    /// Repository owner, used with `repo` and `pr` when no URL is given.
    #[ortho_config(cli_short = 'o')]
    pub owner: Option<String>,

    /// Repository name.
    #[ortho_config(cli_short = 'r')]
    pub repo: Option<String>,

    /// Pull request number.
    #[ortho_config(cli_short = 'p')]
    pub pr: Option<u64>,

    /// Personal access token for GitHub API authentication.
    ///
    /// When absent, `GH_TOKEN`, `GITHUB_TOKEN`, and a `.github_token` file
    /// are consulted in that order.
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Rewrites the evidence block of the pull request description.
    #[ortho_config()]
    pub rewrite_evidence: bool,

    /// Checks that evidence links resolve.
    #[ortho_config()]
    pub check_links: bool,

    /// Downloads and extracts the CI artifact.
    #[ortho_config()]
    pub fetch_artifact: bool,

    /// Monitors the combined commit status.
    #[ortho_config()]
    pub monitor: bool,

    /// Posts a comment on the pull request.
    #[ortho_config()]
    pub comment: bool,

    /// Checkbox state for rewritten items: `checked` or `unchecked`.
    #[ortho_config()]
    pub checkbox: String,

    /// JSON file mapping evidence labels to URLs.
    #[ortho_config()]
    pub urls_file: String,

    /// Prints a unified diff of the normalised bodies when a rewrite changes
    /// the description.
    #[ortho_config()]
    pub debug_diff: bool,

    /// Directory receiving request and response snapshots.
    #[ortho_config()]
    pub log_dir: String,

    /// Exits non-zero when any evidence link fails.
    #[ortho_config()]
    pub strict: bool,

    /// Timeout for each link probe, in seconds.
    #[ortho_config()]
    pub link_timeout_seconds: u64,

    /// Name of the artifact to fetch.
    #[ortho_config()]
    pub artifact_name: String,

    /// Directory the artifact is extracted into.
    #[ortho_config()]
    pub artifact_dir: String,

    /// Delay between status polls, in seconds.
    #[ortho_config()]
    pub interval_seconds: u64,

    /// Polls the status once and exits.
    #[ortho_config()]
    pub once: bool,

    /// Monitor log file; defaults to `{log_dir}/monitor_pr{n}.log`.
    #[ortho_config()]
    pub monitor_log: Option<String>,

    /// Inline comment body.
    #[ortho_config()]
    pub body: Option<String>,

    /// File holding the comment body.
    #[ortho_config()]
    pub body_file: Option<String>,

    /// Heading placed above the comment body.
    #[ortho_config()]
    pub prefix: Option<String>,
}

const DEFAULT_CHECKBOX: &str = "checked";
const DEFAULT_LOG_DIR: &str = "build-ci-logs";
const DEFAULT_URLS_FILE: &str = "build-ci-logs/e2e_urls.json";
const DEFAULT_ARTIFACT_DIR: &str = "build-ci-logs/playwright";

impl Default for ExhibitConfig {
    fn default() -> Self {
        Self {
            pr_url: None,
            owner: None,
            repo: None,
            pr: None,
            token: None,
            rewrite_evidence: false,
            check_links: false,
            fetch_artifact: false,
            monitor: false,
            comment: false,
            checkbox: DEFAULT_CHECKBOX.to_owned(),
            urls_file: DEFAULT_URLS_FILE.to_owned(),
            debug_diff: false,
            log_dir: DEFAULT_LOG_DIR.to_owned(),
            strict: false,
            link_timeout_seconds: crate::links::DEFAULT_TIMEOUT.as_secs(),
            artifact_name: crate::artifacts::DEFAULT_ARTIFACT_NAME.to_owned(),
            artifact_dir: DEFAULT_ARTIFACT_DIR.to_owned(),
            interval_seconds: crate::monitor::DEFAULT_INTERVAL.as_secs(),
            once: false,
            monitor_log: None,
            body: None,
            body_file: None,
            prefix: None,
        }
    }
}

impl ExhibitConfig {
    /// Determines the single operation selected by the switches.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Configuration`] when no switch or more than
    /// one switch is set.
    pub fn operation_mode(&self) -> Result<OperationMode, WorkflowError> {
        let selected: Vec<OperationMode> = [
            (self.rewrite_evidence, OperationMode::RewriteEvidence),
            (self.check_links, OperationMode::CheckLinks),
            (self.fetch_artifact, OperationMode::FetchArtifact),
            (self.monitor, OperationMode::Monitor),
            (self.comment, OperationMode::Comment),
        ]
        .into_iter()
        .filter_map(|(enabled, mode)| enabled.then_some(mode))
        .collect();

        match selected.as_slice() {
            [mode] => Ok(*mode),
            [] => Err(WorkflowError::Configuration {
                message: "select an operation: --rewrite-evidence, --check-links, \
                          --fetch-artifact, --monitor, or --comment"
                    .to_owned(),
            }),
            several => Err(WorkflowError::Configuration {
                message: format!(
                    "only one operation may be selected, got {}",
                    several
                        .iter()
                        .copied()
                        .map(OperationMode::flag)
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            }),
        }
    }

    /// Builds the pull request locator from the URL or owner, repo, and
    /// number. The URL wins when both are present.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::MissingPullRequest`] when neither form is
    /// complete, or the locator's own validation errors.
    pub fn locator(&self) -> Result<PullRequestLocator, WorkflowError> {
        if let Some(url) = self.pr_url.as_deref() {
            return PullRequestLocator::parse(url);
        }

        match (self.owner.as_deref(), self.repo.as_deref(), self.pr) {
            (Some(owner), Some(repository), Some(number)) => {
                PullRequestLocator::from_parts(owner, repository, number)
            }
            _ => Err(WorkflowError::MissingPullRequest),
        }
    }

    /// Resolves the token from configuration, the environment, or the
    /// token file.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::MissingToken`] when no source provides a
    /// value.
    pub fn resolve_token(&self) -> Result<PersonalAccessToken, WorkflowError> {
        token::resolve_token(self.token.as_deref())
    }

    /// Resolves the GitHub token if any source provides one.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Io`] when the token file cannot be read.
    pub fn optional_token(&self) -> Result<Option<PersonalAccessToken>, WorkflowError> {
        token::resolve_optional_token(self.token.as_deref())
    }

    /// Parses the configured checkbox state.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Configuration`] for values other than
    /// `checked` or `unchecked`.
    pub fn checkbox_state(&self) -> Result<CheckboxState, WorkflowError> {
        self.checkbox
            .parse::<CheckboxState>()
            .map_err(|error| WorkflowError::Configuration {
                message: error.to_string(),
            })
    }

    /// CI log directory.
    #[must_use]
    pub fn log_dir(&self) -> &Utf8Path {
        Utf8Path::new(&self.log_dir)
    }

    /// External evidence mapping file.
    #[must_use]
    pub fn urls_file(&self) -> &Utf8Path {
        Utf8Path::new(&self.urls_file)
    }

    /// Artifact extraction directory.
    #[must_use]
    pub fn artifact_dir(&self) -> &Utf8Path {
        Utf8Path::new(&self.artifact_dir)
    }

    /// Comment body file, when configured.
    #[must_use]
    pub fn body_file(&self) -> Option<&Utf8Path> {
        self.body_file.as_deref().map(Utf8Path::new)
    }

    /// Monitor log file for the given pull request number.
    #[must_use]
    pub fn monitor_log_path(&self, number: u64) -> Utf8PathBuf {
        self.monitor_log.as_deref().map_or_else(
            || self.log_dir().join(format!("monitor_pr{number}.log")),
            Utf8PathBuf::from,
        )
    }

    /// Timeout applied to each link probe.
    #[must_use]
    pub const fn link_timeout(&self) -> Duration {
        Duration::from_secs(self.link_timeout_seconds)
    }

    /// Delay between status polls.
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }
}

#[cfg(test)]
mod tests;
