//! Pull request addressing and token wrappers.

use std::num::NonZeroU64;

use url::Url;

use super::error::WorkflowError;

/// Personal access token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, WorkflowError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(WorkflowError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl std::fmt::Debug for PersonalAccessToken {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("PersonalAccessToken(***)")
    }
}

const PUBLIC_HOST: &str = "github.com";
const PUBLIC_API: &str = "https://api.github.com";

fn parse_url(input: &str) -> Result<Url, WorkflowError> {
    Url::parse(input).map_err(|error| WorkflowError::InvalidUrl(error.to_string()))
}

/// API base serving a pull request page: `api.github.com` for the public
/// host, `{scheme}://{host}[:port]/api/v3` for everything else.
fn api_base_for(page: &Url) -> Result<Url, WorkflowError> {
    let host = page
        .host_str()
        .ok_or_else(|| WorkflowError::InvalidUrl("URL must include a host".to_owned()))?;
    if host.eq_ignore_ascii_case(PUBLIC_HOST) {
        return parse_url(PUBLIC_API);
    }

    let mut base = page.clone();
    base.set_path("api/v3");
    base.set_query(None);
    base.set_fragment(None);
    Ok(base)
}

fn non_empty(segment: &str) -> Result<String, WorkflowError> {
    if segment.is_empty() {
        return Err(WorkflowError::MissingPathSegments);
    }
    Ok(segment.to_owned())
}

fn pull_number(value: u64) -> Result<NonZeroU64, WorkflowError> {
    NonZeroU64::new(value).ok_or(WorkflowError::InvalidPullRequestNumber)
}

/// A pull request on a GitHub host together with its API base.
///
/// # Example
///
/// ```
/// use exhibit::github::PullRequestLocator;
///
/// let locator = PullRequestLocator::parse("https://github.com/octo/tea/pull/65")
///     .expect("should parse pull request URL");
/// assert_eq!(locator.owner(), "octo");
/// assert_eq!(locator.number().get(), 65);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestLocator {
    api_base: Url,
    owner: String,
    repository: String,
    number: NonZeroU64,
}

impl PullRequestLocator {
    /// Parses a pull request page URL of the form
    /// `{scheme}://{host}/{owner}/{repo}/pull/{number}[/...]`.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::InvalidUrl` when parsing fails,
    /// `MissingPathSegments` when the path does not name a pull request, and
    /// `InvalidPullRequestNumber` when the number is not a positive integer.
    pub fn parse(input: &str) -> Result<Self, WorkflowError> {
        let page = parse_url(input)?;
        let segments: Vec<&str> = page
            .path_segments()
            .ok_or(WorkflowError::MissingPathSegments)?
            .collect();

        let [owner, repository, "pull", number_segment, ..] = segments.as_slice() else {
            return Err(WorkflowError::MissingPathSegments);
        };
        if number_segment.is_empty() {
            return Err(WorkflowError::MissingPathSegments);
        }
        let number = number_segment
            .parse::<u64>()
            .map_err(|_| WorkflowError::InvalidPullRequestNumber)
            .and_then(pull_number)?;

        Ok(Self {
            api_base: api_base_for(&page)?,
            owner: non_empty(owner)?,
            repository: non_empty(repository)?,
            number,
        })
    }

    /// Builds a locator on `github.com` from its parts.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::MissingPathSegments` when owner or repository
    /// is empty and `InvalidPullRequestNumber` when `number` is zero.
    pub fn from_parts(owner: &str, repository: &str, number: u64) -> Result<Self, WorkflowError> {
        Ok(Self {
            api_base: parse_url(PUBLIC_API)?,
            owner: non_empty(owner)?,
            repository: non_empty(repository)?,
            number: pull_number(number)?,
        })
    }

    /// API base URL derived from the pull request host.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &str {
        self.owner.as_str()
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &str {
        self.repository.as_str()
    }

    /// Pull request number.
    #[must_use]
    pub const fn number(&self) -> NonZeroU64 {
        self.number
    }

    fn repository_path(&self) -> String {
        format!("/repos/{}/{}", self.owner, self.repository)
    }

    pub(crate) fn issue_path(&self) -> String {
        format!("{}/issues/{}", self.repository_path(), self.number.get())
    }

    pub(crate) fn comments_path(&self) -> String {
        format!("{}/comments", self.issue_path())
    }

    pub(crate) fn pull_request_path(&self) -> String {
        format!("{}/pulls/{}", self.repository_path(), self.number.get())
    }

    pub(crate) fn commit_status_path(&self, sha: &str) -> String {
        format!("{}/commits/{sha}/status", self.repository_path())
    }

    pub(crate) fn workflow_runs_path(&self) -> String {
        format!("{}/actions/runs", self.repository_path())
    }

    pub(crate) fn run_artifacts_path(&self, run_id: u64) -> String {
        format!(
            "{}/actions/runs/{run_id}/artifacts",
            self.repository_path()
        )
    }

    pub(crate) fn repository_artifacts_path(&self) -> String {
        format!("{}/actions/artifacts", self.repository_path())
    }

    /// Absolute URL of an artifact's zip archive.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::InvalidUrl` when the URL cannot be joined.
    pub fn artifact_archive_url(&self, artifact_id: u64) -> Result<Url, WorkflowError> {
        let base = self.api_base.as_str().trim_end_matches('/');
        let joined = format!(
            "{base}{}/actions/artifacts/{artifact_id}/zip",
            self.repository_path()
        );
        Url::parse(&joined).map_err(|error| WorkflowError::InvalidUrl(error.to_string()))
    }
}
