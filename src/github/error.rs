//! Error types shared by the review workflow utilities.

use thiserror::Error;

/// Errors surfaced while resolving inputs or talking to GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkflowError {
    /// Neither a pull request URL nor owner, repository, and number were
    /// configured.
    #[error("pull request target is required (use --pr-url or --owner/--repo/--pr)")]
    MissingPullRequest,

    /// The provided URL could not be parsed.
    #[error("pull request URL is invalid: {0}")]
    InvalidUrl(String),

    /// The pull request path is incomplete.
    #[error("pull request URL must match /owner/repo/pull/<number>")]
    MissingPathSegments,

    /// The pull request number is not a valid integer.
    #[error("pull request number must be a positive integer")]
    InvalidPullRequestNumber,

    /// No token was found in configuration, the environment, or the token
    /// file.
    #[error("GitHub token not found (set GH_TOKEN, GITHUB_TOKEN, or .github_token)")]
    MissingToken,

    /// The token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub throttled the request.
    #[error("GitHub API rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Error message from GitHub.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body or status describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub or probing a link.
    #[error("network error: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// A downloaded artifact archive could not be read.
    #[error("artifact archive error: {message}")]
    Archive {
        /// Details from the zip reader.
        message: String,
    },
}

impl WorkflowError {
    pub(crate) fn io(context: &str, error: &impl std::fmt::Display) -> Self {
        Self::Io {
            message: format!("{context}: {error}"),
        }
    }
}
