//! Error mapping helpers for the GitHub gateway implementations.

use http::StatusCode;

use crate::github::error::WorkflowError;

/// Checks if a GitHub error status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

/// Checks whether the GitHub error represents a rate limit error based on the
/// HTTP status and message / documentation URL content.
pub(super) fn is_rate_limit_error(source: &octocrab::GitHubError) -> bool {
    let is_rate_limit_status = matches!(
        source.status_code,
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
    );

    let message_indicates_rate_limit = source.message.to_lowercase().contains("rate limit")
        || source
            .documentation_url
            .as_deref()
            .is_some_and(|url| url.contains("rate-limit"));

    is_rate_limit_status && message_indicates_rate_limit
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> WorkflowError {
    if let octocrab::Error::GitHub { source, .. } = error {
        if is_rate_limit_error(source) {
            return WorkflowError::RateLimitExceeded {
                message: format!("{operation} failed: {}", source.message),
            };
        }
        return map_http_error(operation, source.status_code, Some(source.message.clone()));
    }

    if is_network_error(error) {
        return WorkflowError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    WorkflowError::Api {
        message: format!("{operation} failed: {error}"),
    }
}

pub(super) fn map_http_error(
    operation: &str,
    status: StatusCode,
    maybe_message: Option<String>,
) -> WorkflowError {
    let message = maybe_message.unwrap_or_else(|| "unknown error".to_owned());
    if is_auth_failure(status) {
        WorkflowError::Authentication {
            message: format!("{operation} failed: GitHub returned {status} {message}"),
        }
    } else {
        WorkflowError::Api {
            message: format!("{operation} failed with status {status}: {message}"),
        }
    }
}

pub(crate) fn map_reqwest_error(operation: &str, error: &reqwest::Error) -> WorkflowError {
    if let Some(status) = error.status() {
        return map_http_error(operation, status, Some(error.to_string()));
    }
    if error.is_builder() {
        return WorkflowError::Api {
            message: format!("{operation} failed: {error}"),
        };
    }
    WorkflowError::Network {
        message: format!("{operation} failed: {error}"),
    }
}

/// Pulls the `message` field out of a GitHub JSON error body.
pub(super) fn extract_github_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}
