//! Client construction helpers for gateway implementations.

use http::Uri;
use octocrab::Octocrab;

use crate::github::error::WorkflowError;
use crate::github::locator::PersonalAccessToken;

use super::error_mapping::{map_octocrab_error, map_reqwest_error};

/// User agent sent with archive downloads.
pub(super) const USER_AGENT: &str = concat!("exhibit/", env!("CARGO_PKG_VERSION"));

/// Builds an Octocrab client for the API base URL, authenticated when a
/// token is given.
///
/// # Errors
///
/// Returns `WorkflowError::InvalidUrl` when the base URI cannot be parsed or
/// `WorkflowError::Api` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: Option<&PersonalAccessToken>,
    api_base: &str,
) -> Result<Octocrab, WorkflowError> {
    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| WorkflowError::InvalidUrl(error.to_string()))?;

    let mut builder = Octocrab::builder()
        .base_uri(base_uri)
        .map_err(|error| WorkflowError::Api {
            message: format!("build client failed: {error}"),
        })?;
    if let Some(token) = token {
        builder = builder.personal_token(token.value());
    }
    builder
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}

/// Builds the `reqwest` client used for artifact archive downloads.
pub(super) fn build_download_client() -> Result<reqwest::Client, WorkflowError> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|error| map_reqwest_error("build download client", &error))
}
