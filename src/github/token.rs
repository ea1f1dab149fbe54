//! Token discovery across configuration, environment, and the token file.

use camino::Utf8Path;

use super::error::WorkflowError;
use super::locator::PersonalAccessToken;
use crate::workspace::read_optional;

/// Environment variables consulted, in order, when no token is configured.
pub const TOKEN_ENV_VARS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];

/// File in the working directory consulted after the environment.
pub const TOKEN_FILE: &str = ".github_token";

/// Resolves a token from configuration, then the environment, then
/// [`TOKEN_FILE`].
///
/// Blank values at any stage are skipped.
///
/// # Errors
///
/// Returns [`WorkflowError::MissingToken`] when no source yields a value and
/// [`WorkflowError::Io`] when the token file exists but cannot be read.
pub fn resolve_token(configured: Option<&str>) -> Result<PersonalAccessToken, WorkflowError> {
    resolve_token_from(
        configured,
        |name| std::env::var(name).ok(),
        Utf8Path::new(TOKEN_FILE),
    )
}

/// Resolves a token using an injectable environment lookup and token file.
///
/// # Errors
///
/// See [`resolve_token`].
pub fn resolve_token_from(
    configured: Option<&str>,
    lookup_env: impl Fn(&str) -> Option<String>,
    token_file: &Utf8Path,
) -> Result<PersonalAccessToken, WorkflowError> {
    let from_config = configured.map(ToOwned::to_owned);
    let from_env = || TOKEN_ENV_VARS.iter().find_map(|name| non_blank(lookup_env(name)));

    if let Some(token) = non_blank(from_config).or_else(from_env) {
        return PersonalAccessToken::new(token);
    }

    match non_blank(read_optional(token_file)?) {
        Some(token) => {
            tracing::debug!(file = %token_file, "using token from file");
            PersonalAccessToken::new(token)
        }
        None => Err(WorkflowError::MissingToken),
    }
}

/// Resolves a token like [`resolve_token`], treating absence as anonymous
/// access.
///
/// # Errors
///
/// Returns [`WorkflowError::Io`] when the token file exists but cannot be
/// read.
pub fn resolve_optional_token(
    configured: Option<&str>,
) -> Result<Option<PersonalAccessToken>, WorkflowError> {
    resolve_optional_token_from(
        configured,
        |name| std::env::var(name).ok(),
        Utf8Path::new(TOKEN_FILE),
    )
}

/// Optional variant of [`resolve_token_from`].
///
/// # Errors
///
/// See [`resolve_optional_token`].
pub fn resolve_optional_token_from(
    configured: Option<&str>,
    lookup_env: impl Fn(&str) -> Option<String>,
    token_file: &Utf8Path,
) -> Result<Option<PersonalAccessToken>, WorkflowError> {
    match resolve_token_from(configured, lookup_env, token_file) {
        Ok(token) => Ok(Some(token)),
        Err(WorkflowError::MissingToken) => Ok(None),
        Err(error) => Err(error),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|token| !token.trim().is_empty())
}
