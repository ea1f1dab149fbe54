//! Composition and posting of pull request comments.

use camino::Utf8Path;

use crate::github::{IssueGateway, PostedComment, PullRequestLocator, WorkflowError};
use crate::workspace;

/// Prepends an optional heading to a comment body.
///
/// # Examples
///
/// ```
/// use exhibit::comment::compose_comment;
///
/// assert_eq!(compose_comment("done", Some("## CI")), "## CI\n\ndone");
/// assert_eq!(compose_comment("done", None), "done");
/// ```
#[must_use]
pub fn compose_comment(body: &str, prefix: Option<&str>) -> String {
    match prefix.filter(|value| !value.is_empty()) {
        Some(heading) => format!("{heading}\n\n{body}"),
        None => body.to_owned(),
    }
}

/// Resolves the comment text from an inline body or a file.
///
/// An inline body takes precedence over the file.
///
/// # Errors
///
/// Returns [`WorkflowError::Configuration`] when neither source is given or
/// the file does not exist, and [`WorkflowError::Io`] when it cannot be read.
pub fn resolve_body(
    body: Option<&str>,
    body_file: Option<&Utf8Path>,
) -> Result<String, WorkflowError> {
    if let Some(text) = body.filter(|value| !value.is_empty()) {
        return Ok(text.to_owned());
    }

    let Some(path) = body_file else {
        return Err(WorkflowError::Configuration {
            message: "--body or --body-file is required".to_owned(),
        });
    };

    workspace::read_optional(path)?.ok_or_else(|| WorkflowError::Configuration {
        message: format!("comment body file '{path}' does not exist"),
    })
}

/// Posts a comment, prefixed with `prefix` when given.
///
/// # Errors
///
/// Propagates gateway failures.
pub async fn post_comment<G: IssueGateway>(
    gateway: &G,
    locator: &PullRequestLocator,
    body: &str,
    prefix: Option<&str>,
) -> Result<PostedComment, WorkflowError> {
    let text = compose_comment(body, prefix);
    tracing::debug!(
        number = locator.number().get(),
        bytes = text.len(),
        "posting pull request comment"
    );
    gateway.post_comment(locator, &text).await
}
