//! Issue description and comment calls.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::github::error::WorkflowError;
use crate::github::locator::PullRequestLocator;
use crate::github::models::{
    ApiComment, ApiIssue, IssueDescription, PostedComment, UpdatedIssue,
};

use super::error_mapping::map_octocrab_error;
use super::{IssueGateway, OctocrabGateway};

#[derive(Debug, Serialize)]
struct BodyPayload<'a> {
    body: &'a str,
}

fn decode_issue(raw: Value) -> Result<IssueDescription, WorkflowError> {
    let issue: ApiIssue =
        serde_json::from_value(raw.clone()).map_err(|error| WorkflowError::Api {
            message: format!("issue response was not understood: {error}"),
        })?;
    Ok(issue.into_description(raw))
}

#[async_trait]
impl IssueGateway for OctocrabGateway {
    async fn issue(&self, locator: &PullRequestLocator) -> Result<IssueDescription, WorkflowError> {
        tracing::debug!(path = %locator.issue_path(), "fetching issue");
        let raw = self
            .client
            .get::<Value, _, _>(locator.issue_path(), None::<&()>)
            .await
            .map_err(|error| map_octocrab_error("issue", &error))?;
        decode_issue(raw)
    }

    async fn update_issue_body(
        &self,
        locator: &PullRequestLocator,
        body: &str,
    ) -> Result<UpdatedIssue, WorkflowError> {
        tracing::debug!(path = %locator.issue_path(), bytes = body.len(), "updating issue body");
        let raw: Value = self
            .client
            .patch(locator.issue_path(), Some(&BodyPayload { body }))
            .await
            .map_err(|error| map_octocrab_error("update issue body", &error))?;
        let updated_at = raw
            .get("updated_at")
            .and_then(Value::as_str)
            .map(ToOwned::to_owned);
        Ok(UpdatedIssue { updated_at, raw })
    }

    async fn post_comment(
        &self,
        locator: &PullRequestLocator,
        body: &str,
    ) -> Result<PostedComment, WorkflowError> {
        tracing::debug!(path = %locator.comments_path(), "posting comment");
        let comment: ApiComment = self
            .client
            .post(locator.comments_path(), Some(&BodyPayload { body }))
            .await
            .map_err(|error| map_octocrab_error("post comment", &error))?;
        Ok(comment.into())
    }
}
