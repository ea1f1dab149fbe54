//! Shared test utilities for CLI tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use exhibit::WorkflowError;
use exhibit::github::{
    IssueDescription, IssueGateway, PostedComment, PullRequestLocator, UpdatedIssue,
};
use exhibit::links::{LinkProbe, ProbeOutcome};
use serde_json::json;

/// An issue gateway that serves a fixed description and records updates.
#[derive(Clone, Default)]
pub struct CapturingIssueGateway {
    /// Description returned by [`IssueGateway::issue`].
    pub body: String,
    /// Bodies passed to [`IssueGateway::update_issue_body`].
    pub updates: Arc<Mutex<Vec<String>>>,
    /// Bodies passed to [`IssueGateway::post_comment`].
    pub comments: Arc<Mutex<Vec<String>>>,
}

impl CapturingIssueGateway {
    /// Creates a gateway serving `body`.
    pub fn with_body(body: &str) -> Self {
        Self {
            body: body.to_owned(),
            ..Self::default()
        }
    }

    /// Bodies sent as description updates.
    pub fn updates(&self) -> Vec<String> {
        self.updates
            .lock()
            .expect("updates mutex should be available")
            .clone()
    }
}

#[async_trait]
impl IssueGateway for CapturingIssueGateway {
    async fn issue(&self, locator: &PullRequestLocator) -> Result<IssueDescription, WorkflowError> {
        let number = locator.number().get();
        Ok(IssueDescription {
            number,
            body: self.body.clone(),
            html_url: None,
            updated_at: None,
            raw: json!({"number": number, "body": self.body}),
        })
    }

    async fn update_issue_body(
        &self,
        _locator: &PullRequestLocator,
        body: &str,
    ) -> Result<UpdatedIssue, WorkflowError> {
        self.updates
            .lock()
            .expect("updates mutex should be available")
            .push(body.to_owned());
        Ok(UpdatedIssue {
            updated_at: Some("2025-01-02T03:04:05Z".to_owned()),
            raw: json!({"updated_at": "2025-01-02T03:04:05Z"}),
        })
    }

    async fn post_comment(
        &self,
        _locator: &PullRequestLocator,
        body: &str,
    ) -> Result<PostedComment, WorkflowError> {
        self.comments
            .lock()
            .expect("comments mutex should be available")
            .push(body.to_owned());
        Ok(PostedComment {
            id: 1,
            html_url: None,
        })
    }
}

/// A link probe that answers every URL with the same status.
pub struct FixedProbe(pub u16);

#[async_trait]
impl LinkProbe for FixedProbe {
    async fn probe(&self, _url: &str) -> ProbeOutcome {
        ProbeOutcome::from_status(self.0)
    }
}

/// Locator shared by CLI tests.
pub fn locator() -> PullRequestLocator {
    PullRequestLocator::from_parts("jy", "tea", 65).expect("locator should build")
}
