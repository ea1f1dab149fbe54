//! GitHub addressing, models, and REST gateways.
//!
//! This module wraps Octocrab to address a pull request, read and update its
//! description, post comments, query commit status, and list or download
//! GitHub Actions artifacts. Errors are mapped into [`WorkflowError`] so that
//! callers can surface precise failures without exposing Octocrab internals.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod token;

pub use error::WorkflowError;
pub use gateway::{ActionsGateway, IssueGateway, OctocrabGateway, StatusGateway};
pub use locator::{PersonalAccessToken, PullRequestLocator};
pub use models::{
    Artifact, CombinedStatus, IssueDescription, PostedComment, StatusContext, UpdatedIssue,
    WorkflowRun,
};

#[cfg(test)]
pub use gateway::{MockActionsGateway, MockIssueGateway, MockStatusGateway};

#[cfg(test)]
mod tests;
