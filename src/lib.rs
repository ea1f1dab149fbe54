//! Exhibit library crate for pull request evidence workflows.
//!
//! The core is [`evidence`], a pure text transformation that locates the
//! evidence block of a pull request description and rewrites it into a
//! grouped checkbox form. Around it sit thin GitHub workflows: link checking,
//! CI artifact retrieval, commit status monitoring, and comment posting.

pub mod artifacts;
pub mod comment;
pub mod config;
pub mod evidence;
pub mod github;
pub mod links;
pub mod monitor;
pub mod workspace;

pub use config::{ExhibitConfig, OperationMode};
pub use evidence::{CheckboxState, EvidenceLabel, EvidenceMap, Rewrite, rewrite};
pub use github::{
    OctocrabGateway, PersonalAccessToken, PullRequestLocator, WorkflowError,
};
