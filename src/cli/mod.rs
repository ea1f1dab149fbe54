//! CLI operation handlers.
//!
//! Each operation reads its settings from [`exhibit::ExhibitConfig`]:
//! - [`rewrite_evidence`]: Rewrite the evidence block of a description
//! - [`check_links`]: Probe the evidence links of a description
//! - [`fetch_artifact`]: Download and extract the CI artifact
//! - [`monitor_status`]: Poll the combined commit status
//! - [`post_comment`]: Post a comment on the pull request
//!
//! Output formatting utilities are in [`output`].

pub mod check_links;
pub mod fetch_artifact;
pub mod monitor_status;
pub mod output;
pub mod post_comment;
pub mod rewrite_evidence;

#[cfg(test)]
pub mod test_utils;
