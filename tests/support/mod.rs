//! Shared test utilities.

use exhibit::{PersonalAccessToken, PullRequestLocator};
use wiremock::MockServer;

/// Repository path prefix served by the mock GitHub Enterprise API.
pub const REPO_PATH: &str = "/api/v3/repos/jy/tea";

/// Builds a locator for pull request `number` on the mock server.
///
/// # Panics
///
/// Panics if the mock server URI cannot form a valid pull request URL.
pub fn server_locator(server: &MockServer, number: u64) -> PullRequestLocator {
    PullRequestLocator::parse(&format!("{}/jy/tea/pull/{number}", server.uri()))
        .unwrap_or_else(|error| panic!("locator should parse: {error}"))
}

/// Token accepted by every mock server.
///
/// # Panics
///
/// Panics if the literal token is rejected.
pub fn test_token() -> PersonalAccessToken {
    PersonalAccessToken::new("ghp_test")
        .unwrap_or_else(|error| panic!("token should be valid: {error}"))
}
