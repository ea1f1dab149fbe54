//! Unit tests for GitHub addressing and token resolution.

use camino::Utf8PathBuf;
use rstest::rstest;
use tempfile::TempDir;

use super::token::{resolve_optional_token_from, resolve_token_from};
use super::{PersonalAccessToken, PullRequestLocator, WorkflowError};

#[rstest]
fn parses_standard_github_url() {
    let locator = PullRequestLocator::parse("https://github.com/octo/tea/pull/65/files")
        .expect("should parse standard GitHub URL");
    assert_eq!(locator.owner(), "octo", "owner mismatch");
    assert_eq!(locator.repository(), "tea", "repository mismatch");
    assert_eq!(locator.number().get(), 65_u64, "number mismatch");
    assert_eq!(locator.api_base().as_str(), "https://api.github.com/");
}

#[rstest]
fn parses_enterprise_url() {
    let locator = PullRequestLocator::parse("https://ghe.example.com/foo/bar/pull/7")
        .expect("should parse enterprise URL");
    assert_eq!(
        locator.api_base().as_str(),
        "https://ghe.example.com/api/v3",
        "enterprise api base mismatch"
    );
}

#[rstest]
fn enterprise_api_base_drops_page_path_and_query() {
    let locator =
        PullRequestLocator::parse("https://ghe.example.com:8443/foo/bar/pull/7/files?w=1#diff")
            .expect("should parse enterprise URL with port");
    assert_eq!(locator.api_base().as_str(), "https://ghe.example.com:8443/api/v3");
    assert_eq!(locator.issue_path(), "/repos/foo/bar/issues/7");
}

#[rstest]
#[case::missing_number("https://github.com/octo/repo/pull/")]
#[case::issues_path("https://github.com/octo/repo/issues/4")]
#[case::short_path("https://github.com/octo/repo")]
fn rejects_incomplete_paths(#[case] url: &str) {
    let result = PullRequestLocator::parse(url);
    assert!(
        matches!(result, Err(WorkflowError::MissingPathSegments)),
        "expected MissingPathSegments for {url}, got {result:?}"
    );
}

#[rstest]
#[case::non_numeric("https://github.com/octo/repo/pull/abc")]
#[case::zero("https://github.com/octo/repo/pull/0")]
fn rejects_invalid_numbers(#[case] url: &str) {
    let result = PullRequestLocator::parse(url);
    assert!(
        matches!(result, Err(WorkflowError::InvalidPullRequestNumber)),
        "expected InvalidPullRequestNumber for {url}, got {result:?}"
    );
}

#[rstest]
fn builds_locator_from_parts() {
    let locator = PullRequestLocator::from_parts("jy", "tea", 65).expect("parts should be valid");
    assert_eq!(locator.issue_path(), "/repos/jy/tea/issues/65");
    assert_eq!(locator.comments_path(), "/repos/jy/tea/issues/65/comments");
    assert_eq!(locator.pull_request_path(), "/repos/jy/tea/pulls/65");
    assert_eq!(
        locator.commit_status_path("abc123"),
        "/repos/jy/tea/commits/abc123/status"
    );
    assert_eq!(
        locator.run_artifacts_path(9),
        "/repos/jy/tea/actions/runs/9/artifacts"
    );
}

#[rstest]
fn artifact_archive_url_respects_api_base() {
    let locator = PullRequestLocator::parse("http://127.0.0.1:8080/jy/tea/pull/65")
        .expect("local URL should parse");
    let url = locator
        .artifact_archive_url(42)
        .expect("archive URL should build");
    assert_eq!(
        url.as_str(),
        "http://127.0.0.1:8080/api/v3/repos/jy/tea/actions/artifacts/42/zip"
    );
}

#[rstest]
fn rejects_empty_parts() {
    assert_eq!(
        PullRequestLocator::from_parts("", "tea", 1),
        Err(WorkflowError::MissingPathSegments)
    );
    assert_eq!(
        PullRequestLocator::from_parts("jy", "tea", 0),
        Err(WorkflowError::InvalidPullRequestNumber)
    );
}

#[rstest]
fn token_debug_output_is_redacted() {
    let token = PersonalAccessToken::new("ghp_secret").expect("token should be valid");
    assert_eq!(format!("{token:?}"), "PersonalAccessToken(***)");
}

fn missing_file(temp: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(temp.path().join(".github_token")).expect("UTF-8 temp path")
}

#[rstest]
fn configured_token_wins() {
    let temp = TempDir::new().expect("create temp dir");
    let token = resolve_token_from(
        Some("from-config"),
        |_| Some("from-env".to_owned()),
        &missing_file(&temp),
    )
    .expect("token should resolve");
    assert_eq!(token.value(), "from-config");
}

#[rstest]
fn gh_token_precedes_github_token() {
    let temp = TempDir::new().expect("create temp dir");
    let token = resolve_token_from(
        None,
        |name| Some(format!("{name}-value")),
        &missing_file(&temp),
    )
    .expect("token should resolve");
    assert_eq!(token.value(), "GH_TOKEN-value");
}

#[rstest]
fn blank_sources_fall_through_to_token_file() {
    let temp = TempDir::new().expect("create temp dir");
    let path = missing_file(&temp);
    std::fs::write(&path, "  file-token\n").expect("write token file");

    let token = resolve_token_from(Some("  "), |_| Some(String::new()), &path)
        .expect("token should resolve");
    assert_eq!(token.value(), "file-token");
}

#[rstest]
fn missing_everywhere_is_an_error() {
    let temp = TempDir::new().expect("create temp dir");
    let result = resolve_token_from(None, |_| None, &missing_file(&temp));
    assert_eq!(result, Err(WorkflowError::MissingToken));
}

#[rstest]
fn optional_lookup_allows_anonymous_access() {
    let temp = TempDir::new().expect("create temp dir");
    let token = resolve_optional_token_from(None, |_| None, &missing_file(&temp))
        .expect("absence is not an error");
    assert!(token.is_none(), "no source should yield no token");
}

#[rstest]
fn optional_lookup_still_prefers_environment() {
    let temp = TempDir::new().expect("create temp dir");
    let token = resolve_optional_token_from(
        None,
        |name| (name == "GITHUB_TOKEN").then(|| "env-token".to_owned()),
        &missing_file(&temp),
    )
    .expect("token should resolve")
    .expect("token should be present");
    assert_eq!(token.value(), "env-token");
}
