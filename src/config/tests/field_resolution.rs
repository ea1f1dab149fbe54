//! Tests for locator, token, checkbox, and path resolution.

use camino::Utf8PathBuf;
use rstest::rstest;

use crate::ExhibitConfig;
use crate::evidence::CheckboxState;
use crate::github::WorkflowError;

#[rstest]
fn locator_prefers_pull_request_url() {
    let config = ExhibitConfig {
        pr_url: Some("https://github.com/jy/tea/pull/65".to_owned()),
        owner: Some("other".to_owned()),
        repo: Some("repo".to_owned()),
        pr: Some(1),
        ..Default::default()
    };

    let locator = config.locator().expect("locator should build");

    assert_eq!(locator.owner(), "jy");
    assert_eq!(locator.number().get(), 65);
}

#[rstest]
fn locator_from_owner_repo_and_number() {
    let config = ExhibitConfig {
        owner: Some("jy".to_owned()),
        repo: Some("tea".to_owned()),
        pr: Some(7),
        ..Default::default()
    };

    let locator = config.locator().expect("locator should build");

    assert_eq!(locator.repository(), "tea");
    assert_eq!(locator.api_base().as_str(), "https://api.github.com/");
}

#[rstest]
#[case::nothing(None, None, None)]
#[case::missing_number(Some("jy"), Some("tea"), None)]
#[case::missing_repo(Some("jy"), None, Some(7))]
fn locator_requires_complete_parts(
    #[case] owner: Option<&str>,
    #[case] repo: Option<&str>,
    #[case] pr: Option<u64>,
) {
    let config = ExhibitConfig {
        owner: owner.map(ToOwned::to_owned),
        repo: repo.map(ToOwned::to_owned),
        pr,
        ..Default::default()
    };

    assert_eq!(
        config.locator().err(),
        Some(WorkflowError::MissingPullRequest)
    );
}

#[rstest]
fn resolve_token_prefers_configured_value() {
    let _guard = env_lock::lock_env([("GH_TOKEN", Some("env-token"))]);
    let config = ExhibitConfig {
        token: Some("my-token".to_owned()),
        ..Default::default()
    };

    let token = config.resolve_token().expect("token should resolve");

    assert_eq!(token.value(), "my-token");
}

#[rstest]
fn resolve_token_falls_back_to_environment() {
    let _guard = env_lock::lock_env([
        ("GH_TOKEN", None::<&str>),
        ("GITHUB_TOKEN", Some("legacy-token")),
    ]);
    let config = ExhibitConfig::default();

    let token = config.resolve_token().expect("token should resolve");

    assert_eq!(token.value(), "legacy-token");
}

#[rstest]
fn optional_token_is_absent_without_any_source() {
    let _guard = env_lock::lock_env([("GH_TOKEN", None::<&str>), ("GITHUB_TOKEN", None)]);
    let config = ExhibitConfig::default();

    let token = config.optional_token().expect("absence is not an error");

    assert!(token.is_none(), "unexpected token {token:?}");
}

#[rstest]
#[case::checked("checked", Ok(CheckboxState::Checked))]
#[case::unchecked(" Unchecked ", Ok(CheckboxState::Unchecked))]
fn checkbox_state_parses(
    #[case] value: &str,
    #[case] expected: Result<CheckboxState, WorkflowError>,
) {
    let config = ExhibitConfig {
        checkbox: value.to_owned(),
        ..Default::default()
    };

    assert_eq!(config.checkbox_state(), expected);
}

#[rstest]
fn checkbox_state_rejects_unknown_value() {
    let config = ExhibitConfig {
        checkbox: "maybe".to_owned(),
        ..Default::default()
    };

    assert!(matches!(
        config.checkbox_state(),
        Err(WorkflowError::Configuration { .. })
    ));
}

#[rstest]
fn monitor_log_defaults_under_log_dir() {
    let config = ExhibitConfig {
        log_dir: "logs".to_owned(),
        ..Default::default()
    };

    assert_eq!(
        config.monitor_log_path(65),
        Utf8PathBuf::from("logs/monitor_pr65.log")
    );
}

#[rstest]
fn monitor_log_override_is_used_verbatim() {
    let config = ExhibitConfig {
        monitor_log: Some("/tmp/status.log".to_owned()),
        ..Default::default()
    };

    assert_eq!(
        config.monitor_log_path(65),
        Utf8PathBuf::from("/tmp/status.log")
    );
}
