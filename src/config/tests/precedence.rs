//! Tests for configuration layer precedence.

use ortho_config::OrthoConfig;
use rstest::rstest;
use serde_json::{Value, json};

use super::helpers::build_config_from_layers;
use crate::ExhibitConfig;

#[rstest]
#[case::file_overrides_defaults(
    vec![("defaults", json!({"pr_url": "default-url"})), ("file", json!({"pr_url": "file-url"}))],
    "pr_url",
    "file-url",
    "file should override default"
)]
#[case::environment_overrides_file(
    vec![("file", json!({"token": "file-token"})), ("environment", json!({"token": "env-token"}))],
    "token",
    "env-token",
    "environment should override file"
)]
#[case::cli_overrides_environment(
    vec![("environment", json!({"pr_url": "env-url"})), ("cli", json!({"pr_url": "cli-url"}))],
    "pr_url",
    "cli-url",
    "CLI should override environment"
)]
#[case::log_dir_defaults_file_env_cli(
    vec![
        ("defaults", json!({"log_dir": "default-logs"})),
        ("file", json!({"log_dir": "file-logs"})),
        ("environment", json!({"log_dir": "env-logs"})),
        ("cli", json!({"log_dir": "cli-logs"}))
    ],
    "log_dir",
    "cli-logs",
    "CLI should win for log_dir"
)]
fn test_layer_precedence(
    #[case] layers: Vec<(&str, Value)>,
    #[case] field: &str,
    #[case] expected: &str,
    #[case] message: &str,
) {
    let config = build_config_from_layers(&layers);

    let actual = match field {
        "pr_url" => config.pr_url.as_deref(),
        "token" => config.token.as_deref(),
        "log_dir" => Some(config.log_dir.as_str()),
        _ => panic!("unknown field: {field}"),
    };

    assert_eq!(actual, Some(expected), "{message}");
}

#[rstest]
fn file_layer_sets_numeric_and_switch_fields() {
    let config = build_config_from_layers(&[(
        "file",
        json!({"pr": 65, "interval_seconds": 5, "monitor": true, "once": true}),
    )]);

    assert_eq!(config.pr, Some(65));
    assert_eq!(config.interval_seconds, 5);
    assert!(config.monitor, "monitor switch should load from file");
    assert!(config.once, "once switch should load from file");
}

#[rstest]
fn defaults_match_ci_layout() {
    let config = ExhibitConfig::default();

    assert_eq!(config.checkbox, "checked");
    assert_eq!(config.urls_file, "build-ci-logs/e2e_urls.json");
    assert_eq!(config.log_dir, "build-ci-logs");
    assert_eq!(config.artifact_name, "playwright-artifacts");
    assert_eq!(config.artifact_dir, "build-ci-logs/playwright");
    assert_eq!(config.link_timeout_seconds, 10);
    assert_eq!(config.interval_seconds, 30);
}

#[rstest]
fn environment_and_cli_load_through_ortho_config() {
    let temp_dir = tempfile::TempDir::new().expect("temp dir should be created");
    let home = temp_dir.path().to_string_lossy().to_string();

    let _guard = env_lock::lock_env([
        ("EXHIBIT_OWNER", Some("env-owner")),
        ("EXHIBIT_INTERVAL_SECONDS", Some("12")),
        ("HOME", Some(home.as_str())),
        ("XDG_CONFIG_HOME", Some(home.as_str())),
    ]);

    let args = ["exhibit", "--owner", "cli-owner", "--monitor"].map(std::ffi::OsString::from);
    let config = ExhibitConfig::load_from_iter(args).expect("config should load");

    assert_eq!(config.owner.as_deref(), Some("cli-owner"));
    assert_eq!(config.interval_seconds, 12);
    assert!(config.monitor, "CLI switch should be set");
}
