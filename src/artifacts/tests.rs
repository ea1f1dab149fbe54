//! Unit tests for artifact lookup and extraction.

use std::io::{Cursor, Write};

use camino::Utf8PathBuf;
use mockall::predicate::{always, eq};
use rstest::{fixture, rstest};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::{ArtifactFetcher, extract_archive, latest_run_for_pull_request};
use crate::github::{Artifact, MockActionsGateway, PullRequestLocator, WorkflowRun};

#[fixture]
fn locator() -> PullRequestLocator {
    PullRequestLocator::from_parts("jy", "tea", 65).expect("locator should build")
}

fn run(id: u64, event: &str, numbers: &[u64]) -> WorkflowRun {
    WorkflowRun {
        id,
        event: event.to_owned(),
        pull_request_numbers: numbers.to_vec(),
    }
}

fn artifact(id: u64, name: &str) -> Artifact {
    Artifact {
        id,
        name: name.to_owned(),
        size_in_bytes: 10,
        expired: false,
    }
}

fn zip_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (name, contents) in entries {
        writer.start_file(*name, options).expect("start zip entry");
        writer
            .write_all(contents.as_bytes())
            .expect("write zip entry");
    }
    writer.finish().expect("finish zip").into_inner()
}

fn utf8_temp(temp: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("UTF-8 temp path")
}

#[rstest]
fn picks_first_pull_request_run_for_number() {
    let runs = vec![
        run(1, "push", &[65]),
        run(2, "pull_request", &[12]),
        run(3, "pull_request", &[65]),
        run(4, "pull_request", &[65]),
    ];
    let found = latest_run_for_pull_request(&runs, 65).map(|run| run.id);
    assert_eq!(found, Some(3));
}

#[rstest]
#[tokio::test]
async fn finds_artifact_on_pull_request_run(locator: PullRequestLocator) {
    let mut gateway = MockActionsGateway::new();
    gateway
        .expect_workflow_runs()
        .times(1)
        .returning(|_| Ok(vec![run(7, "pull_request", &[65])]));
    gateway
        .expect_run_artifacts()
        .with(always(), eq(7_u64))
        .times(1)
        .returning(|_, _| Ok(vec![artifact(1, "logs"), artifact(2, "playwright-artifacts")]));
    gateway.expect_repository_artifacts().times(0);

    let fetcher = ArtifactFetcher::new(&gateway);
    let found = fetcher
        .find(&locator, "playwright-artifacts")
        .await
        .expect("lookup should succeed");

    assert_eq!(found.map(|artifact| artifact.id), Some(2));
}

#[rstest]
#[tokio::test]
async fn falls_back_to_repository_artifacts(locator: PullRequestLocator) {
    let mut gateway = MockActionsGateway::new();
    gateway
        .expect_workflow_runs()
        .times(1)
        .returning(|_| Ok(vec![run(7, "pull_request", &[65])]));
    gateway
        .expect_run_artifacts()
        .times(1)
        .returning(|_, _| Ok(vec![artifact(1, "logs")]));
    gateway
        .expect_repository_artifacts()
        .times(1)
        .returning(|_| Ok(vec![artifact(9, "playwright-artifacts")]));

    let fetcher = ArtifactFetcher::new(&gateway);
    let found = fetcher
        .find(&locator, "playwright-artifacts")
        .await
        .expect("lookup should succeed");

    assert_eq!(found.map(|artifact| artifact.id), Some(9));
}

#[rstest]
#[tokio::test]
async fn fetch_returns_none_without_download(locator: PullRequestLocator) {
    let mut gateway = MockActionsGateway::new();
    gateway.expect_workflow_runs().returning(|_| Ok(Vec::new()));
    gateway
        .expect_repository_artifacts()
        .returning(|_| Ok(vec![artifact(1, "other")]));
    gateway.expect_download_artifact().times(0);

    let temp = TempDir::new().expect("create temp dir");
    let fetched = ArtifactFetcher::new(&gateway)
        .fetch(&locator, "playwright-artifacts", &utf8_temp(&temp))
        .await
        .expect("fetch should succeed");

    assert_eq!(fetched, None);
}

#[rstest]
#[tokio::test]
async fn fetch_saves_and_extracts_archive(locator: PullRequestLocator) {
    let archive = zip_bytes(&[
        ("report/index.html", "<html></html>"),
        ("test-results/case/trace.zip", "trace"),
    ]);
    let mut gateway = MockActionsGateway::new();
    gateway.expect_workflow_runs().returning(|_| Ok(Vec::new()));
    gateway
        .expect_repository_artifacts()
        .returning(|_| Ok(vec![artifact(5, "playwright-artifacts")]));
    gateway
        .expect_download_artifact()
        .with(always(), eq(5_u64))
        .times(1)
        .returning(move |_, _| Ok(archive.clone()));

    let temp = TempDir::new().expect("create temp dir");
    let output = utf8_temp(&temp).join("playwright");
    let fetched = ArtifactFetcher::new(&gateway)
        .fetch(&locator, "playwright-artifacts", &output)
        .await
        .expect("fetch should succeed")
        .expect("artifact should be found");

    assert_eq!(fetched.archive_path, output.join("artifact_5.zip"));
    assert!(fetched.archive_path.exists(), "archive should be saved");
    assert_eq!(
        fetched.extracted,
        vec![
            output.join("report/index.html"),
            output.join("test-results/case/trace.zip"),
        ]
    );
    assert_eq!(
        fetched.trace_archive(),
        Some(output.join("test-results/case/trace.zip").as_path())
    );
}

#[rstest]
fn rejects_non_zip_bytes() {
    let temp = TempDir::new().expect("create temp dir");
    let result = extract_archive(b"not a zip", &utf8_temp(&temp));
    assert!(
        matches!(result, Err(crate::github::WorkflowError::Archive { .. })),
        "expected Archive error, got {result:?}"
    );
}
