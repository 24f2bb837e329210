//! End-to-end download flow: task lifecycle through the store plus the
//! download request and file save, against a canned-response stub.

mod common;

use common::{refused_url, spawn_json_stub, spawn_stub};
use tempfile::TempDir;
use tubeflow::engine::{AudioQuality, DownloadFormat, EngineClient, Quality, VideoQuality};
use tubeflow::tasks::{run_download, DownloadTask, TaskStatus, TaskStore};

fn video_task(title: &str) -> DownloadTask {
    DownloadTask::new(
        "https://example.com/v1",
        title,
        DownloadFormat::Mp4,
        Quality::Video(VideoQuality::P1080),
    )
}

/// Drive one task through the same transitions the UI applies around
/// `run_download`.
async fn execute(
    store: &mut TaskStore,
    client: &EngineClient,
    id: &str,
    dir: &std::path::Path,
) {
    let task = store.get(id).cloned().expect("task exists");
    match run_download(client, &task.url, &task.title, task.format, task.quality, dir).await {
        Ok(path) => {
            store.complete(id, path);
        }
        Err(e) => {
            store.fail(id, e.to_string());
        }
    }
}

#[tokio::test]
async fn successful_download_completes_task_and_saves_file() {
    let payload = b"fake mp4 bytes".to_vec();
    let base = spawn_stub("200 OK", "video/mp4", payload.clone()).await;
    let client = EngineClient::new(base);
    let temp = TempDir::new().expect("temp dir");

    let mut store = TaskStore::new();
    let id = store.add(video_task("Sample Video"));
    assert_eq!(store.get(&id).unwrap().status, TaskStatus::Pending);

    assert!(store.mark_downloading(&id));
    assert_eq!(store.get(&id).unwrap().status, TaskStatus::Downloading);
    assert_eq!(store.get(&id).unwrap().progress, 0);

    execute(&mut store, &client, &id, temp.path()).await;

    let task = store.get(&id).unwrap();
    assert_eq!(task.status, TaskStatus::Completed);
    assert_eq!(task.progress, 100);

    let path = task.file_path.as_ref().expect("file path recorded");
    assert_eq!(path.file_name().unwrap().to_string_lossy(), "Sample Video.mp4");
    assert_eq!(std::fs::read(path).unwrap(), payload);
}

#[tokio::test]
async fn failed_download_carries_the_engine_reason() {
    let base = spawn_json_stub("500 Internal Server Error", r#"{"error": "403 blocked"}"#).await;
    let client = EngineClient::new(base);
    let temp = TempDir::new().expect("temp dir");

    let mut store = TaskStore::new();
    let id = store.add(DownloadTask::new(
        "https://example.com/v1",
        "Audio Only",
        DownloadFormat::Mp3,
        Quality::Audio(AudioQuality::Kbps320),
    ));
    store.mark_downloading(&id);

    execute(&mut store, &client, &id, temp.path()).await;

    match &store.get(&id).unwrap().status {
        TaskStatus::Failed(reason) => assert!(
            reason.contains("403 blocked"),
            "reason should carry the engine message, got: {}",
            reason
        ),
        other => panic!("expected Failed, got {:?}", other),
    }
    assert_eq!(store.get(&id).unwrap().progress, 0);
}

#[tokio::test]
async fn unreachable_engine_fails_the_task_with_setup_advice() {
    let client = EngineClient::new(refused_url());
    let temp = TempDir::new().expect("temp dir");

    let mut store = TaskStore::new();
    let id = store.add(video_task("Offline Attempt"));
    store.mark_downloading(&id);

    execute(&mut store, &client, &id, temp.path()).await;

    match &store.get(&id).unwrap().status {
        TaskStatus::Failed(reason) => {
            assert!(reason.contains("not reachable"), "got: {}", reason)
        }
        other => panic!("expected Failed, got {:?}", other),
    }
}

#[tokio::test]
async fn retry_reissues_the_same_request_and_can_complete() {
    // First attempt fails against a refused port; the retry goes to a stub
    // that serves the bytes. Same task, same parameters.
    let temp = TempDir::new().expect("temp dir");

    let mut store = TaskStore::new();
    let id = store.add(video_task("Second Chance"));
    store.mark_downloading(&id);

    execute(&mut store, &client_for(refused_url()), &id, temp.path()).await;
    assert!(matches!(
        store.get(&id).unwrap().status,
        TaskStatus::Failed(_)
    ));

    assert!(store.retry(&id));
    assert_eq!(store.get(&id).unwrap().status, TaskStatus::Downloading);

    let base = spawn_stub("200 OK", "video/mp4", b"bytes".to_vec()).await;
    execute(&mut store, &client_for(base), &id, temp.path()).await;

    let task = store.get(&id).unwrap();
    assert_eq!(task.status, TaskStatus::Completed);
    assert_eq!(task.progress, 100);
}

#[tokio::test]
async fn new_tasks_are_inserted_at_the_head() {
    let mut store = TaskStore::new();
    let first = store.add(video_task("first"));
    let second = store.add(video_task("second"));

    let titles: Vec<_> = store.tasks().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["second", "first"]);
    assert_eq!(store.tasks()[0].id, second);
    assert_eq!(store.tasks()[1].id, first);
}

fn client_for(base: String) -> EngineClient {
    EngineClient::new(base)
}
