//! Engine client tests against a canned-response stub, covering metadata
//! resolution, error translation, and the liveness probe.

mod common;

use common::{refused_url, spawn_json_stub};
use std::time::Duration;
use tubeflow::engine::EngineClient;
use tubeflow::utils::TubeflowError;

const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

#[tokio::test]
async fn metadata_full_payload_is_passed_through_verbatim() {
    let base = spawn_json_stub(
        "200 OK",
        r#"{
            "title": "Sample",
            "author": "Chan",
            "duration": "3:00",
            "thumbnail": "http://x/y.jpg",
            "views": "1,000",
            "availableQualities": ["720p"]
        }"#,
    )
    .await;

    let client = EngineClient::new(base);
    let meta = client
        .fetch_metadata("https://example.com/v1")
        .await
        .expect("metadata");

    assert_eq!(meta.title, "Sample");
    assert_eq!(meta.author, "Chan");
    assert_eq!(meta.duration, "3:00");
    assert_eq!(meta.thumbnail, "http://x/y.jpg");
    assert_eq!(meta.views, "1,000");
    assert_eq!(meta.available_qualities, vec!["720p"]);
}

#[tokio::test]
async fn metadata_partial_payload_gets_fallback_defaults() {
    let base = spawn_json_stub("200 OK", r#"{"title": "Sample"}"#).await;

    let client = EngineClient::new(base);
    let meta = client
        .fetch_metadata("https://example.com/v1")
        .await
        .expect("metadata");

    assert_eq!(meta.title, "Sample");
    assert_eq!(meta.author, "Unknown channel");
    assert_eq!(meta.duration, "00:00");
    assert_eq!(meta.views, "0");
    assert_eq!(meta.available_qualities, vec!["360p", "720p", "1080p"]);
}

#[tokio::test]
async fn metadata_engine_error_message_is_verbatim() {
    let base = spawn_json_stub(
        "500 Internal Server Error",
        r#"{"error": "Video unavailable"}"#,
    )
    .await;

    let client = EngineClient::new(base);
    let err = client
        .fetch_metadata("https://example.com/v1")
        .await
        .expect_err("must fail");

    match err {
        TubeflowError::Engine(message) => assert_eq!(message, "Video unavailable"),
        other => panic!("expected Engine error, got {:?}", other),
    }
}

#[tokio::test]
async fn metadata_unreachable_engine_is_a_distinct_error() {
    let client = EngineClient::new(refused_url());
    let err = client
        .fetch_metadata("https://example.com/v1")
        .await
        .expect_err("must fail");

    assert!(
        matches!(err, TubeflowError::EngineUnreachable),
        "expected EngineUnreachable, got {:?}",
        err
    );
}

#[tokio::test]
async fn metadata_empty_url_is_rejected_without_a_request() {
    // Pointing at a refused address proves no request is attempted: a
    // network call would surface as EngineUnreachable instead.
    let client = EngineClient::new(refused_url());

    let err = client.fetch_metadata("   ").await.expect_err("must fail");
    assert!(matches!(err, TubeflowError::EmptyUrl));

    let err = client.fetch_metadata("").await.expect_err("must fail");
    assert!(matches!(err, TubeflowError::EmptyUrl));
}

#[tokio::test]
async fn health_probe_accepts_running_status() {
    let base = spawn_json_stub("200 OK", r#"{"status": "running", "engine": "yt-dlp"}"#).await;
    let client = EngineClient::new(base);

    assert!(client.check_health(PROBE_TIMEOUT).await);
}

#[tokio::test]
async fn health_probe_rejects_other_shapes() {
    let stopped = spawn_json_stub("200 OK", r#"{"status": "stopping"}"#).await;
    assert!(!EngineClient::new(stopped).check_health(PROBE_TIMEOUT).await);

    let malformed = spawn_json_stub("200 OK", "not json").await;
    assert!(!EngineClient::new(malformed).check_health(PROBE_TIMEOUT).await);

    let error = spawn_json_stub("500 Internal Server Error", r#"{"error": "down"}"#).await;
    assert!(!EngineClient::new(error).check_health(PROBE_TIMEOUT).await);

    assert!(!EngineClient::new(refused_url()).check_health(PROBE_TIMEOUT).await);
}
