//! Integration tests for the HTTP API
//!
//! Runs the full router over the degraded (silence) provider and a
//! temporary cache directory.

use std::sync::Arc;

use application::NarrationService;
use audio_cache::AudioCacheStore;
use axum_test::TestServer;
use presentation_http::{AppConfig, routes, state::AppState};
use serde_json::{Value, json};
use speech::select_provider;

/// Build a test server backed by the silence provider and a temp cache
fn test_server(dir: &tempfile::TempDir) -> TestServer {
    let mut config = AppConfig::default();
    config.cache.audio_dir = dir.path().to_path_buf();

    // No provider is enabled in the default config, so selection resolves
    // to the silent fallback.
    let synthesizer = select_provider(&config.speech).expect("provider selection");
    let cache = Arc::new(AudioCacheStore::new(&config.cache.audio_dir));
    let narration = Arc::new(NarrationService::new(synthesizer, cache));

    let state = AppState {
        narration,
        config: Arc::new(config),
    };

    TestServer::new(routes::create_router(state)).expect("test server")
}

fn speech_body(text: &str) -> Value {
    json!({
        "text": text,
        "sessionId": "session-1",
        "voiceId": "am_michael"
    })
}

#[tokio::test]
async fn post_speech_returns_success_envelope() {
    let dir = tempfile::tempdir().unwrap();
    let server = test_server(&dir);

    let response = server
        .post("/speech")
        .json(&speech_body("The tavern door creaks open."))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["success"], true);
    assert!(body["audioUrl"].as_str().unwrap().starts_with("/audio/"));
    assert!(body["audioUrl"].as_str().unwrap().ends_with(".wav"));
    assert!(!body["messageId"].as_str().unwrap().is_empty());
    assert_eq!(body["cached"], false);
    assert!(body["durationSecs"].as_u64().unwrap() >= 1);
}

#[tokio::test]
async fn repeated_request_is_served_from_cache() {
    let dir = tempfile::tempdir().unwrap();
    let server = test_server(&dir);

    let first: Value = server
        .post("/speech")
        .json(&speech_body("Roll for initiative."))
        .await
        .json();

    let second: Value = server
        .post("/speech")
        .json(&speech_body("Roll for initiative."))
        .await
        .json();

    assert_eq!(first["cached"], false);
    assert_eq!(second["cached"], true);
    assert_eq!(first["audioUrl"], second["audioUrl"]);
    assert_ne!(first["messageId"], second["messageId"]);
}

#[tokio::test]
async fn generated_audio_is_served_statically() {
    let dir = tempfile::tempdir().unwrap();
    let server = test_server(&dir);

    let body: Value = server
        .post("/speech")
        .json(&speech_body("A chest sits in the corner."))
        .await
        .json();

    let audio_url = body["audioUrl"].as_str().unwrap();
    let audio = server.get(audio_url).await;

    audio.assert_status_ok();
    let bytes = audio.as_bytes();
    assert_eq!(&bytes[0..4], b"RIFF");
    assert_eq!(&bytes[8..12], b"WAVE");
}

#[tokio::test]
async fn empty_text_is_rejected_with_400() {
    let dir = tempfile::tempdir().unwrap();
    let server = test_server(&dir);

    let response = server.post("/speech").json(&speech_body("")).await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn oversized_text_is_rejected_with_400() {
    let dir = tempfile::tempdir().unwrap();
    let server = test_server(&dir);

    let response = server
        .post("/speech")
        .json(&speech_body(&"x".repeat(501)))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("500"));
}

#[tokio::test]
async fn text_at_the_limit_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let server = test_server(&dir);

    let response = server
        .post("/speech")
        .json(&speech_body(&"x".repeat(500)))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn missing_voice_id_is_rejected_with_400() {
    let dir = tempfile::tempdir().unwrap();
    let server = test_server(&dir);

    let response = server
        .post("/speech")
        .json(&json!({
            "text": "Who goes there?",
            "sessionId": "session-1"
        }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("voiceId"));
}

#[tokio::test]
async fn missing_session_id_is_rejected_with_400() {
    let dir = tempfile::tempdir().unwrap();
    let server = test_server(&dir);

    let response = server
        .post("/speech")
        .json(&json!({
            "text": "Who goes there?",
            "voiceId": "am_michael"
        }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn health_reports_the_active_provider() {
    let dir = tempfile::tempdir().unwrap();
    let server = test_server(&dir);

    let response = server.get("/speech/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["provider"], "silence");
    assert!(!body["timestamp"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn voice_catalog_is_listed() {
    let dir = tempfile::tempdir().unwrap();
    let server = test_server(&dir);

    let response = server.get("/speech/voices").await;

    response.assert_status_ok();
    let body: Value = response.json();
    let voices = body.as_array().unwrap();
    assert!(voices.len() >= 8);
    assert!(voices.iter().any(|v| v["name"] == "Narrator"));
}
