//! HTTP API tests
//!
//! Exercise the REST routes through the full router with in-process gateways.

mod common;

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::util::ServiceExt;

use common::{EchoGateway, FakeSpeech, state_with};
use vertex_chat::core::audio::AudioGateway;
use vertex_chat::routes;

fn app(audio: Option<Arc<dyn AudioGateway>>) -> Router {
    routes::create_router(state_with(Some(Arc::new(EchoGateway::default())), audio))
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(app: Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = send(
        app(None),
        Request::builder().uri("/health").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "OK"}));
}

#[tokio::test]
async fn test_list_models() {
    let (status, body) = send(
        app(None),
        Request::builder().uri("/models").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"models": ["gemini-1.5-flash-001", "gemini-1.5-pro-preview-0514"]})
    );
}

#[tokio::test]
async fn test_index_and_script_served() {
    let response = get(app(None), "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    let html = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&html).contains("/static/script.js"));

    let response = get(app(None), "/static/script.js").await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("application/javascript"));
    let script = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&script).contains("send_message"));
}

#[tokio::test]
async fn test_tts_returns_base64_audio() {
    let (status, body) = post_json(
        app(Some(Arc::new(FakeSpeech::hearing(&[])))),
        "/tts",
        json!({"text": "Hello"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let audio = BASE64
        .decode(body["audio_base64"].as_str().unwrap())
        .unwrap();
    assert_eq!(audio, b"ID3Hello");
}

#[tokio::test]
async fn test_tts_missing_or_empty_text() {
    for body in [json!({}), json!({"text": ""}), json!({"text": null})] {
        let (status, body) = post_json(
            app(Some(Arc::new(FakeSpeech::hearing(&[])))),
            "/tts",
            body,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No text provided");
    }
}

#[tokio::test]
async fn test_tts_unavailable() {
    let (status, body) = post_json(app(None), "/tts", json!({"text": "Hello"})).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].as_str().unwrap().contains("not available"));
}

#[tokio::test]
async fn test_tts_upstream_failure() {
    let (status, body) = post_json(
        app(Some(Arc::new(FakeSpeech::failing()))),
        "/tts",
        json!({"text": "Hello"}),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("synthesis quota exceeded"));
}

#[tokio::test]
async fn test_tts_malformed_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/tts")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(app(Some(Arc::new(FakeSpeech::hearing(&[])))), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
}

#[tokio::test]
async fn test_stt_returns_joined_transcript() {
    let (status, body) = post_json(
        app(Some(Arc::new(FakeSpeech::hearing(&["hello", "world"])))),
        "/stt",
        json!({"audio_base64": BASE64.encode(b"webm-bytes"), "mime_type": "audio/webm"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"transcript": "hello world"}));
}

#[tokio::test]
async fn test_stt_unsupported_mime_type() {
    let (status, body) = post_json(
        app(Some(Arc::new(FakeSpeech::hearing(&["hello"])))),
        "/stt",
        json!({"audio_base64": BASE64.encode(b"riff"), "mime_type": "audio/wav"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Unsupported audio format"));
}

#[tokio::test]
async fn test_stt_no_speech() {
    let (status, body) = post_json(
        app(Some(Arc::new(FakeSpeech::hearing(&[])))),
        "/stt",
        json!({"audio_base64": BASE64.encode(b"silence"), "mime_type": "audio/ogg"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No speech detected in audio");
}

#[tokio::test]
async fn test_stt_missing_fields() {
    for body in [
        json!({"mime_type": "audio/webm"}),
        json!({"audio_base64": BASE64.encode(b"x")}),
        json!({}),
    ] {
        let (status, _) = post_json(
            app(Some(Arc::new(FakeSpeech::hearing(&["x"])))),
            "/stt",
            body,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_stt_invalid_base64() {
    let (status, body) = post_json(
        app(Some(Arc::new(FakeSpeech::hearing(&["x"])))),
        "/stt",
        json!({"audio_base64": "***not base64***", "mime_type": "audio/webm"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid base64 audio"));
}

#[tokio::test]
async fn test_stt_unavailable_and_upstream_failure() {
    let body = json!({"audio_base64": BASE64.encode(b"x"), "mime_type": "audio/webm"});

    let (status, _) = post_json(app(None), "/stt", body.clone()).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, body) = post_json(app(Some(Arc::new(FakeSpeech::failing()))), "/stt", body).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("connection reset"));
}

#[tokio::test]
async fn test_unavailable_audio_wins_over_bad_input() {
    let (status, body) = post_json(
        app(None),
        "/stt",
        json!({"audio_base64": "!!!not base64", "mime_type": "audio/webm"}),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Speech-to-Text service is not available");

    for uri in ["/tts", "/stt"] {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, _) = send(app(None), request).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE, "{uri}");
    }

    let (status, _) = post_json(app(None), "/tts", json!({"text": ""})).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}
