//! Shared test harness: embedded database + in-process router dispatch

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use savoro_server::{AppState, Config, build_app};
use serde_json::Value;
use tempfile::TempDir;
use tower::Service;

fn test_config(db_path: &str) -> Config {
    Config {
        http_port: 0,
        db_path: db_path.to_string(),
        db_name: "savoro_test".to_string(),
        gemini_api_key: None,
        gemini_base_url: "http://127.0.0.1:1".to_string(),
        gemini_text_model: "gemini-1.5-flash".to_string(),
        gemini_image_model: "imagen-3.0".to_string(),
        frontend_url: "http://localhost:3000".to_string(),
        cors_origins: "*".to_string(),
        environment: "test".to_string(),
    }
}

/// Build a router over a fresh embedded database.
///
/// The TempDir must be kept alive for the duration of the test.
pub async fn setup_app() -> (Router, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let db_path = tmp.path().join("savoro.db");
    let config = test_config(db_path.to_str().unwrap());

    let state = AppState::initialize(&config).await.unwrap();
    (build_app(state), tmp)
}

/// Dispatch a request in-process and decode the JSON body.
///
/// Non-JSON bodies (e.g. extractor rejections) come back as a JSON string.
pub async fn request(
    app: &mut Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.call(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}
