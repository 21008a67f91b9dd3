//! Service-level endpoint integration tests: banner, health, status checks
//! Run: cargo test -p savoro-server --test service_api

mod common;

use common::{request, setup_app};
use http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn api_banner() {
    let (mut app, _tmp) = setup_app().await;

    for uri in ["/api", "/api/"] {
        let (status, body) = request(&mut app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "SavoroAI API (Gemini powered)");
    }
}

#[tokio::test]
async fn health_reports_database_probe() {
    let (mut app, _tmp) = setup_app().await;

    let (status, body) = request(&mut app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["checks"]["database"]["status"], "ok");
}

#[tokio::test]
async fn status_checks_are_recorded_and_listed() {
    let (mut app, _tmp) = setup_app().await;

    let (status, created) = request(
        &mut app,
        Method::POST,
        "/api/status",
        Some(json!({"client_name": "monitor-1"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["client_name"], "monitor-1");
    assert!(created["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(created["timestamp"].is_string());

    let (status, listed) = request(&mut app, Method::GET, "/api/status", None).await;
    assert_eq!(status, StatusCode::OK);
    let checks = listed.as_array().expect("status list");
    assert_eq!(checks.len(), 1);
    assert_eq!(checks[0]["client_name"], "monitor-1");
}

#[tokio::test]
async fn missing_client_name_is_rejected() {
    let (mut app, _tmp) = setup_app().await;

    let (status, _) = request(&mut app, Method::POST, "/api/status", Some(json!({}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
