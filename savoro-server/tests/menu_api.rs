//! Menu endpoint integration tests
//! Run: cargo test -p savoro-server --test menu_api

mod common;

use common::{request, setup_app};
use http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn create_and_fetch_menu() {
    let (mut app, _tmp) = setup_app().await;

    let (status, created) = request(
        &mut app,
        Method::POST,
        "/api/menus",
        Some(json!({"cafe_name": "Joe's"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["cafe_name"], "Joe's");
    assert_eq!(created["cafe_description"], "");
    assert_eq!(created["theme_color"], "#FF6B6B");
    let id = created["id"].as_str().expect("generated id").to_string();
    assert!(!id.is_empty());
    assert!(created["created_at"].is_string());

    let (status, fetched) =
        request(&mut app, Method::GET, &format!("/api/menus/{id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], id.as_str());
    assert_eq!(fetched["cafe_name"], "Joe's");
    assert_eq!(fetched["created_at"], created["created_at"]);
}

#[tokio::test]
async fn create_menu_keeps_provided_fields() {
    let (mut app, _tmp) = setup_app().await;

    let (status, created) = request(
        &mut app,
        Method::POST,
        "/api/menus",
        Some(json!({
            "cafe_name": "Cafe Luna",
            "cafe_description": "Seaside brunch spot",
            "theme_color": "#22C55E"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["cafe_description"], "Seaside brunch spot");
    assert_eq!(created["theme_color"], "#22C55E");
}

#[tokio::test]
async fn list_menus_returns_all() {
    let (mut app, _tmp) = setup_app().await;

    for name in ["Joe's", "Cafe Luna"] {
        let (status, _) = request(
            &mut app,
            Method::POST,
            "/api/menus",
            Some(json!({"cafe_name": name})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, listed) = request(&mut app, Method::GET, "/api/menus", None).await;

    assert_eq!(status, StatusCode::OK);
    let menus = listed.as_array().expect("menu list");
    assert_eq!(menus.len(), 2);

    let names: Vec<&str> = menus
        .iter()
        .map(|m| m["cafe_name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Joe's"));
    assert!(names.contains(&"Cafe Luna"));
}

#[tokio::test]
async fn unknown_menu_returns_404() {
    let (mut app, _tmp) = setup_app().await;

    let (status, body) = request(&mut app, Method::GET, "/api/menus/nope", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Menu not found");
    assert_eq!(body["code"], 2001);
}

#[tokio::test]
async fn missing_cafe_name_is_rejected() {
    let (mut app, _tmp) = setup_app().await;

    let (status, _) = request(
        &mut app,
        Method::POST,
        "/api/menus",
        Some(json!({"cafe_description": "no name"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
