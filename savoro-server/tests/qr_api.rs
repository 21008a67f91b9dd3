//! QR endpoint integration tests
//! Run: cargo test -p savoro-server --test qr_api

mod common;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use common::{request, setup_app};
use http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn qr_for_known_menu() {
    let (mut app, _tmp) = setup_app().await;

    let (_, menu) = request(
        &mut app,
        Method::POST,
        "/api/menus",
        Some(json!({"cafe_name": "Joe's"})),
    )
    .await;
    let id = menu["id"].as_str().unwrap().to_string();

    let (status, body) = request(&mut app, Method::GET, &format!("/api/qr/{id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["menu_url"].as_str().unwrap(),
        format!("http://localhost:3000/menu/{id}")
    );

    // data URI 内是合法 PNG
    let qr_code = body["qr_code"].as_str().unwrap();
    let payload = qr_code
        .strip_prefix("data:image/png;base64,")
        .expect("data URI prefix");
    let bytes = STANDARD.decode(payload).unwrap();
    assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
}

#[tokio::test]
async fn qr_for_unknown_menu_returns_404() {
    let (mut app, _tmp) = setup_app().await;

    let (status, body) = request(&mut app, Method::GET, "/api/qr/nope", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Menu not found");
    assert_eq!(body["code"], 2001);
}
