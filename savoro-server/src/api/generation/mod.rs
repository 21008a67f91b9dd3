//! AI 生成 API 模块

mod handler;

use axum::{Router, routing::post};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/generate-description", post(handler::generate_description))
        .route("/api/generate-image", post(handler::generate_image))
}
