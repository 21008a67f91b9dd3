//! 服务横幅路由

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    // 带斜杠与不带斜杠等价
    Router::new()
        .route("/api", get(index))
        .route("/api/", get(index))
}

#[derive(Serialize)]
pub struct ApiBanner {
    message: &'static str,
}

/// GET /api - 服务标识
pub async fn index() -> Json<ApiBanner> {
    Json(ApiBanner {
        message: "SavoroAI API (Gemini powered)",
    })
}
