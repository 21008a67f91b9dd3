//! 菜单二维码 API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/qr/{menu_id}", get(handler::generate))
}
