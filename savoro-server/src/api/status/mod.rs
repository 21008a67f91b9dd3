//! StatusCheck API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/status", routes())
}

fn routes() -> Router<AppState> {
    Router::new().route("/", get(handler::list).post(handler::create))
}
