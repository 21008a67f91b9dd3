//! Dish API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/dishes", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create))
        // GET 的路径参数是菜单 id，PUT/DELETE 的是菜品 id
        .route(
            "/{id}",
            get(handler::list_by_menu)
                .put(handler::update)
                .delete(handler::delete),
        )
}
