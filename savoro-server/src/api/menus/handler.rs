//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::AppState;
use crate::db::models::{Menu, MenuCreate};
use crate::db::repository::MenuRepository;
use crate::utils::{AppError, AppResult, ErrorCode};

/// POST /api/menus - 创建菜单
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<MenuCreate>,
) -> AppResult<Json<Menu>> {
    let repo = MenuRepository::new(state.db.clone());
    let menu = repo
        .create(payload)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(menu))
}

/// GET /api/menus/:id - 获取单个菜单
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Menu>> {
    let repo = MenuRepository::new(state.db.clone());
    let menu = repo
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::new(ErrorCode::MenuNotFound))?;
    Ok(Json(menu))
}

/// GET /api/menus - 获取所有菜单
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Menu>>> {
    let repo = MenuRepository::new(state.db.clone());
    let menus = repo
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(menus))
}
