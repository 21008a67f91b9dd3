//! Dish API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::core::AppState;
use crate::db::models::{Dish, DishCreate, DishUpdate};
use crate::db::repository::{DishRepository, RepoError};
use crate::utils::{AppError, AppResult, ErrorCode};

#[derive(Serialize)]
pub struct DeleteResponse {
    message: &'static str,
}

/// POST /api/dishes - 创建菜品
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<DishCreate>,
) -> AppResult<Json<Dish>> {
    let repo = DishRepository::new(state.db.clone());
    let dish = repo
        .create(payload)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(dish))
}

/// GET /api/dishes/:menu_id - 获取某菜单下的所有菜品
pub async fn list_by_menu(
    State(state): State<AppState>,
    Path(menu_id): Path<String>,
) -> AppResult<Json<Vec<Dish>>> {
    let repo = DishRepository::new(state.db.clone());
    let dishes = repo
        .find_by_menu(&menu_id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(dishes))
}

/// PUT /api/dishes/:id - 更新菜品（合并提供的字段）
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<DishUpdate>,
) -> AppResult<Json<Dish>> {
    let repo = DishRepository::new(state.db.clone());
    let dish = repo.update(&id, payload).await.map_err(|e| match e {
        RepoError::NotFound(_) => AppError::new(ErrorCode::DishNotFound),
        other => AppError::database(other.to_string()),
    })?;
    Ok(Json(dish))
}

/// DELETE /api/dishes/:id - 删除菜品
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let repo = DishRepository::new(state.db.clone());
    let deleted = repo
        .delete(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    if deleted.is_none() {
        return Err(AppError::new(ErrorCode::DishNotFound));
    }

    Ok(Json(DeleteResponse {
        message: "Dish deleted successfully",
    }))
}
