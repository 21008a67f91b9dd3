//! StatusCheck API Handlers

use axum::{Json, extract::State};

use crate::core::AppState;
use crate::db::models::{StatusCheck, StatusCheckCreate};
use crate::db::repository::StatusCheckRepository;
use crate::utils::{AppError, AppResult};

/// POST /api/status - 记录一次连通性检查
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<StatusCheckCreate>,
) -> AppResult<Json<StatusCheck>> {
    let repo = StatusCheckRepository::new(state.db.clone());
    let check = repo
        .create(payload)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(check))
}

/// GET /api/status - 获取全部连通性检查记录
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<StatusCheck>>> {
    let repo = StatusCheckRepository::new(state.db.clone());
    let checks = repo
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(checks))
}
