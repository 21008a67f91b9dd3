//! QR Code API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::core::AppState;
use crate::db::repository::MenuRepository;
use crate::services::qr;
use crate::utils::{AppError, AppResult, ErrorCode};

#[derive(Serialize)]
pub struct QrResponse {
    pub qr_code: String,
    pub menu_url: String,
}

/// GET /api/qr/:menu_id - 生成指向前端菜单页的二维码
pub async fn generate(
    State(state): State<AppState>,
    Path(menu_id): Path<String>,
) -> AppResult<Json<QrResponse>> {
    let repo = MenuRepository::new(state.db.clone());
    let menu = repo
        .find_by_id(&menu_id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    if menu.is_none() {
        return Err(AppError::new(ErrorCode::MenuNotFound));
    }

    let menu_url = format!("{}/menu/{}", state.config.frontend_url, menu_id);
    let qr_code = qr::generate_data_uri(&menu_url).map_err(|e| {
        tracing::error!("Error generating QR code: {e}");
        AppError::with_message(
            ErrorCode::QrEncodeFailed,
            format!("Failed to generate QR code: {e}"),
        )
    })?;

    Ok(Json(QrResponse { qr_code, menu_url }))
}
