//! AI Generation API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::core::AppState;
use crate::services::GenerationError;
use crate::utils::{AppError, AppResult, ErrorCode};

#[derive(Deserialize)]
pub struct GenerateDescriptionRequest {
    pub dish_name: String,
    pub category: String,
}

#[derive(Deserialize)]
pub struct GenerateImageRequest {
    pub dish_name: String,
    pub description: String,
}

#[derive(Serialize)]
pub struct DescriptionResponse {
    pub description: String,
}

#[derive(Serialize)]
pub struct ImageResponse {
    pub image_url: String,
}

/// POST /api/generate-description - 生成菜品文案
pub async fn generate_description(
    State(state): State<AppState>,
    Json(payload): Json<GenerateDescriptionRequest>,
) -> AppResult<Json<DescriptionResponse>> {
    let description = state
        .gemini
        .generate_description(&payload.dish_name, &payload.category)
        .await
        .map_err(|e| map_generation_error("description", e))?;
    Ok(Json(DescriptionResponse { description }))
}

/// POST /api/generate-image - 生成菜品图片（data URI）
pub async fn generate_image(
    State(state): State<AppState>,
    Json(payload): Json<GenerateImageRequest>,
) -> AppResult<Json<ImageResponse>> {
    let image_url = state
        .gemini
        .generate_image(&payload.dish_name, &payload.description)
        .await
        .map_err(|e| map_generation_error("image", e))?;
    Ok(Json(ImageResponse { image_url }))
}

fn map_generation_error(kind: &str, err: GenerationError) -> AppError {
    tracing::error!("Error generating {kind}: {err}");

    let code = match err {
        GenerationError::NotConfigured => ErrorCode::GenerationNotConfigured,
        _ => ErrorCode::GenerationFailed,
    };
    AppError::with_message(code, format!("Failed to generate {kind}: {err}"))
}
