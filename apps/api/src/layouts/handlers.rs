//! Axum route handlers for the Layout API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::layouts::dto::{LayoutRequestDto, LayoutResponseDto, MetadataResponseDto};
use crate::layouts::validation::validate_layout_request;
use crate::state::AppState;

/// GET /layouts/:id
pub async fn handle_get_layout(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LayoutResponseDto>, AppError> {
    let layout = state.layouts.get_layout(id).await?;
    Ok(Json(layout.into()))
}

/// GET /layouts/metadata
pub async fn handle_get_metadata(
    State(state): State<AppState>,
) -> Result<Json<Vec<MetadataResponseDto>>, AppError> {
    let metadata = state.metadata.get_metadata().await?;
    Ok(Json(
        metadata.into_iter().map(MetadataResponseDto::from).collect(),
    ))
}

/// POST /layouts
pub async fn handle_create_layout(
    State(state): State<AppState>,
    Json(req): Json<LayoutRequestDto>,
) -> Result<(StatusCode, Json<LayoutResponseDto>), AppError> {
    validate_layout_request(&req)?;
    let created = state.layouts.create_layout(req.into_new_layout()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// PUT /layouts/:id
pub async fn handle_update_layout(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<LayoutRequestDto>,
) -> Result<StatusCode, AppError> {
    validate_layout_request(&req)?;
    state.layouts.update_layout(id, req.into_new_layout()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /layouts/:id
pub async fn handle_delete_layout(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.layouts.delete_layout(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
