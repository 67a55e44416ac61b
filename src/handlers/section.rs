//! Section endpoints.

use super::{json_body, Body};
use crate::error::AppError;
use crate::model::Section;
use crate::service::{section, validation};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Section>>, AppError> {
    Ok(Json(section::list(&state.pool).await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(section_id): Path<i64>,
) -> Result<Json<Section>, AppError> {
    Ok(Json(section::get_by_id(&state.pool, section_id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    body: Body,
) -> Result<(StatusCode, Json<Section>), AppError> {
    let input = validation::section_input(&json_body(body)?)?;
    let created = section::create(&state.pool, &input.section_name).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(section_id): Path<i64>,
    body: Body,
) -> Result<Json<Section>, AppError> {
    let input = validation::section_input(&json_body(body)?)?;
    let updated = section::update(&state.pool, section_id, &input.section_name).await?;
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(section_id): Path<i64>,
) -> Result<Json<Section>, AppError> {
    Ok(Json(section::delete(&state.pool, section_id).await?))
}
