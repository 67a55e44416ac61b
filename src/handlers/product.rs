//! Product endpoints.

use super::{json_body, Body};
use crate::error::AppError;
use crate::model::ProductView;
use crate::service::{product, validation};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ProductView>>, AppError> {
    Ok(Json(product::list(&state.pool).await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<Json<ProductView>, AppError> {
    Ok(Json(product::get_by_id(&state.pool, product_id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    body: Body,
) -> Result<(StatusCode, Json<ProductView>), AppError> {
    let input = validation::product_input(&json_body(body)?)?;
    let created = product::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    body: Body,
) -> Result<Json<ProductView>, AppError> {
    let input = validation::product_input(&json_body(body)?)?;
    let updated = product::update(&state.pool, product_id, &input).await?;
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<Json<ProductView>, AppError> {
    Ok(Json(product::delete(&state.pool, product_id).await?))
}
