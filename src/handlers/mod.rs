//! HTTP handlers: one service call per endpoint.

pub mod product;
pub mod section;

use crate::error::AppError;
use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::Value;

/// Raw JSON body; rejections (malformed JSON, wrong content type) map to 400
/// instead of axum's default 422.
pub type Body = Result<Json<Value>, JsonRejection>;

pub(crate) fn json_body(body: Body) -> Result<Value, AppError> {
    let Json(value) = body.map_err(|e| AppError::Validation(e.body_text()))?;
    Ok(value)
}
