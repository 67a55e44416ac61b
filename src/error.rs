//! Typed domain errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Section with ID {0} not found")]
    SectionNotFound(i64),
    #[error("Section with name {0} already exists")]
    SectionAlreadyExists(String),
    #[error("Product with ID {0} not found")]
    ProductNotFound(i64),
    #[error("Product with name {name} already exists in section {section_id}")]
    ProductAlreadyExists { section_id: i64, name: String },
    #[error("Section with ID {0} does not exist")]
    InvalidSection(i64),
    #[error("Invalid data: {0}")]
    Validation(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::SectionNotFound(_) | AppError::ProductNotFound(_) => StatusCode::NOT_FOUND,
            AppError::SectionAlreadyExists(_)
            | AppError::ProductAlreadyExists { .. }
            | AppError::InvalidSection(_)
            | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Db errors are logged in full; the client never sees SQL details.
        let message = match &self {
            AppError::Db(e) => {
                tracing::error!(error = %e, "database failure");
                "internal server error".to_string()
            }
            other => {
                tracing::warn!(status = %status, error = %other, "request rejected");
                other.to_string()
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
