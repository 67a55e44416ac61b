//! Section and product CRUD routes.

use crate::handlers::{product, section};
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::limit::RequestBodyLimitLayer;

const MAX_BODY_BYTES: usize = 64 * 1024;

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/sections", get(section::list).post(section::create))
        .route(
            "/sections/:section_id",
            get(section::get).put(section::update).delete(section::delete),
        )
        .route("/products", get(product::list).post(product::create))
        .route(
            "/products/:product_id",
            get(product::get).put(product::update).delete(product::delete),
        )
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(state)
}
