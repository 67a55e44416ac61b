//! Warehouse inventory tracker: sections and products CRUD over HTTP+JSON,
//! backed by SQLite through sqlx.

pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use error::AppError;
pub use routes::{api_routes, common_routes_with_ready};
pub use state::AppState;
pub use store::{connect, ensure_schema, seed_demo_data};
