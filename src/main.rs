//! Server binary: environment config, pool setup, schema, routes.

use axum::Router;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use warehouse_api::{api_routes, common_routes_with_ready, connect, ensure_schema, seed_demo_data, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warehouse_api=info")),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://warehouse.db".into());
    let pool = connect(&database_url).await?;
    ensure_schema(&pool).await?;
    if std::env::var("SEED_DEMO_DATA").map(|v| v == "1").unwrap_or(false) {
        seed_demo_data(&pool).await?;
    }

    let state = AppState { pool };
    let app = Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(api_routes(state));

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
