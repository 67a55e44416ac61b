//! SQLite pool setup, schema DDL, and demo seed data.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Open a pool for `database_url`, creating the database file if missing.
/// Foreign key enforcement is switched on for every connection.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS sections (
        section_id INTEGER PRIMARY KEY AUTOINCREMENT,
        section_name TEXT NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS products (
        product_id INTEGER PRIMARY KEY AUTOINCREMENT,
        section_id INTEGER NOT NULL REFERENCES sections(section_id),
        product_name TEXT NOT NULL,
        quantity_in_stock INTEGER NOT NULL,
        price_per_unit REAL NOT NULL,
        is_product_available BOOLEAN NOT NULL DEFAULT 1,
        UNIQUE (section_id, product_name)
    )
    "#,
];

/// Create the sections and products tables if they do not exist. Uniqueness on
/// `section_name` and `(section_id, product_name)` is declared here so racing
/// duplicate writes are rejected by the store even when the service-level
/// check passed for both.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in SCHEMA {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

/// Insert sample sections and products. No-op when any section already exists.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<(), AppError> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sections")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    let mut tx = pool.begin().await?;
    let (electronics,): (i64,) =
        sqlx::query_as("INSERT INTO sections (section_name) VALUES (?) RETURNING section_id")
            .bind("Electronics")
            .fetch_one(&mut *tx)
            .await?;
    let (food,): (i64,) =
        sqlx::query_as("INSERT INTO sections (section_name) VALUES (?) RETURNING section_id")
            .bind("Food and Drinks")
            .fetch_one(&mut *tx)
            .await?;

    let samples: [(i64, &str, i64, f64); 4] = [
        (electronics, "Laptop", 50, 1000.0),
        (electronics, "Smartphone", 200, 500.0),
        (food, "Canned Beans", 100, 2.0),
        (food, "Soda", 300, 1.0),
    ];
    for (section_id, name, qty, price) in samples {
        sqlx::query(
            "INSERT INTO products (section_id, product_name, quantity_in_stock, price_per_unit, is_product_available) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(section_id)
        .bind(name)
        .bind(qty)
        .bind(price)
        .bind(true)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;
    tracing::info!("seeded demo sections and products");
    Ok(())
}
