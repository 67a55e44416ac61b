//! Product CRUD against the store. Every read returns the product joined with
//! its owning section's name.

use crate::error::AppError;
use crate::model::{ProductInput, ProductView};
use sqlx::SqlitePool;

const SELECT: &str = "SELECT p.product_id, p.section_id, p.product_name, p.quantity_in_stock, \
     p.price_per_unit, p.is_product_available, s.section_name AS section \
     FROM products p JOIN sections s ON s.section_id = p.section_id";

pub async fn list(pool: &SqlitePool) -> Result<Vec<ProductView>, AppError> {
    tracing::debug!("fetching all products");
    let products = sqlx::query_as::<_, ProductView>(SELECT).fetch_all(pool).await?;
    Ok(products)
}

pub async fn get_by_id(pool: &SqlitePool, product_id: i64) -> Result<ProductView, AppError> {
    sqlx::query_as::<_, ProductView>(&format!("{SELECT} WHERE p.product_id = ?"))
        .bind(product_id)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::ProductNotFound(product_id))
}

async fn ensure_section_exists(pool: &SqlitePool, section_id: i64) -> Result<(), AppError> {
    let found: Option<(i64,)> = sqlx::query_as("SELECT section_id FROM sections WHERE section_id = ?")
        .bind(section_id)
        .fetch_optional(pool)
        .await?;
    match found {
        Some(_) => Ok(()),
        None => Err(AppError::InvalidSection(section_id)),
    }
}

/// Fails when `(section_id, product_name)` is already taken by a row other
/// than `exclude_id`. Passing `None` checks against every row.
async fn ensure_name_free(
    pool: &SqlitePool,
    section_id: i64,
    product_name: &str,
    exclude_id: Option<i64>,
) -> Result<(), AppError> {
    let taken: Option<(i64,)> = sqlx::query_as(
        "SELECT product_id FROM products \
         WHERE section_id = ? AND product_name = ? AND product_id <> ?",
    )
    .bind(section_id)
    .bind(product_name)
    .bind(exclude_id.unwrap_or(-1))
    .fetch_optional(pool)
    .await?;
    match taken {
        Some(_) => Err(AppError::ProductAlreadyExists {
            section_id,
            name: product_name.to_string(),
        }),
        None => Ok(()),
    }
}

pub async fn create(pool: &SqlitePool, input: &ProductInput) -> Result<ProductView, AppError> {
    ensure_section_exists(pool, input.section_id).await?;
    ensure_name_free(pool, input.section_id, &input.product_name, None).await?;

    let (product_id,): (i64,) = sqlx::query_as(
        "INSERT INTO products (section_id, product_name, quantity_in_stock, price_per_unit, is_product_available) \
         VALUES (?, ?, ?, ?, ?) RETURNING product_id",
    )
    .bind(input.section_id)
    .bind(&input.product_name)
    .bind(input.quantity_in_stock)
    .bind(input.price_per_unit)
    .bind(input.is_product_available)
    .fetch_one(pool)
    .await?;
    tracing::info!(product_id, name = %input.product_name, section_id = input.section_id, "created product");
    get_by_id(pool, product_id).await
}

/// Overwrite every field, including a move to a different section. The
/// uniqueness check skips the product's own row.
pub async fn update(
    pool: &SqlitePool,
    product_id: i64,
    input: &ProductInput,
) -> Result<ProductView, AppError> {
    get_by_id(pool, product_id).await?;
    ensure_section_exists(pool, input.section_id).await?;
    ensure_name_free(pool, input.section_id, &input.product_name, Some(product_id)).await?;

    sqlx::query(
        "UPDATE products SET section_id = ?, product_name = ?, quantity_in_stock = ?, \
         price_per_unit = ?, is_product_available = ? WHERE product_id = ?",
    )
    .bind(input.section_id)
    .bind(&input.product_name)
    .bind(input.quantity_in_stock)
    .bind(input.price_per_unit)
    .bind(input.is_product_available)
    .bind(product_id)
    .execute(pool)
    .await?;
    tracing::info!(product_id, "updated product");
    get_by_id(pool, product_id).await
}

/// Delete a product, returning its last-known data.
pub async fn delete(pool: &SqlitePool, product_id: i64) -> Result<ProductView, AppError> {
    let product = get_by_id(pool, product_id).await?;
    sqlx::query("DELETE FROM products WHERE product_id = ?")
        .bind(product_id)
        .execute(pool)
        .await?;
    tracing::info!(product_id, "deleted product");
    Ok(product)
}
