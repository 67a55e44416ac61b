//! Section CRUD against the store. Stateless functions taking a pool handle.

use crate::error::AppError;
use crate::model::Section;
use sqlx::SqlitePool;

const SELECT: &str = "SELECT section_id, section_name FROM sections";

pub async fn list(pool: &SqlitePool) -> Result<Vec<Section>, AppError> {
    tracing::debug!("fetching all sections");
    let sections = sqlx::query_as::<_, Section>(SELECT).fetch_all(pool).await?;
    Ok(sections)
}

pub async fn get_by_id(pool: &SqlitePool, section_id: i64) -> Result<Section, AppError> {
    sqlx::query_as::<_, Section>(&format!("{SELECT} WHERE section_id = ?"))
        .bind(section_id)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::SectionNotFound(section_id))
}

pub async fn create(pool: &SqlitePool, section_name: &str) -> Result<Section, AppError> {
    let existing: Option<(i64,)> =
        sqlx::query_as("SELECT section_id FROM sections WHERE section_name = ?")
            .bind(section_name)
            .fetch_optional(pool)
            .await?;
    if existing.is_some() {
        return Err(AppError::SectionAlreadyExists(section_name.to_string()));
    }

    let section = sqlx::query_as::<_, Section>(
        "INSERT INTO sections (section_name) VALUES (?) RETURNING section_id, section_name",
    )
    .bind(section_name)
    .fetch_one(pool)
    .await?;
    tracing::info!(section_id = section.section_id, name = %section.section_name, "created section");
    Ok(section)
}

/// Rename a section. The collision check skips the section's own row, so
/// renaming to the current name succeeds.
pub async fn update(
    pool: &SqlitePool,
    section_id: i64,
    section_name: &str,
) -> Result<Section, AppError> {
    get_by_id(pool, section_id).await?;

    let colliding: Option<(i64,)> = sqlx::query_as(
        "SELECT section_id FROM sections WHERE section_name = ? AND section_id <> ?",
    )
    .bind(section_name)
    .bind(section_id)
    .fetch_optional(pool)
    .await?;
    if colliding.is_some() {
        return Err(AppError::SectionAlreadyExists(section_name.to_string()));
    }

    let section = sqlx::query_as::<_, Section>(
        "UPDATE sections SET section_name = ? WHERE section_id = ? \
         RETURNING section_id, section_name",
    )
    .bind(section_name)
    .bind(section_id)
    .fetch_one(pool)
    .await?;
    tracing::info!(section_id, name = %section.section_name, "renamed section");
    Ok(section)
}

/// Delete a section and every product it owns, children first, in one
/// transaction. Returns the section's last-known data.
pub async fn delete(pool: &SqlitePool, section_id: i64) -> Result<Section, AppError> {
    let section = get_by_id(pool, section_id).await?;

    let mut tx = pool.begin().await?;
    let removed = sqlx::query("DELETE FROM products WHERE section_id = ?")
        .bind(section_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM sections WHERE section_id = ?")
        .bind(section_id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    tracing::info!(
        section_id,
        products_removed = removed.rows_affected(),
        "deleted section"
    );
    Ok(section)
}
