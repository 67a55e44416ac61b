//! Section and product entities and their JSON projections.

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Section {
    pub section_id: i64,
    pub section_name: String,
}

/// Product joined with its owning section's name. This is the shape every
/// product endpoint returns; the section name is derived and read-only.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ProductView {
    pub product_id: i64,
    pub section_id: i64,
    pub product_name: String,
    pub quantity_in_stock: i64,
    /// Stored as REAL; integer input is accepted and kept exactly, no rounding.
    pub price_per_unit: f64,
    pub is_product_available: bool,
    pub section: String,
}

/// Validated section request body.
#[derive(Debug, Clone)]
pub struct SectionInput {
    pub section_name: String,
}

/// Validated product request body. Used for both create and update; update
/// overwrites every field.
#[derive(Debug, Clone)]
pub struct ProductInput {
    pub section_id: i64,
    pub product_name: String,
    pub quantity_in_stock: i64,
    pub price_per_unit: f64,
    pub is_product_available: bool,
}
