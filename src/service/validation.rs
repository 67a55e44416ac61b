//! Request body validation: required fields and primitive types per the
//! declared schema for each entity.

use crate::error::AppError;
use crate::model::{ProductInput, SectionInput};
use serde_json::Value;

fn required<'a>(body: &'a Value, field: &str) -> Result<&'a Value, AppError> {
    let obj = body
        .as_object()
        .ok_or_else(|| AppError::Validation("body must be a JSON object".into()))?;
    obj.get(field)
        .filter(|v| !v.is_null())
        .ok_or_else(|| AppError::Validation(format!("{field} is required")))
}

fn string_field(body: &Value, field: &str) -> Result<String, AppError> {
    let s = required(body, field)?
        .as_str()
        .ok_or_else(|| AppError::Validation(format!("{field} must be a string")))?;
    if s.is_empty() {
        return Err(AppError::Validation(format!("{field} must not be empty")));
    }
    Ok(s.to_string())
}

fn integer_field(body: &Value, field: &str) -> Result<i64, AppError> {
    required(body, field)?
        .as_i64()
        .ok_or_else(|| AppError::Validation(format!("{field} must be an integer")))
}

/// Accepts integer or decimal JSON numbers; no rounding is performed.
fn number_field(body: &Value, field: &str) -> Result<f64, AppError> {
    required(body, field)?
        .as_f64()
        .ok_or_else(|| AppError::Validation(format!("{field} must be a number")))
}

fn bool_field(body: &Value, field: &str) -> Result<bool, AppError> {
    required(body, field)?
        .as_bool()
        .ok_or_else(|| AppError::Validation(format!("{field} must be a boolean")))
}

pub fn section_input(body: &Value) -> Result<SectionInput, AppError> {
    Ok(SectionInput {
        section_name: string_field(body, "section_name")?,
    })
}

pub fn product_input(body: &Value) -> Result<ProductInput, AppError> {
    let section_id = integer_field(body, "section_id")?;
    let product_name = string_field(body, "product_name")?;
    let quantity_in_stock = integer_field(body, "quantity_in_stock")?;
    if quantity_in_stock < 0 {
        return Err(AppError::Validation(
            "quantity_in_stock must not be negative".into(),
        ));
    }
    let price_per_unit = number_field(body, "price_per_unit")?;
    let is_product_available = bool_field(body, "is_product_available")?;
    Ok(ProductInput {
        section_id,
        product_name,
        quantity_in_stock,
        price_per_unit,
        is_product_available,
    })
}
