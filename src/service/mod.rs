pub mod product;
pub mod section;
pub mod validation;
