//! # Data Transfer Objects
//!
//! Item representations and the validation rules they enforce on construction.

pub mod types;
pub mod validation;

pub use types::{Count, Health, ItemId, NumericItem, TextItem, Version};
pub use validation::{
    check_item_id, check_number, check_text, check_version, ValidationError, ValidationResult,
};
