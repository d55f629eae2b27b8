//! Item validation
//!
//! Validation runs before the record store is touched; a rejected item
//! leaves the catalog unchanged. The validator does not mutate items and is
//! deterministic.

use crate::item::Item;

use super::errors::{SchemaError, SchemaResult};

/// Validates an item before insertion.
///
/// Rules:
/// - key, name, category, and supplier must be non-empty
/// - price must be finite and non-negative
pub fn validate_item(item: &Item) -> SchemaResult<()> {
    if item.key.trim().is_empty() {
        return Err(SchemaError::validation_failed("key", "must not be empty"));
    }

    if item.name.trim().is_empty() {
        return Err(SchemaError::validation_failed("name", "must not be empty"));
    }

    if item.category.trim().is_empty() {
        return Err(SchemaError::validation_failed(
            "category",
            "must not be empty",
        ));
    }

    if item.supplier.trim().is_empty() {
        return Err(SchemaError::validation_failed(
            "supplier",
            "must not be empty",
        ));
    }

    if !item.price.is_finite() {
        return Err(SchemaError::validation_failed("price", "must be finite"));
    }

    if item.price < 0.0 {
        return Err(SchemaError::validation_failed(
            "price",
            "must be non-negative",
        ));
    }

    Ok(())
}
