//! The catalog item record
//!
//! Items are immutable once created. There is no in-place attribute update:
//! an update is modeled as remove + re-add with a new record value.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique item key, assigned at creation and never changed.
pub type ItemKey = String;

/// A single inventory item.
///
/// The fixed attribute set is: name, category, price, supplier.
/// `created_at` is catalog metadata and is not indexed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique key (primary identifier)
    pub key: ItemKey,
    /// Human-readable item name
    pub name: String,
    /// Category attribute (discrete)
    pub category: String,
    /// Unit price attribute (continuous)
    pub price: f64,
    /// Supplier attribute (discrete)
    pub supplier: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Create a new item, stamping the creation time.
    pub fn new(
        key: impl Into<ItemKey>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        supplier: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            category: category.into(),
            price,
            supplier: supplier.into(),
            created_at: Utc::now(),
        }
    }

    /// Returns the item key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Item[key = {}, name = {}, category = {}, price = {:.2}, supplier = {}]",
            self.key, self.name, self.category, self.price, self.supplier
        )
    }
}
