//! Combined query model
//!
//! A combined query is a conjunction of optional per-attribute filters.
//! Absent filters match everything; a query with no filters matches the
//! whole catalog.

use serde::{Deserialize, Serialize};

/// Inclusive price range filter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lower bound, inclusive
    pub min: f64,
    /// Upper bound, inclusive
    pub max: f64,
}

impl PriceRange {
    /// Creates an inclusive range
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true if a price falls inside the range, bounds included
    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Conjunctive filter across the catalog's directories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombinedQuery {
    /// Exact category match, if present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Exact supplier match, if present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    /// Inclusive price range, if present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
}

impl CombinedQuery {
    /// An unfiltered query (matches the whole catalog)
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a category filter
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Adds a supplier filter
    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = Some(supplier.into());
        self
    }

    /// Adds an inclusive price range filter
    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.price_range = Some(PriceRange::new(min, max));
        self
    }

    /// Returns true if no filter is present
    pub fn is_unfiltered(&self) -> bool {
        self.category.is_none() && self.supplier.is_none() && self.price_range.is_none()
    }

    /// Number of filters present
    pub fn filter_count(&self) -> usize {
        usize::from(self.category.is_some())
            + usize::from(self.supplier.is_some())
            + usize::from(self.price_range.is_some())
    }
}
