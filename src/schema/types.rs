//! Catalog schema type definitions
//!
//! Attributes are a closed enumeration: each one knows how to read its value
//! out of an item, which replaces by-name dynamic field access with static
//! extractors bound to a directory at construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::{SchemaError, SchemaResult};

/// The indexable item attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    /// Item category (discrete)
    Category,
    /// Item supplier (discrete)
    Supplier,
    /// Unit price (continuous)
    Price,
}

impl Attribute {
    /// Returns the attribute name for logs and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Category => "category",
            Attribute::Supplier => "supplier",
            Attribute::Price => "price",
        }
    }

    /// The ordering discipline this attribute carries in the standard schema
    pub fn default_ordering(&self) -> OrderingKind {
        match self {
            Attribute::Category | Attribute::Supplier => OrderingKind::Discrete,
            Attribute::Price => OrderingKind::Continuous,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Value-ordering discipline of a directory.
///
/// Discrete directories answer equality lookups only; continuous directories
/// additionally answer inclusive range lookups over the value's total order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderingKind {
    /// Equality-only, no meaningful ordering
    Discrete,
    /// Totally ordered, supports range queries
    Continuous,
}

/// One attribute the catalog indexes, with its ordering discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSpec {
    /// Attribute to index
    pub attribute: Attribute,
    /// Ordering discipline, fixed at directory construction
    pub ordering: OrderingKind,
}

impl AttributeSpec {
    /// Spec with the attribute's default ordering
    pub fn standard(attribute: Attribute) -> Self {
        Self {
            attribute,
            ordering: attribute.default_ordering(),
        }
    }
}

/// The set of directories a catalog maintains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSchema {
    /// Indexed attributes, one directory each
    pub attributes: Vec<AttributeSpec>,
}

impl CatalogSchema {
    /// The stock layout: category and supplier discrete, price continuous.
    pub fn standard() -> Self {
        Self {
            attributes: vec![
                AttributeSpec::standard(Attribute::Category),
                AttributeSpec::standard(Attribute::Supplier),
                AttributeSpec::standard(Attribute::Price),
            ],
        }
    }

    /// Validates the schema structure itself (not an item).
    ///
    /// A schema must index at least one attribute and may not list the same
    /// attribute twice.
    pub fn validate_structure(&self) -> SchemaResult<()> {
        if self.attributes.is_empty() {
            return Err(SchemaError::EmptySchema);
        }

        for (i, spec) in self.attributes.iter().enumerate() {
            if self.attributes[..i]
                .iter()
                .any(|prior| prior.attribute == spec.attribute)
            {
                return Err(SchemaError::DuplicateAttribute(spec.attribute));
            }
        }

        Ok(())
    }

    /// Returns the spec for an attribute, if the schema indexes it.
    pub fn spec(&self, attribute: Attribute) -> Option<&AttributeSpec> {
        self.attributes.iter().find(|s| s.attribute == attribute)
    }
}

impl Default for CatalogSchema {
    fn default() -> Self {
        Self::standard()
    }
}
