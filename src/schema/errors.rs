//! Schema error types
//!
//! Schema errors are rejects: the offending operation terminates, the
//! catalog is left unchanged.

use thiserror::Error;

use super::types::Attribute;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema definition and item validation errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// Schema file unreadable or not valid JSON
    #[error("malformed catalog schema at {path}: {reason}")]
    MalformedSchema {
        /// Source path (or `<in-memory>`)
        path: String,
        /// What went wrong
        reason: String,
    },

    /// Schema defines no attributes
    #[error("catalog schema defines no attributes")]
    EmptySchema,

    /// Same attribute listed more than once
    #[error("attribute '{0}' listed more than once in catalog schema")]
    DuplicateAttribute(Attribute),

    /// Item rejected by validation
    #[error("item validation failed on {field}: {reason}")]
    ValidationFailed {
        /// Offending item field
        field: &'static str,
        /// What went wrong
        reason: String,
    },
}

impl SchemaError {
    /// Create a malformed schema error
    pub fn malformed_schema(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedSchema {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a validation failure for an item field
    pub fn validation_failed(field: &'static str, reason: impl Into<String>) -> Self {
        Self::ValidationFailed {
            field,
            reason: reason.into(),
        }
    }
}
