//! Directory error types
//!
//! A lookup that matches nothing returns an empty result, never an error.
//! The only failure a directory raises is a range lookup against a discrete
//! ordering, which is a contract violation by the caller and not recoverable
//! locally.

use thiserror::Error;

use crate::schema::Attribute;

/// Result type for directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Attribute directory errors
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// Range lookup attempted on a discrete directory
    #[error("range lookup requires a continuous directory, '{attribute}' is discrete")]
    RangeUnsupported {
        /// The discrete attribute that was queried
        attribute: Attribute,
    },
}
