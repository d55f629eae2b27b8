//! Coordinator error type
//!
//! The coordinator surfaces its collaborators' errors unchanged; it adds no
//! failure modes of its own.

use thiserror::Error;

use crate::directory::DirectoryError;
use crate::schema::SchemaError;
use crate::store::StoreError;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors surfaced by catalog operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Schema definition or item validation reject
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Record store reject (duplicate key)
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Directory reject (range on a discrete ordering)
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}
