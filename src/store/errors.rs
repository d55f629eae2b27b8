//! Record store error types
//!
//! Absence is never an error here: missing keys surface as `None` or empty
//! results. The only failure the store raises is a duplicate key on insert.

use thiserror::Error;

use crate::item::ItemKey;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Insert attempted with a key that is already present
    #[error("item with key '{0}' already exists")]
    DuplicateKey(ItemKey),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_display() {
        let err = StoreError::DuplicateKey("P001".into());
        assert_eq!(err.to_string(), "item with key 'P001' already exists");
    }
}
