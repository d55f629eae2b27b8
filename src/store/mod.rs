//! Record Store subsystem for kardex
//!
//! The record store holds the canonical in-memory state of all items. It is
//! the single source of truth for item existence and content; directories
//! only hold derived key references.
//!
//! # Design Principles
//!
//! - Canonical ownership: one item value per key, owned here
//! - Key uniqueness enforced on insert
//! - Deterministic: BTreeMap iteration order
//!
//! # Invariants
//!
//! - Directory updates occur AFTER store writes
//! - Removing an absent key is not an error

mod errors;
mod records;

pub use errors::{StoreError, StoreResult};
pub use records::RecordStore;
