//! Attribute Directory subsystem for kardex
//!
//! Directories are derived, in-memory-only state: one per indexed attribute,
//! mapping attribute values to the keys of items holding that value. The
//! record store stays the source of truth; a directory can always be
//! re-derived from it.
//!
//! # Design Principles
//!
//! - Derived state: directories mirror the store, never own items
//! - Set semantics: a key appears at most once per value
//! - Deterministic: BTreeMap value order, sorted key vecs
//!
//! # Invariants
//!
//! - After any successful write-path operation, every stored item is indexed
//!   under its current attribute value, and no directory holds a key for a
//!   removed item
//! - Range lookups are only answered by continuous directories

mod errors;
mod tree;
mod value;

pub use errors::{DirectoryError, DirectoryResult};
pub use tree::{intersect_sorted, AttributeDirectory};
pub use value::AttrValue;
