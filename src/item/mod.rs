//! Item record types for kardex
//!
//! An item is the canonical inventory record: immutable once created,
//! identified by a caller-assigned unique key. The record store owns the
//! canonical value per key; directories only hold derived key references.

mod record;

pub use record::{Item, ItemKey};
