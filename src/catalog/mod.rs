//! Query Coordinator subsystem for kardex
//!
//! The catalog manager owns one record store and one attribute directory per
//! schema attribute, keeps them synchronized, and answers combined queries.
//!
//! # Invariants
//!
//! - Directories are only touched after a successful store insert; a
//!   duplicate-key reject leaves store and directories unchanged
//! - Removal prunes the removed key from every directory in the same
//!   operation; no reader observes a stale directory entry
//! - Every operation is a single synchronous step over the current snapshot;
//!   mutations take `&mut self`, so concurrent writers are excluded by the
//!   borrow checker (wrap the manager in a lock to share it across threads)

mod errors;
mod manager;
mod query;

pub use errors::{CatalogError, CatalogResult};
pub use manager::CatalogManager;
pub use query::{CombinedQuery, PriceRange};
