//! Metrics registry for kardex
//!
//! Counters only, monotonic, reset only on construction. Counters use
//! atomic increments with Relaxed ordering so a snapshot can be taken from
//! another thread without locking.

use std::sync::atomic::{AtomicU64, Ordering};

/// Operational counters for one catalog instance
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Items successfully added and indexed
    items_added: AtomicU64,
    /// Items removed and pruned from directories
    items_removed: AtomicU64,
    /// Inserts rejected for a duplicate key
    duplicates_rejected: AtomicU64,
    /// Inserts rejected by validation
    validations_rejected: AtomicU64,
    /// Exact-match lookups answered
    lookups: AtomicU64,
    /// Range lookups answered
    range_lookups: AtomicU64,
    /// Combined queries answered
    combined_queries: AtomicU64,
    /// Directory rebuilds performed
    rebuilds: AtomicU64,
}

/// Point-in-time copy of all counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSnapshot {
    pub items_added: u64,
    pub items_removed: u64,
    pub duplicates_rejected: u64,
    pub validations_rejected: u64,
    pub lookups: u64,
    pub range_lookups: u64,
    pub combined_queries: u64,
    pub rebuilds: u64,
}

impl MetricsRegistry {
    /// Create a registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment items added
    pub fn increment_items_added(&self) {
        self.items_added.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment items removed
    pub fn increment_items_removed(&self) {
        self.items_removed.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment duplicate-key rejections
    pub fn increment_duplicates_rejected(&self) {
        self.duplicates_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment validation rejections
    pub fn increment_validations_rejected(&self) {
        self.validations_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment exact-match lookups
    pub fn increment_lookups(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment range lookups
    pub fn increment_range_lookups(&self) {
        self.range_lookups.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment combined queries
    pub fn increment_combined_queries(&self) {
        self.combined_queries.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment directory rebuilds
    pub fn increment_rebuilds(&self) {
        self.rebuilds.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a point-in-time snapshot of every counter
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            items_added: self.items_added.load(Ordering::Relaxed),
            items_removed: self.items_removed.load(Ordering::Relaxed),
            duplicates_rejected: self.duplicates_rejected.load(Ordering::Relaxed),
            validations_rejected: self.validations_rejected.load(Ordering::Relaxed),
            lookups: self.lookups.load(Ordering::Relaxed),
            range_lookups: self.range_lookups.load(Ordering::Relaxed),
            combined_queries: self.combined_queries.load(Ordering::Relaxed),
            rebuilds: self.rebuilds.load(Ordering::Relaxed),
        }
    }
}
