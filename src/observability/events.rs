//! Observable catalog events
//!
//! Every log line names one of these events; the logger takes the typed
//! event rather than a bare string so event names cannot drift.

use std::fmt;

/// Observable events in a catalog's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Catalog constructed and ready
    CatalogOpen,
    /// Schema read from disk
    SchemaLoaded,
    /// Initial bulk load complete
    CatalogLoaded,
    /// Directories re-derived from the store
    DirectoryRebuild,

    // Writes
    /// Item inserted and indexed
    ItemAdded,
    /// Item removed and pruned from every directory
    ItemRemoved,
    /// Insert rejected: key already present
    DuplicateRejected,
    /// Insert rejected: item failed validation
    ValidationRejected,

    // Queries
    /// Exact-match lookup answered
    LookupComplete,
    /// Range lookup answered
    RangeLookupComplete,
    /// Combined query answered
    CombinedQueryComplete,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::CatalogOpen => "CATALOG_OPEN",
            Event::SchemaLoaded => "SCHEMA_LOADED",
            Event::CatalogLoaded => "CATALOG_LOADED",
            Event::DirectoryRebuild => "DIRECTORY_REBUILD",

            Event::ItemAdded => "ITEM_ADDED",
            Event::ItemRemoved => "ITEM_REMOVED",
            Event::DuplicateRejected => "DUPLICATE_REJECTED",
            Event::ValidationRejected => "VALIDATION_REJECTED",

            Event::LookupComplete => "LOOKUP_COMPLETE",
            Event::RangeLookupComplete => "RANGE_LOOKUP_COMPLETE",
            Event::CombinedQueryComplete => "COMBINED_QUERY_COMPLETE",
        }
    }

    /// Returns true if this event reports a rejected operation
    pub fn is_reject(&self) -> bool {
        matches!(self, Event::DuplicateRejected | Event::ValidationRejected)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_have_string_representation() {
        let events = [
            Event::CatalogOpen,
            Event::SchemaLoaded,
            Event::CatalogLoaded,
            Event::DirectoryRebuild,
            Event::ItemAdded,
            Event::ItemRemoved,
            Event::DuplicateRejected,
            Event::ValidationRejected,
            Event::LookupComplete,
            Event::RangeLookupComplete,
            Event::CombinedQueryComplete,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_reject_events() {
        assert!(Event::DuplicateRejected.is_reject());
        assert!(Event::ValidationRejected.is_reject());
        assert!(!Event::ItemAdded.is_reject());
    }

    #[test]
    fn test_event_display() {
        assert_eq!(format!("{}", Event::ItemAdded), "ITEM_ADDED");
        assert_eq!(
            format!("{}", Event::CombinedQueryComplete),
            "COMBINED_QUERY_COMPLETE"
        );
    }
}
