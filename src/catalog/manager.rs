//! Catalog Manager
//!
//! Owns the record store and all attribute directories and keeps them
//! synchronized.
//!
//! # API
//!
//! - `add_item(item)` - Validate, insert into the store, then index
//! - `remove_item(key)` - Remove from the store, prune every directory
//! - `get_item(key)` / `list_all()` - Store lookups
//! - `find_by_*` - Exact directory lookups returning raw key sets
//! - `find_by_price_range(min, max)` - Inclusive range lookup
//! - `combined_query(query)` - Conjunctive intersection across directories
//! - `rebuild_directories()` - Re-derive all directories from the store

use std::collections::BTreeMap;
use std::path::Path;

use crate::directory::{intersect_sorted, AttrValue, AttributeDirectory};
use crate::item::{Item, ItemKey};
use crate::observability::{Event, Logger, MetricsRegistry};
use crate::schema::{validate_item, Attribute, CatalogSchema};
use crate::store::RecordStore;

use super::errors::CatalogResult;
use super::query::CombinedQuery;

/// Query coordinator for one catalog instance.
///
/// Writes flow store-first: an item is inserted into the record store, then
/// propagated to every directory. Reads flow the other way: directories
/// produce candidate key sets that `resolve` materializes against the store.
pub struct CatalogManager {
    /// Canonical record state
    store: RecordStore,
    /// One directory per schema attribute
    directories: Vec<AttributeDirectory>,
    /// Operation counters
    metrics: MetricsRegistry,
}

impl CatalogManager {
    /// Creates a catalog for a schema.
    ///
    /// Fails if the schema itself is invalid (empty, duplicate attributes).
    pub fn new(schema: CatalogSchema) -> CatalogResult<Self> {
        schema.validate_structure()?;
        Ok(Self::from_validated(schema))
    }

    /// Creates a catalog with the stock category/supplier/price layout.
    pub fn with_standard_schema() -> Self {
        Self::from_validated(CatalogSchema::standard())
    }

    /// Creates a catalog from a schema JSON file.
    pub fn from_schema_file(path: &Path) -> CatalogResult<Self> {
        let schema = CatalogSchema::from_json_file(path)?;
        Logger::info(
            Event::SchemaLoaded,
            &[("path", &path.display().to_string())],
        );
        Ok(Self::from_validated(schema))
    }

    fn from_validated(schema: CatalogSchema) -> Self {
        let directories: Vec<AttributeDirectory> = schema
            .attributes
            .iter()
            .map(AttributeDirectory::from_spec)
            .collect();

        Logger::info(
            Event::CatalogOpen,
            &[("directories", &directories.len().to_string())],
        );

        Self {
            store: RecordStore::new(),
            directories,
            metrics: MetricsRegistry::new(),
        }
    }

    // =========================================================================
    // Write path
    // =========================================================================

    /// Adds an item: validate, insert into the store, then index.
    ///
    /// Indexing only happens after a successful store insert, so a rejected
    /// item (invalid or duplicate key) leaves store and directories
    /// untouched.
    pub fn add_item(&mut self, item: Item) -> CatalogResult<()> {
        if let Err(err) = validate_item(&item) {
            self.metrics.increment_validations_rejected();
            Logger::warn(
                Event::ValidationRejected,
                &[("key", item.key()), ("reason", &err.to_string())],
            );
            return Err(err.into());
        }

        if let Err(err) = self.store.insert(item.clone()) {
            self.metrics.increment_duplicates_rejected();
            Logger::warn(Event::DuplicateRejected, &[("key", item.key())]);
            return Err(err.into());
        }

        for directory in &mut self.directories {
            directory.index(&item);
        }

        self.metrics.increment_items_added();
        Logger::info(Event::ItemAdded, &[("key", item.key())]);
        Ok(())
    }

    /// Removes an item by key, pruning it from every directory.
    ///
    /// Idempotent: an absent key returns `None` and changes nothing.
    pub fn remove_item(&mut self, key: &str) -> Option<Item> {
        let removed = self.store.remove(key)?;

        for directory in &mut self.directories {
            directory.unindex(&removed);
        }

        self.metrics.increment_items_removed();
        Logger::info(Event::ItemRemoved, &[("key", key)]);
        Some(removed)
    }

    /// Bulk-loads items in order, aborting on the first failure.
    ///
    /// The error of the failing item is propagated; items loaded before it
    /// remain in the catalog.
    pub fn load_initial(&mut self, items: Vec<Item>) -> CatalogResult<usize> {
        let count = items.len();
        for item in items {
            self.add_item(item)?;
        }

        Logger::info(Event::CatalogLoaded, &[("items", &count.to_string())]);
        Ok(count)
    }

    /// Clears every directory and re-derives it from the store.
    ///
    /// Directories are derived state; this restores the indexing invariant
    /// from the canonical records alone.
    pub fn rebuild_directories(&mut self) {
        for directory in &mut self.directories {
            directory.clear();
            for item in self.store.list_all() {
                directory.index(item);
            }
        }

        self.metrics.increment_rebuilds();
        Logger::info(
            Event::DirectoryRebuild,
            &[("items", &self.store.len().to_string())],
        );
    }

    // =========================================================================
    // Read path
    // =========================================================================

    /// Looks up an item by key.
    pub fn get_item(&self, key: &str) -> Option<&Item> {
        self.store.get(key)
    }

    /// Returns all current items in key order.
    pub fn list_all(&self) -> Vec<&Item> {
        self.store.list_all()
    }

    /// Number of items in the catalog.
    pub fn item_count(&self) -> usize {
        self.store.len()
    }

    /// Keys of items in a category.
    pub fn find_by_category(&self, category: &str) -> Vec<ItemKey> {
        self.find_exact(Attribute::Category, &AttrValue::from_text(category))
    }

    /// Keys of items from a supplier.
    pub fn find_by_supplier(&self, supplier: &str) -> Vec<ItemKey> {
        self.find_exact(Attribute::Supplier, &AttrValue::from_text(supplier))
    }

    /// Keys of items with an exact price.
    pub fn find_by_price(&self, price: f64) -> Vec<ItemKey> {
        self.find_exact(Attribute::Price, &AttrValue::from_price(price))
    }

    /// Keys of items whose price lies in `[min, max]`, bounds inclusive.
    ///
    /// Fails if the price directory is configured discrete; a schema with no
    /// price directory yields an empty result.
    pub fn find_by_price_range(&self, min: f64, max: f64) -> CatalogResult<Vec<ItemKey>> {
        let keys = self.range_keys(min, max)?;

        self.metrics.increment_range_lookups();
        Logger::trace(
            Event::RangeLookupComplete,
            &[("matches", &keys.len().to_string())],
        );
        Ok(keys)
    }

    /// Answers a conjunctive query across the catalog's directories.
    ///
    /// The base set is every key in the store; each present filter narrows
    /// it by intersection. A query with no filters returns the full key set.
    pub fn combined_query(&self, query: &CombinedQuery) -> CatalogResult<Vec<ItemKey>> {
        let mut result = self.store.keys();

        if let Some(category) = &query.category {
            let keys = self.directory_lookup(Attribute::Category, &AttrValue::from_text(category));
            result = intersect_sorted(&result, &keys);
        }

        if let Some(supplier) = &query.supplier {
            let keys = self.directory_lookup(Attribute::Supplier, &AttrValue::from_text(supplier));
            result = intersect_sorted(&result, &keys);
        }

        if let Some(range) = &query.price_range {
            let keys = self.range_keys(range.min, range.max)?;
            result = intersect_sorted(&result, &keys);
        }

        self.metrics.increment_combined_queries();
        Logger::trace(
            Event::CombinedQueryComplete,
            &[
                ("filters", &query.filter_count().to_string()),
                ("matches", &result.len().to_string()),
            ],
        );
        Ok(result)
    }

    /// Materializes keys against the store, skipping keys with no record.
    ///
    /// Presentation layers format the returned items; the catalog itself
    /// renders nothing.
    pub fn resolve(&self, keys: &[ItemKey]) -> Vec<&Item> {
        keys.iter().filter_map(|key| self.store.get(key)).collect()
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// The directory for an attribute, if the schema indexes it.
    pub fn directory(&self, attribute: Attribute) -> Option<&AttributeDirectory> {
        self.directories.iter().find(|d| d.attribute() == attribute)
    }

    /// Read-only snapshot of one directory's index, for debugging.
    pub fn dump_directory(
        &self,
        attribute: Attribute,
    ) -> Option<&BTreeMap<AttrValue, Vec<ItemKey>>> {
        self.directory(attribute).map(AttributeDirectory::dump)
    }

    /// Operation counters for this catalog.
    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn find_exact(&self, attribute: Attribute, value: &AttrValue) -> Vec<ItemKey> {
        let keys = self.directory_lookup(attribute, value);

        self.metrics.increment_lookups();
        Logger::trace(
            Event::LookupComplete,
            &[
                ("attribute", attribute.as_str()),
                ("matches", &keys.len().to_string()),
            ],
        );
        keys
    }

    /// Raw directory lookup; an unindexed attribute matches nothing.
    fn directory_lookup(&self, attribute: Attribute, value: &AttrValue) -> Vec<ItemKey> {
        self.directory(attribute)
            .map(|d| d.lookup(value))
            .unwrap_or_default()
    }

    fn range_keys(&self, min: f64, max: f64) -> CatalogResult<Vec<ItemKey>> {
        match self.directory(Attribute::Price) {
            Some(directory) => Ok(directory
                .range_lookup(&AttrValue::from_price(min), &AttrValue::from_price(max))?),
            None => Ok(Vec::new()),
        }
    }
}
