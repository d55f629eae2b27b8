//! BTreeMap-based attribute directory
//!
//! A directory maps attribute values to sorted, deduplicated vecs of item
//! keys. Exact lookup is a single tree probe; range lookup walks the tree
//! between inclusive bounds, so it costs O(log n + matches) over distinct
//! values rather than a full scan.

use std::collections::BTreeMap;
use std::ops::Bound;

use crate::item::{Item, ItemKey};
use crate::schema::{Attribute, AttributeSpec, OrderingKind};

use super::errors::{DirectoryError, DirectoryResult};
use super::value::AttrValue;

/// A single attribute directory.
///
/// The attribute and ordering discipline are fixed at construction; the
/// directory reads its value out of each item with a static extractor.
#[derive(Debug)]
pub struct AttributeDirectory {
    attribute: Attribute,
    ordering: OrderingKind,
    entries: BTreeMap<AttrValue, Vec<ItemKey>>,
}

impl AttributeDirectory {
    /// Creates an empty directory for an attribute
    pub fn new(attribute: Attribute, ordering: OrderingKind) -> Self {
        Self {
            attribute,
            ordering,
            entries: BTreeMap::new(),
        }
    }

    /// Creates a directory from a schema spec
    pub fn from_spec(spec: &AttributeSpec) -> Self {
        Self::new(spec.attribute, spec.ordering)
    }

    /// The attribute this directory indexes
    pub fn attribute(&self) -> Attribute {
        self.attribute
    }

    /// The ordering discipline fixed at construction
    pub fn ordering(&self) -> OrderingKind {
        self.ordering
    }

    /// Reads this directory's attribute value out of an item.
    fn value_of(&self, item: &Item) -> AttrValue {
        match self.attribute {
            Attribute::Category => AttrValue::from_text(&item.category),
            Attribute::Supplier => AttrValue::from_text(&item.supplier),
            Attribute::Price => AttrValue::from_price(item.price),
        }
    }

    /// Indexes an item under its current attribute value.
    ///
    /// Keys are kept sorted; indexing the same key under the same value
    /// again is a no-op, so duplicate indexing cannot corrupt results.
    pub fn index(&mut self, item: &Item) {
        let value = self.value_of(item);
        let keys = self.entries.entry(value).or_default();

        match keys.binary_search(&item.key) {
            Ok(_) => {} // Already indexed
            Err(pos) => keys.insert(pos, item.key.clone()),
        }
    }

    /// Removes an item's key from under its attribute value.
    ///
    /// Drops the value entry entirely once its key set is empty.
    pub fn unindex(&mut self, item: &Item) {
        let value = self.value_of(item);

        if let Some(keys) = self.entries.get_mut(&value) {
            if let Ok(pos) = keys.binary_search(&item.key) {
                keys.remove(pos);
            }
            if keys.is_empty() {
                self.entries.remove(&value);
            }
        }
    }

    /// Exact-match lookup.
    ///
    /// Returns the keys indexed under a value, sorted ascending; an empty
    /// vec (not an error) for values never indexed.
    pub fn lookup(&self, value: &AttrValue) -> Vec<ItemKey> {
        self.entries.get(value).cloned().unwrap_or_default()
    }

    /// Inclusive range lookup over the value order.
    ///
    /// Fails with `RangeUnsupported` on a discrete directory regardless of
    /// arguments. `min > max` yields an empty result. Returns the union of
    /// keys for every indexed value in `[min, max]`, sorted ascending.
    pub fn range_lookup(&self, min: &AttrValue, max: &AttrValue) -> DirectoryResult<Vec<ItemKey>> {
        if self.ordering == OrderingKind::Discrete {
            return Err(DirectoryError::RangeUnsupported {
                attribute: self.attribute,
            });
        }

        if min > max {
            return Ok(Vec::new());
        }

        let mut result = Vec::new();
        for keys in self
            .entries
            .range((Bound::Included(min), Bound::Included(max)))
            .map(|(_, keys)| keys)
        {
            result.extend(keys.iter().cloned());
        }

        // Keys under one value never repeat, and one item holds one value
        // per directory, so sorting alone restores set semantics.
        result.sort();
        Ok(result)
    }

    /// Intersection of this directory's lookup with another's.
    pub fn intersect_with(
        &self,
        other: &AttributeDirectory,
        value_self: &AttrValue,
        value_other: &AttrValue,
    ) -> Vec<ItemKey> {
        intersect_sorted(&self.lookup(value_self), &other.lookup(value_other))
    }

    /// Read-only snapshot of the full index, for debugging.
    pub fn dump(&self) -> &BTreeMap<AttrValue, Vec<ItemKey>> {
        &self.entries
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of distinct indexed values
    pub fn value_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of indexed keys
    pub fn key_count(&self) -> usize {
        self.entries.values().map(|v| v.len()).sum()
    }
}

/// Intersection of two ascending key slices, ascending output.
pub fn intersect_sorted(a: &[ItemKey], b: &[ItemKey]) -> Vec<ItemKey> {
    let mut result = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                result.push(a[i].clone());
                i += 1;
                j += 1;
            }
        }
    }

    result
}
