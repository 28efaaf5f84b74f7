//! # Attribute Index
//!
//! An inverted index over a record sequence: `(criterion, value)` → the
//! ascending positions of the records holding that value. Built exactly once,
//! when the root collection is constructed, and never touched again: every
//! filtered descendant reads the same index through a shared reference.
//!
//! Positions are *root* positions (original insertion order). Filters compute
//! match sets against this index and intersect them with their current
//! position set, which is what makes filter chaining order-independent.

use std::collections::{BTreeSet, HashMap};

use crate::attributes::{AttrValue, Criterion};
use crate::model::PlayerRecord;

/// Inverted index from `(criterion, value)` to ordered record positions.
#[derive(Debug, Default)]
pub struct AttributeIndex {
    buckets: HashMap<Criterion, HashMap<AttrValue, Vec<usize>>>,
}

impl AttributeIndex {
    /// Build the index for a record sequence. The only population site:
    /// O(R·C) over R records and the fixed criterion registry.
    pub fn build(records: &[PlayerRecord]) -> Self {
        let mut buckets: HashMap<Criterion, HashMap<AttrValue, Vec<usize>>> = HashMap::new();
        for (position, record) in records.iter().enumerate() {
            for criterion in Criterion::ALL {
                if let Some(value) = criterion.extract(record) {
                    buckets
                        .entry(criterion)
                        .or_default()
                        .entry(value)
                        .or_default()
                        .push(position);
                }
            }
        }
        Self { buckets }
    }

    /// The positions holding `value` for `criterion`, in insertion order.
    pub fn bucket(&self, criterion: Criterion, value: &AttrValue) -> Option<&[usize]> {
        self.buckets
            .get(&criterion)?
            .get(value)
            .map(Vec::as_slice)
    }

    /// Union of the buckets for every listed value, deduplicated.
    ///
    /// Unknown criteria and values without a bucket contribute nothing; the
    /// result may be empty but the call never fails.
    pub fn matches(&self, criterion: Criterion, values: &[AttrValue]) -> BTreeSet<usize> {
        let mut positions = BTreeSet::new();
        if let Some(by_value) = self.buckets.get(&criterion) {
            for value in values {
                if let Some(bucket) = by_value.get(value) {
                    positions.extend(bucket.iter().copied());
                }
            }
        }
        positions
    }
}
