//! # Player Collections
//!
//! [`PlayerCollection`] pairs an ordered record sequence with a shared
//! [`AttributeIndex`] and exposes chainable, immutable filters.
//!
//! ## Root vs. Descendant
//!
//! A **root** collection is built from a freshly fetched record sequence
//! ([`PlayerCollection::from_records`]); this is the one moment the index is
//! built. Every filter produces a **descendant**: a new collection holding a
//! narrowed position set and `Arc` references to the *same* records and
//! index. Nothing is ever rebuilt, copied, or mutated on the filter path.
//!
//! ## Chaining Semantics
//!
//! Each filter computes its match set against the shared root index, then
//! intersects it with the caller's current positions. Because every filter
//! consults the same untouched index, chaining is order-independent:
//!
//! ```
//! # use steamdex::PlayerCollection;
//! # use steamdex::model::PlayerRecord;
//! # let collection = PlayerCollection::from_records(Vec::<PlayerRecord>::new());
//! let a = collection.by_country(["RU"]).is_playing();
//! let b = collection.is_playing().by_country(["RU"]);
//! assert_eq!(a.count(), b.count());
//! ```
//!
//! Records whose attribute is absent for a criterion never match filters on
//! it, neither the inclusive nor the exclusive form. Filtering an empty
//! collection, or with values nothing holds, yields an empty collection.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::attributes::{AttrValue, Criterion};
use crate::index::AttributeIndex;
use crate::model::{PlayerRecord, Status};

/// An ordered, immutable set of player records with chainable filters.
#[derive(Debug, Clone)]
pub struct PlayerCollection {
    records: Arc<Vec<PlayerRecord>>,
    index: Arc<AttributeIndex>,
    /// Surviving root positions, ascending.
    positions: Vec<usize>,
}

impl PlayerCollection {
    /// Build a root collection, indexing the record sequence.
    pub fn from_records(records: Vec<PlayerRecord>) -> Self {
        let index = AttributeIndex::build(&records);
        Self {
            positions: (0..records.len()).collect(),
            records: Arc::new(records),
            index: Arc::new(index),
        }
    }

    /// Number of records currently held.
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// All held records, in original fetch order.
    pub fn players(&self) -> Vec<&PlayerRecord> {
        self.iter().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.positions.iter().map(|&p| &self.records[p])
    }

    /// The nth held record (in fetch order), if any.
    pub fn get(&self, n: usize) -> Option<&PlayerRecord> {
        self.positions.get(n).map(|&p| &self.records[p])
    }

    /// Root positions of the held records. Mostly useful for assertions.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Keep the records whose `criterion` value is any of `values` (union
    /// over the listed values, intersected with the current set).
    pub fn by_criterion<I>(&self, criterion: Criterion, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<AttrValue>,
    {
        let values: Vec<AttrValue> = values.into_iter().map(Into::into).collect();
        let matched: BTreeSet<usize> = self.index.matches(criterion, &values);
        let positions = self
            .positions
            .iter()
            .copied()
            .filter(|p| matched.contains(p))
            .collect();
        self.narrowed(positions)
    }

    /// Keep records with any of the given presence states.
    pub fn by_status<I>(&self, statuses: I) -> Self
    where
        I: IntoIterator<Item = Status>,
    {
        self.by_criterion(Criterion::Status, statuses)
    }

    /// Keep records whose status is present and *not* among `excluded`.
    ///
    /// Complements against the closed [`Status::ALL`] domain and delegates to
    /// the inclusive form; records with an absent (gated) status match
    /// neither side. Open-domain criteria have no exclusive form because
    /// their domains cannot be enumerated from the index.
    pub fn exclude_status<I>(&self, excluded: I) -> Self
    where
        I: IntoIterator<Item = Status>,
    {
        let excluded: Vec<Status> = excluded.into_iter().collect();
        let kept = Status::ALL.iter().copied().filter(|s| !excluded.contains(s));
        self.by_status(kept)
    }

    /// Keep records located in any of the given country codes.
    pub fn by_country<I, S>(&self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.by_criterion(Criterion::Country, codes.into_iter().map(Into::into))
    }

    /// Keep records located in any of the given locality codes.
    pub fn by_locality<I, S>(&self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.by_criterion(Criterion::Locality, codes.into_iter().map(Into::into))
    }

    /// Keep records currently playing any of the given games.
    pub fn by_game<I, S>(&self, game_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.by_criterion(Criterion::Game, game_ids.into_iter().map(Into::into))
    }

    /// Keep records with an active game session.
    pub fn is_playing(&self) -> Self {
        self.by_criterion(Criterion::IsPlaying, [true])
    }

    /// Keep private profiles.
    pub fn is_private(&self) -> Self {
        self.by_criterion(Criterion::Private, [true])
    }

    /// Keep public profiles.
    pub fn is_public(&self) -> Self {
        self.by_criterion(Criterion::Private, [false])
    }

    fn narrowed(&self, positions: Vec<usize>) -> Self {
        Self {
            records: Arc::clone(&self.records),
            index: Arc::clone(&self.index),
            positions,
        }
    }
}
