//! # Filterable Attributes
//!
//! The query engine does not filter on arbitrary record fields: it filters on
//! a closed registry of **criteria**, each of which knows how to extract its
//! value from a [`PlayerRecord`]. The registry is the single source of truth
//! for what the index covers: adding a criterion means adding a variant here
//! and its extraction arm.
//!
//! | Criterion | Extraction | Domain |
//! |-----------|------------|--------|
//! | `Status` | `status()` (visibility-gated) | closed 7-value enum |
//! | `Country` | `country_code()` | open strings, or absent |
//! | `IsPlaying` | `gameid` presence | present-or-invisible boolean |
//! | `Locality` | `locality_code()` | open strings, or absent |
//! | `Game` | `game_id()` | open strings, or absent |
//! | `Private` | `is_private()` | boolean, always present |
//!
//! Extraction returning `None` means the record contributes no index entry
//! for that criterion and can neither match nor be excluded through it.

use crate::model::{PlayerRecord, Status};

/// An index key: one record's value for one criterion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttrValue {
    Bool(bool),
    Status(Status),
    Text(String),
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<Status> for AttrValue {
    fn from(value: Status) -> Self {
        AttrValue::Status(value)
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

/// A filterable attribute family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Status,
    Country,
    IsPlaying,
    Locality,
    Game,
    Private,
}

impl Criterion {
    /// Every criterion the index covers.
    pub const ALL: [Criterion; 6] = [
        Criterion::Status,
        Criterion::Country,
        Criterion::IsPlaying,
        Criterion::Locality,
        Criterion::Game,
        Criterion::Private,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Criterion::Status => "status",
            Criterion::Country => "country",
            Criterion::IsPlaying => "isplaying",
            Criterion::Locality => "locality",
            Criterion::Game => "game",
            Criterion::Private => "private",
        }
    }

    /// Extract this criterion's value from a record.
    ///
    /// `None` leaves the record invisible to queries on this criterion.
    pub fn extract(self, record: &PlayerRecord) -> Option<AttrValue> {
        match self {
            Criterion::Status => record.status().map(AttrValue::Status),
            Criterion::Country => record.country_code().map(AttrValue::from),
            // Presence-only: non-playing records get no bucket at all, so
            // there is no `Bool(false)` side to query.
            Criterion::IsPlaying => record.is_playing().then_some(AttrValue::Bool(true)),
            Criterion::Locality => record.locality_code().map(AttrValue::Text),
            Criterion::Game => record.game_id().map(AttrValue::Text),
            Criterion::Private => Some(AttrValue::Bool(record.is_private())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::PlayerBuilder;

    #[test]
    fn extraction_covers_present_attributes() {
        let player = PlayerBuilder::new("1")
            .status(Status::Online)
            .country("RU")
            .locality("77")
            .game("570", "Dota 2")
            .build();

        assert_eq!(
            Criterion::Status.extract(&player),
            Some(AttrValue::Status(Status::Online))
        );
        assert_eq!(Criterion::Country.extract(&player), Some(AttrValue::Text("RU".into())));
        assert_eq!(Criterion::IsPlaying.extract(&player), Some(AttrValue::Bool(true)));
        assert_eq!(Criterion::Locality.extract(&player), Some(AttrValue::Text("77".into())));
        assert_eq!(Criterion::Game.extract(&player), Some(AttrValue::Text("570".into())));
        assert_eq!(Criterion::Private.extract(&player), Some(AttrValue::Bool(false)));
    }

    #[test]
    fn absent_attributes_extract_to_none() {
        let player = PlayerBuilder::new("1").build();
        assert_eq!(Criterion::Country.extract(&player), None);
        assert_eq!(Criterion::Locality.extract(&player), None);
        assert_eq!(Criterion::Game.extract(&player), None);
        assert_eq!(Criterion::IsPlaying.extract(&player), None);
    }

    #[test]
    fn private_profile_extracts_no_status_but_a_private_flag() {
        let player = PlayerBuilder::new("1").status(Status::Online).private().build();
        assert_eq!(Criterion::Status.extract(&player), None);
        assert_eq!(Criterion::Private.extract(&player), Some(AttrValue::Bool(true)));
    }

    #[test]
    fn criterion_names_are_stable() {
        let names: Vec<&str> = Criterion::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec!["status", "country", "isplaying", "locality", "game", "private"]
        );
    }
}
