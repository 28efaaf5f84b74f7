//! # Domain Model: Player Records
//!
//! This module defines [`PlayerRecord`], the immutable attribute bag holding
//! one fetched profile, together with the [`Status`] presence enum and the
//! [`AvatarSize`] tiers.
//!
//! ## The Attribute Bag
//!
//! The player-summaries payload is a flat JSON object whose exact field set
//! varies per profile: private profiles omit most fields, idle profiles omit
//! the game fields, and Valve occasionally adds new ones. Rather than forcing
//! the payload into a rigid struct (and silently dropping what we did not
//! anticipate), a record keeps the raw `serde_json::Map` and exposes:
//!
//! 1. **Typed accessors** for the known fields (`nickname()`, `status()`, …).
//! 2. **A generic escape hatch**, [`PlayerRecord::attr`], for everything else.
//!
//! Absence is meaningful throughout: an accessor returning `None` means the
//! service did not include the field, and the record stays invisible to
//! queries on the matching criterion (see [`crate::index`]).
//!
//! ## Visibility Gating
//!
//! `status()` is gated: a private profile reports no presence state even when
//! the wire happens to carry one. `is_playing()` is deliberately *not* gated;
//! it derives from the raw `gameid` presence so that the playing criterion
//! stays independent of the visibility rule.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Presence state of a profile, mapped from the wire code 0–6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Offline,
    Online,
    Busy,
    Away,
    Snooze,
    LookingToTrade,
    LookingToPlay,
}

impl Status {
    /// The full enumerable status domain, in wire-code order.
    ///
    /// [`crate::collection::PlayerCollection::exclude_status`] complements
    /// against this list; exclusion only exists because the domain is closed.
    pub const ALL: [Status; 7] = [
        Status::Offline,
        Status::Online,
        Status::Busy,
        Status::Away,
        Status::Snooze,
        Status::LookingToTrade,
        Status::LookingToPlay,
    ];

    /// Map a `personastate` wire code to a status.
    pub fn from_code(code: i64) -> Option<Status> {
        match code {
            0 => Some(Status::Offline),
            1 => Some(Status::Online),
            2 => Some(Status::Busy),
            3 => Some(Status::Away),
            4 => Some(Status::Snooze),
            5 => Some(Status::LookingToTrade),
            6 => Some(Status::LookingToPlay),
            _ => None,
        }
    }

    /// The `personastate` wire code for this status.
    pub fn code(self) -> u8 {
        match self {
            Status::Offline => 0,
            Status::Online => 1,
            Status::Busy => 2,
            Status::Away => 3,
            Status::Snooze => 4,
            Status::LookingToTrade => 5,
            Status::LookingToPlay => 6,
        }
    }
}

/// Avatar image tiers carried by a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AvatarSize {
    /// 32×32, wire field `avatar`.
    Small,
    /// 64×64, wire field `avatarmedium`.
    Medium,
    /// 184×184, wire field `avatarfull`.
    #[default]
    Full,
}

impl AvatarSize {
    pub(crate) fn field(self) -> &'static str {
        match self {
            AvatarSize::Small => "avatar",
            AvatarSize::Medium => "avatarmedium",
            AvatarSize::Full => "avatarfull",
        }
    }
}

/// One fetched profile.
///
/// Immutable after construction; cloning is cheap enough for test fixtures
/// but collections share records via `Arc` rather than cloning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerRecord {
    attrs: Map<String, Value>,
}

impl PlayerRecord {
    pub fn new(attrs: Map<String, Value>) -> Self {
        Self { attrs }
    }

    /// Generic lookup by wire field name.
    ///
    /// The escape hatch for fields without a typed accessor
    /// (`primaryclanid`, `loccityid`, …).
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }

    /// Display name (`personaname`).
    pub fn nickname(&self) -> Option<&str> {
        self.str_attr("personaname")
    }

    /// SteamID64 (`steamid`). A string on the wire.
    pub fn steam_id(&self) -> Option<&str> {
        self.str_attr("steamid")
    }

    /// Real name (`realname`); absent on private profiles.
    pub fn real_name(&self) -> Option<&str> {
        self.str_attr("realname")
    }

    /// Two-letter country code (`loccountrycode`).
    pub fn country_code(&self) -> Option<&str> {
        self.str_attr("loccountrycode")
    }

    /// Locality code (`locstatecode`). String or integer on the wire,
    /// normalized to a string.
    pub fn locality_code(&self) -> Option<String> {
        self.text_attr("locstatecode")
    }

    /// Presence state, gated by visibility: `None` when the profile is
    /// private, regardless of what the wire carries.
    pub fn status(&self) -> Option<Status> {
        if self.is_private() {
            return None;
        }
        self.int_attr("personastate").and_then(Status::from_code)
    }

    /// Whether an active game session is attached to the profile.
    ///
    /// Derived from the raw `gameid` presence, independent of the visibility
    /// gate on [`status`](Self::status).
    pub fn is_playing(&self) -> bool {
        self.attrs.contains_key("gameid")
    }

    /// App id of the game currently played (`gameid`), normalized to a string.
    pub fn game_id(&self) -> Option<String> {
        self.text_attr("gameid")
    }

    /// Name of the game currently played (`gameextrainfo`).
    pub fn game_name(&self) -> Option<&str> {
        self.str_attr("gameextrainfo")
    }

    /// Whether the profile is private (`communityvisibilitystate == 1`).
    pub fn is_private(&self) -> bool {
        self.int_attr("communityvisibilitystate") == Some(1)
    }

    /// Avatar URL at the given tier, if the profile carries one.
    pub fn avatar(&self, size: AvatarSize) -> Option<&str> {
        self.str_attr(size.field())
    }

    /// Community profile URL (`profileurl`).
    pub fn profile_url(&self) -> Option<&str> {
        self.str_attr("profileurl")
    }

    /// Last logoff time (`lastlogoff`, epoch seconds).
    pub fn last_logoff(&self) -> Option<DateTime<Utc>> {
        self.time_attr("lastlogoff")
    }

    /// Account creation time (`timecreated`, epoch seconds).
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.time_attr("timecreated")
    }

    fn str_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).and_then(Value::as_str)
    }

    // Steam is inconsistent about numeric fields: ids arrive as strings,
    // enums as numbers, and some mirrors stringify everything.
    fn text_attr(&self, name: &str) -> Option<String> {
        match self.attrs.get(name)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    fn int_attr(&self, name: &str) -> Option<i64> {
        match self.attrs.get(name)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    fn time_attr(&self, name: &str) -> Option<DateTime<Utc>> {
        let secs = self.int_attr(name)?;
        Utc.timestamp_opt(secs, 0).single()
    }
}
