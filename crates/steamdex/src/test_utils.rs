//! Builders for canned player payloads, shared by the unit tests.

use serde_json::{json, Map, Value};

use crate::model::{PlayerRecord, Status};

/// Builds one player-summaries object the way the service shapes it.
///
/// Defaults to a minimal public profile: `steamid`, a nickname derived from
/// it, and a public visibility state. Everything else is opt-in, mirroring
/// the way the real payload omits absent attributes.
pub struct PlayerBuilder {
    attrs: Map<String, Value>,
}

impl PlayerBuilder {
    pub fn new(steam_id: &str) -> Self {
        let mut attrs = Map::new();
        attrs.insert("steamid".into(), json!(steam_id));
        attrs.insert("personaname".into(), json!(format!("player-{steam_id}")));
        attrs.insert("communityvisibilitystate".into(), json!(3));
        Self { attrs }
    }

    pub fn nickname(mut self, name: &str) -> Self {
        self.attrs.insert("personaname".into(), json!(name));
        self
    }

    pub fn real_name(mut self, name: &str) -> Self {
        self.attrs.insert("realname".into(), json!(name));
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.attrs.insert("personastate".into(), json!(status.code()));
        self
    }

    pub fn country(mut self, code: &str) -> Self {
        self.attrs.insert("loccountrycode".into(), json!(code));
        self
    }

    pub fn locality(mut self, code: &str) -> Self {
        self.attrs.insert("locstatecode".into(), json!(code));
        self
    }

    pub fn game(mut self, game_id: &str, name: &str) -> Self {
        self.attrs.insert("gameid".into(), json!(game_id));
        self.attrs.insert("gameextrainfo".into(), json!(name));
        self
    }

    pub fn private(mut self) -> Self {
        self.attrs.insert("communityvisibilitystate".into(), json!(1));
        self
    }

    /// Set the three avatar tier URLs from a common stem.
    pub fn avatars(mut self, stem: &str) -> Self {
        self.attrs.insert("avatar".into(), json!(format!("{stem}_small.jpg")));
        self.attrs
            .insert("avatarmedium".into(), json!(format!("{stem}_medium.jpg")));
        self.attrs.insert("avatarfull".into(), json!(format!("{stem}_full.jpg")));
        self
    }

    pub fn build_value(self) -> Value {
        Value::Object(self.attrs)
    }

    pub fn build(self) -> PlayerRecord {
        PlayerRecord::new(self.attrs)
    }
}
