//! Canned payload helpers shared by the integration tests.

use serde_json::{json, Value};

/// A minimal public profile object, extended with `fields`.
pub fn player(steam_id: &str, fields: &[(&str, Value)]) -> Value {
    let mut obj = json!({
        "steamid": steam_id,
        "personaname": format!("player-{steam_id}"),
        "communityvisibilitystate": 3,
    });
    for (name, value) in fields {
        obj[*name] = value.clone();
    }
    obj
}

/// A private profile object, extended with `fields`.
pub fn private_player(steam_id: &str, fields: &[(&str, Value)]) -> Value {
    let mut obj = player(steam_id, fields);
    obj["communityvisibilitystate"] = json!(1);
    obj
}
