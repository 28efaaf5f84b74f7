use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::{json, Value};

use super::Transport;
use crate::error::{Result, SteamError};

/// A request seen by [`MemTransport`], for call-count and chunking
/// assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub params: Vec<(String, String)>,
}

impl RecordedRequest {
    /// The value of one query parameter, if present.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The comma-separated `steamids` parameter, split.
    pub fn steam_ids(&self) -> Vec<&str> {
        self.param("steamids")
            .map(|ids| ids.split(',').collect())
            .unwrap_or_default()
    }
}

/// In-memory transport for testing.
///
/// Serves canned player objects keyed by their `steamid`, canned friend
/// lists, and canned byte payloads. Every call is recorded. Uses `RefCell`
/// for interior mutability since the client is single-threaded; this keeps
/// the [`Transport`] trait on `&self` without locking.
#[derive(Default)]
pub struct MemTransport {
    players: RefCell<HashMap<String, Value>>,
    friends: RefCell<HashMap<String, Vec<String>>>,
    bytes: RefCell<HashMap<String, Vec<u8>>>,
    requests: RefCell<Vec<RecordedRequest>>,
    fail_requests: RefCell<bool>,
    fail_for_id: RefCell<Option<String>>,
}

impl MemTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a canned player object. The object must carry a string `steamid`.
    pub fn insert_player(&self, player: Value) {
        let id = player
            .get("steamid")
            .and_then(Value::as_str)
            .expect("canned player needs a steamid")
            .to_string();
        self.players.borrow_mut().insert(id, player);
    }

    /// Seed a canned friend list for `steam_id`.
    pub fn insert_friends(&self, steam_id: &str, friend_ids: Vec<String>) {
        self.friends.borrow_mut().insert(steam_id.to_string(), friend_ids);
    }

    /// Seed a canned byte payload for `url`.
    pub fn insert_bytes(&self, url: &str, payload: Vec<u8>) {
        self.bytes.borrow_mut().insert(url.to_string(), payload);
    }

    /// Make every subsequent request fail with a transport error.
    pub fn set_fail_requests(&self, fail: bool) {
        *self.fail_requests.borrow_mut() = fail;
    }

    /// Make any summaries request whose `steamids` include `id` fail,
    /// leaving other chunks untouched.
    pub fn set_fail_for_id(&self, id: &str) {
        *self.fail_for_id.borrow_mut() = Some(id.to_string());
    }

    /// Every request seen so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    fn record(&self, url: &str, params: &[(&str, &str)]) {
        self.requests.borrow_mut().push(RecordedRequest {
            url: url.to_string(),
            params: params
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
        });
    }
}

impl Transport for MemTransport {
    fn request(&self, url: &str, params: &[(&str, &str)]) -> Result<Value> {
        self.record(url, params);

        if *self.fail_requests.borrow() {
            return Err(SteamError::Http("simulated transport failure".to_string()));
        }

        if url.contains("GetPlayerSummaries") {
            let ids: Vec<&str> = params
                .iter()
                .find(|(n, _)| *n == "steamids")
                .map(|(_, v)| v.split(',').collect())
                .unwrap_or_default();

            if let Some(marker) = self.fail_for_id.borrow().as_deref() {
                if ids.contains(&marker) {
                    return Err(SteamError::Http("simulated chunk failure".to_string()));
                }
            }

            let players = self.players.borrow();
            let found: Vec<Value> = ids.iter().filter_map(|id| players.get(*id).cloned()).collect();
            return Ok(json!({ "response": { "players": found } }));
        }

        if url.contains("GetFriendList") {
            let id = params
                .iter()
                .find(|(n, _)| *n == "steamid")
                .map(|(_, v)| *v)
                .unwrap_or_default();
            let friends = self.friends.borrow();
            let entries: Vec<Value> = friends
                .get(id)
                .map(|ids| {
                    ids.iter()
                        .map(|id| json!({ "steamid": id, "relationship": "friend" }))
                        .collect()
                })
                .unwrap_or_default();
            return Ok(json!({ "friendslist": { "friends": entries } }));
        }

        Err(SteamError::Http(format!("no canned response for {url}")))
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        self.record(url, &[]);
        if *self.fail_requests.borrow() {
            return Err(SteamError::Http("simulated transport failure".to_string()));
        }
        self.bytes
            .borrow()
            .get(url)
            .cloned()
            .ok_or_else(|| SteamError::Http("request failed with status 404".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serves_canned_players_in_request_order() {
        let transport = MemTransport::new();
        transport.insert_player(json!({ "steamid": "1", "personaname": "a" }));
        transport.insert_player(json!({ "steamid": "2", "personaname": "b" }));

        let body = transport
            .request("http://x/GetPlayerSummaries/", &[("steamids", "2,1,3")])
            .unwrap();
        let players = body["response"]["players"].as_array().unwrap();
        // unknown id 3 is omitted, order follows the request
        assert_eq!(players.len(), 2);
        assert_eq!(players[0]["steamid"], "2");
        assert_eq!(players[1]["steamid"], "1");
    }

    #[test]
    fn records_every_request() {
        let transport = MemTransport::new();
        let _ = transport.request("http://x/GetPlayerSummaries/", &[("steamids", "1")]);
        let _ = transport.fetch_bytes("http://img/a.jpg");
        assert_eq!(transport.request_count(), 2);
        assert_eq!(transport.requests()[0].steam_ids(), vec!["1"]);
    }

    #[test]
    fn failure_injection() {
        let transport = MemTransport::new();
        transport.set_fail_requests(true);
        assert!(transport.request("http://x/GetPlayerSummaries/", &[]).is_err());
        assert!(transport.fetch_bytes("http://img/a.jpg").is_err());
    }
}
