//! # Batched Retrieval
//!
//! [`SteamClient`] turns identifier lists into [`PlayerCollection`]s. It is
//! generic over the [`Transport`] seam (production uses [`HttpTransport`],
//! tests use [`crate::transport::MemTransport`]) and owns the only
//! non-trivial retrieval logic: chunking.
//!
//! ## Chunking Contract
//!
//! The service caps one summaries request at [`MAX_IDS_PER_REQUEST`]
//! identifiers. A batch of N ≤ 100 is exactly one request. Larger inputs are
//! split into `ceil(N/100)` consecutive, non-overlapping chunks covering
//! every identifier exactly once, requested strictly in order; successful
//! results are appended in chunk order, keeping the per-chunk ordering the
//! service returned (which may differ from input order and may omit
//! identifiers the service does not recognize).
//!
//! ## Failure Visibility
//!
//! Failure surfaces differently per entry point, on purpose:
//!
//! - [`fetch_one`](SteamClient::fetch_one): transport errors propagate,
//!   an unrecognized identifier is `Ok(None)`.
//! - [`lookup`](SteamClient::lookup): everything flattens to `None`.
//! - [`fetch_many`](SteamClient::fetch_many) with one chunk: errors
//!   propagate.
//! - [`fetch_many`](SteamClient::fetch_many) with several chunks: a failing
//!   chunk follows the configured [`ChunkFailure`] policy: skipped with a
//!   warning (default) or aborting the batch.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::collection::PlayerCollection;
use crate::config::{ChunkFailure, SteamConfig};
use crate::error::{Result, SteamError};
use crate::model::{AvatarSize, PlayerRecord};
use crate::transport::{HttpTransport, Transport};

/// Hard service cap on identifiers per summaries request.
pub const MAX_IDS_PER_REQUEST: usize = 100;

const PLAYER_SUMMARIES_PATH: &str = "/ISteamUser/GetPlayerSummaries/v0002/";
const FRIEND_LIST_PATH: &str = "/ISteamUser/GetFriendList/v0001/";

/// Fetches player records and assembles them into collections.
///
/// Generic over the transport so retrieval logic is testable without a
/// network. Construction takes an explicit [`SteamConfig`]; there is no
/// process-wide credential.
pub struct SteamClient<T: Transport> {
    transport: T,
    config: SteamConfig,
}

impl SteamClient<HttpTransport> {
    /// Production client over HTTP.
    pub fn new(config: SteamConfig) -> Self {
        let transport = HttpTransport::new(&config);
        Self::with_transport(transport, config)
    }
}

impl<T: Transport> SteamClient<T> {
    pub fn with_transport(transport: T, config: SteamConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &SteamConfig {
        &self.config
    }

    /// The underlying transport. Handy for inspecting a
    /// [`crate::transport::MemTransport`] in tests.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch one profile.
    ///
    /// `Ok(None)` when the service does not recognize the identifier;
    /// transport failures propagate, classified.
    pub fn fetch_one(&self, steam_id: &str) -> Result<Option<PlayerRecord>> {
        let records = self.fetch_chunk(&[steam_id.to_string()])?;
        Ok(records.into_iter().next())
    }

    /// Fetch one profile, flattening every failure to `None`.
    ///
    /// The lookup-primitive twin of [`fetch_one`](Self::fetch_one): callers
    /// that only care whether a record is available trade away failure
    /// visibility. Errors are logged at debug level.
    pub fn lookup(&self, steam_id: &str) -> Option<PlayerRecord> {
        match self.fetch_one(steam_id) {
            Ok(record) => record,
            Err(err) => {
                log::debug!("lookup of {steam_id} failed: {err}");
                None
            }
        }
    }

    /// Fetch many profiles as a root collection, chunking per the cap.
    ///
    /// An empty input yields an empty collection with zero requests.
    pub fn fetch_many<I, S>(&self, steam_ids: I) -> Result<PlayerCollection>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = steam_ids.into_iter().map(Into::into).collect();

        let records = if ids.is_empty() {
            Vec::new()
        } else if ids.len() <= MAX_IDS_PER_REQUEST {
            // single-chunk batches keep full failure visibility
            self.fetch_chunk(&ids)?
        } else {
            let mut records = Vec::new();
            for chunk in ids.chunks(MAX_IDS_PER_REQUEST) {
                match self.fetch_chunk(chunk) {
                    Ok(batch) => records.extend(batch),
                    Err(err) => match self.config.chunk_failure {
                        ChunkFailure::Skip => {
                            log::warn!("dropping chunk of {} identifiers: {err}", chunk.len());
                        }
                        ChunkFailure::Abort => return Err(err),
                    },
                }
            }
            records
        };

        Ok(PlayerCollection::from_records(records))
    }

    /// Fetch the friend list of `steam_id` and resolve it into a collection.
    ///
    /// The friend list itself is one request; resolution goes through
    /// [`fetch_many`](Self::fetch_many) and inherits its chunking and
    /// failure policy. Friend lists of private profiles surface as a
    /// classified error.
    pub fn fetch_friends(&self, steam_id: &str) -> Result<PlayerCollection> {
        let body = self.transport.request(
            &self.endpoint(FRIEND_LIST_PATH),
            &[("steamid", steam_id), ("relationship", "friend")],
        )?;
        let ids: Vec<String> = body
            .get("friendslist")
            .and_then(|list| list.get("friends"))
            .and_then(Value::as_array)
            .map(|friends| {
                friends
                    .iter()
                    .filter_map(|f| f.get("steamid").and_then(Value::as_str))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        self.fetch_many(ids)
    }

    /// Download a player's avatar and write it to `path`.
    ///
    /// Transport failures and filesystem failures surface as distinct
    /// variants ([`SteamError::Http`] vs [`SteamError::File`]).
    pub fn save_avatar(
        &self,
        player: &PlayerRecord,
        size: AvatarSize,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let url = player.avatar(size).ok_or(SteamError::NoAvatar)?;
        let bytes = self.transport.fetch_bytes(url)?;
        fs::write(path, bytes).map_err(SteamError::File)
    }

    /// One summaries request for at most [`MAX_IDS_PER_REQUEST`] identifiers.
    fn fetch_chunk(&self, ids: &[String]) -> Result<Vec<PlayerRecord>> {
        let steamids = ids.join(",");
        let body = self.transport.request(
            &self.endpoint(PLAYER_SUMMARIES_PATH),
            &[("steamids", &steamids)],
        )?;
        match body.get("response").and_then(|r| r.get("players")) {
            Some(players) => Ok(serde_json::from_value(players.clone())?),
            // a body without the players array means "nothing recognized"
            None => Ok(Vec::new()),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;
    use crate::test_utils::PlayerBuilder;
    use crate::transport::MemTransport;

    fn client_with(transport: MemTransport) -> SteamClient<MemTransport> {
        SteamClient::with_transport(transport, SteamConfig::new("test-key"))
    }

    fn seeded_client(count: usize) -> SteamClient<MemTransport> {
        let transport = MemTransport::new();
        for i in 0..count {
            transport.insert_player(PlayerBuilder::new(&format!("{i}")).build_value());
        }
        client_with(transport)
    }

    fn ids(count: usize) -> Vec<String> {
        (0..count).map(|i| i.to_string()).collect()
    }

    #[test]
    fn small_batch_is_a_single_request() {
        let client = seeded_client(100);
        let collection = client.fetch_many(ids(100)).unwrap();
        assert_eq!(collection.count(), 100);
        assert_eq!(client.transport.request_count(), 1);
    }

    #[test]
    fn empty_batch_makes_no_request() {
        let client = seeded_client(0);
        let collection = client.fetch_many(Vec::<String>::new()).unwrap();
        assert!(collection.is_empty());
        assert_eq!(client.transport.request_count(), 0);
    }

    #[test]
    fn large_batch_partitions_without_overlap() {
        let client = seeded_client(250);
        let collection = client.fetch_many(ids(250)).unwrap();
        assert_eq!(collection.count(), 250);

        let requests = client.transport.requests();
        assert_eq!(requests.len(), 3); // ceil(250/100)

        let chunk_sizes: Vec<usize> = requests.iter().map(|r| r.steam_ids().len()).collect();
        assert_eq!(chunk_sizes, vec![100, 100, 50]);

        // chunks partition the input: every id exactly once
        let mut seen: Vec<String> = requests
            .iter()
            .flat_map(|r| r.steam_ids().into_iter().map(str::to_string))
            .collect();
        assert_eq!(seen.len(), 250);
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 250);
    }

    #[test]
    fn merge_keeps_chunk_order() {
        let client = seeded_client(150);
        let collection = client.fetch_many(ids(150)).unwrap();
        let fetched: Vec<&str> = collection.iter().filter_map(|p| p.steam_id()).collect();
        let expected: Vec<String> = ids(150);
        assert_eq!(fetched, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn unrecognized_ids_are_omitted_from_the_result() {
        let client = seeded_client(2);
        let collection = client.fetch_many(["0", "unknown", "1"]).unwrap();
        assert_eq!(collection.count(), 2);
    }

    #[test]
    fn single_chunk_failure_propagates() {
        let client = seeded_client(5);
        client.transport.set_fail_requests(true);
        assert!(client.fetch_many(ids(5)).is_err());
    }

    #[test]
    fn skipped_chunk_drops_only_its_records() {
        let client = seeded_client(250);
        // id 150 lands in the second chunk (positions 100..200)
        client.transport.set_fail_for_id("150");

        let collection = client.fetch_many(ids(250)).unwrap();
        assert_eq!(collection.count(), 150);
        assert_eq!(client.transport.request_count(), 3); // retrieval continued
    }

    #[test]
    fn abort_policy_fails_the_whole_batch() {
        let transport = MemTransport::new();
        for i in 0..250 {
            transport.insert_player(PlayerBuilder::new(&i.to_string()).build_value());
        }
        transport.set_fail_for_id("150");
        let client = SteamClient::with_transport(
            transport,
            SteamConfig::new("test-key").with_chunk_failure(ChunkFailure::Abort),
        );

        assert!(client.fetch_many(ids(250)).is_err());
        // first chunk succeeded, second aborted the batch
        assert_eq!(client.transport.request_count(), 2);
    }

    #[test]
    fn fetch_one_distinguishes_missing_from_failed() {
        let client = seeded_client(1);
        assert!(client.fetch_one("0").unwrap().is_some());
        assert!(client.fetch_one("nope").unwrap().is_none());

        client.transport.set_fail_requests(true);
        assert!(client.fetch_one("0").is_err());
    }

    #[test]
    fn lookup_flattens_failures_to_none() {
        let client = seeded_client(1);
        assert!(client.lookup("0").is_some());
        assert!(client.lookup("nope").is_none());

        client.transport.set_fail_requests(true);
        assert!(client.lookup("0").is_none());
    }

    #[test]
    fn fetch_friends_resolves_via_the_batcher() {
        let transport = MemTransport::new();
        transport.insert_player(
            PlayerBuilder::new("10").status(Status::Online).build_value(),
        );
        transport.insert_player(PlayerBuilder::new("11").build_value());
        transport.insert_friends("1", vec!["10".to_string(), "11".to_string()]);
        let client = client_with(transport);

        let friends = client.fetch_friends("1").unwrap();
        assert_eq!(friends.count(), 2);
        assert_eq!(friends.by_status([Status::Online]).count(), 1);
        // one friend-list request plus one summaries chunk
        assert_eq!(client.transport.request_count(), 2);
    }

    #[test]
    fn save_avatar_writes_fetched_bytes() {
        let transport = MemTransport::new();
        transport.insert_bytes("http://img.example/a_full.jpg", b"jpeg-bytes".to_vec());
        let client = client_with(transport);

        let player = PlayerBuilder::new("1").avatars("http://img.example/a").build();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar.jpg");

        client.save_avatar(&player, AvatarSize::Full, &path).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"jpeg-bytes");
    }

    #[test]
    fn save_avatar_without_url_is_a_typed_error() {
        let client = client_with(MemTransport::new());
        let player = PlayerBuilder::new("1").build();
        let dir = tempfile::tempdir().unwrap();
        let result = client.save_avatar(&player, AvatarSize::Full, dir.path().join("a.jpg"));
        assert!(matches!(result, Err(SteamError::NoAvatar)));
    }

    #[test]
    fn save_avatar_separates_file_errors_from_transport_errors() {
        let transport = MemTransport::new();
        transport.insert_bytes("http://img.example/a_full.jpg", b"jpeg-bytes".to_vec());
        let client = client_with(transport);
        let player = PlayerBuilder::new("1").avatars("http://img.example/a").build();

        // destination directory does not exist
        let result = client.save_avatar(&player, AvatarSize::Full, "/nonexistent-dir/a.jpg");
        assert!(matches!(result, Err(SteamError::File(_))));

        // transport failure on the bytes fetch
        client.transport.set_fail_requests(true);
        let dir = tempfile::tempdir().unwrap();
        let result = client.save_avatar(&player, AvatarSize::Full, dir.path().join("a.jpg"));
        assert!(matches!(result, Err(SteamError::Http(_))));
    }
}
