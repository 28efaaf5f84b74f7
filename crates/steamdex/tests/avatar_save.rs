//! Avatar download-and-persist flow over the in-memory transport.

mod common;

use common::player;
use serde_json::json;
use steamdex::{AvatarSize, MemTransport, SteamClient, SteamConfig, SteamError};

fn avatar_client() -> SteamClient<MemTransport> {
    let transport = MemTransport::new();
    transport.insert_player(player(
        "1",
        &[
            ("avatar", json!("http://img.example/p_small.jpg")),
            ("avatarmedium", json!("http://img.example/p_medium.jpg")),
            ("avatarfull", json!("http://img.example/p_full.jpg")),
        ],
    ));
    transport.insert_bytes("http://img.example/p_small.jpg", b"small".to_vec());
    transport.insert_bytes("http://img.example/p_full.jpg", b"full".to_vec());
    SteamClient::with_transport(transport, SteamConfig::new("integration-key"))
}

#[test]
fn saves_each_requested_tier() {
    let client = avatar_client();
    let player = client.fetch_one("1").unwrap().unwrap();
    let dir = tempfile::tempdir().unwrap();

    let small = dir.path().join("small.jpg");
    let full = dir.path().join("full.jpg");
    client.save_avatar(&player, AvatarSize::Small, &small).unwrap();
    client.save_avatar(&player, AvatarSize::Full, &full).unwrap();

    assert_eq!(std::fs::read(small).unwrap(), b"small");
    assert_eq!(std::fs::read(full).unwrap(), b"full");
}

#[test]
fn transport_and_file_failures_stay_distinct() {
    let client = avatar_client();
    let player = client.fetch_one("1").unwrap().unwrap();

    // the medium tier has a URL but no canned bytes: a transport failure
    let dir = tempfile::tempdir().unwrap();
    let result = client.save_avatar(&player, AvatarSize::Medium, dir.path().join("m.jpg"));
    assert!(matches!(result, Err(SteamError::Http(_))));

    // unwritable destination: a file failure
    let result = client.save_avatar(&player, AvatarSize::Full, dir.path().join("no/such/dir/f.jpg"));
    assert!(matches!(result, Err(SteamError::File(_))));
}
