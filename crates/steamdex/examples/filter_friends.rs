//! Fetch a profile's friends and slice them with chained filters.
//!
//! Usage: STEAM_API_KEY=... cargo run --example filter_friends -- <steamid64>

use steamdex::{Status, SteamClient, SteamConfig};

fn main() -> steamdex::Result<()> {
    let api_key = std::env::var("STEAM_API_KEY").expect("set STEAM_API_KEY");
    let steam_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "76561198088033749".to_string());

    let client = SteamClient::new(SteamConfig::new(api_key));
    let friends = client.fetch_friends(&steam_id)?;
    println!("{} friends", friends.count());

    println!("\nliving in RU or PE:");
    for friend in friends.by_country(["RU", "PE"]).iter() {
        println!(
            "  {} | {}",
            friend.nickname().unwrap_or("-"),
            friend.country_code().unwrap_or("-")
        );
    }

    println!("\nin a game right now, and not away:");
    for friend in friends.exclude_status([Status::Away]).is_playing().iter() {
        println!(
            "  {} | {}",
            friend.nickname().unwrap_or("-"),
            friend.game_name().unwrap_or("-")
        );
    }

    Ok(())
}
