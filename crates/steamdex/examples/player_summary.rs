//! Fetch one profile and print its fields.
//!
//! Usage: STEAM_API_KEY=... cargo run --example player_summary -- <steamid64>

use steamdex::{AvatarSize, SteamClient, SteamConfig};

fn main() -> steamdex::Result<()> {
    let api_key = std::env::var("STEAM_API_KEY").expect("set STEAM_API_KEY");
    let steam_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "76561198088033749".to_string());

    let client = SteamClient::new(SteamConfig::new(api_key));

    let Some(player) = client.fetch_one(&steam_id)? else {
        println!("no profile for {steam_id}");
        return Ok(());
    };

    println!("steam id:     {}", player.steam_id().unwrap_or("-"));
    println!("nickname:     {}", player.nickname().unwrap_or("-"));
    println!("real name:    {}", player.real_name().unwrap_or("-"));
    println!("country:      {}", player.country_code().unwrap_or("-"));
    println!("locality:     {}", player.locality_code().unwrap_or_default());
    println!("private:      {}", player.is_private());
    println!("status:       {:?}", player.status());
    println!("playing:      {}", player.is_playing());
    println!("game:         {} ({})",
        player.game_name().unwrap_or("-"),
        player.game_id().unwrap_or_default(),
    );
    println!("profile url:  {}", player.profile_url().unwrap_or("-"));
    println!("last logoff:  {:?}", player.last_logoff());

    client.save_avatar(&player, AvatarSize::Full, "avatar.jpg")?;
    println!("saved avatar.jpg");

    Ok(())
}
