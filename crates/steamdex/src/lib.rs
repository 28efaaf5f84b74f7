//! # steamdex
//!
//! A batched client for the Steam player-summaries API with an
//! attribute-indexed, chainable query collection.
//!
//! ## The Two Halves
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Retrieval (client)                                         │
//! │  - Splits identifier lists into ≤100-id chunks              │
//! │  - One blocking request per chunk, strictly in order        │
//! │  - Merges partial results per the chunk-failure policy      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Querying (collection + index)                              │
//! │  - Inverted index built once, at the root collection        │
//! │  - Chainable, immutable filters sharing that index          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything below the [`Transport`] trait is wire plumbing; everything
//! above it is pure, synchronous, in-memory computation. The trait is the
//! testing seam: [`MemTransport`] swaps in canned responses without touching
//! any retrieval or query logic.
//!
//! ## Usage
//!
//! ```no_run
//! use steamdex::{AvatarSize, Status, SteamClient, SteamConfig};
//!
//! # fn main() -> steamdex::Result<()> {
//! let client = SteamClient::new(SteamConfig::new("YOUR-API-KEY"));
//!
//! // One profile
//! if let Some(player) = client.fetch_one("76561198088033749")? {
//!     println!("{:?} is {:?}", player.nickname(), player.status());
//!     client.save_avatar(&player, AvatarSize::Full, "avatar.jpg")?;
//! }
//!
//! // Many profiles, filtered
//! let collection = client.fetch_many(vec!["76561198088033749", "76561197960435530"])?;
//! let playing_russians = collection.by_country(["RU"]).is_playing();
//! for player in playing_russians.iter() {
//!     println!("{:?} plays {:?}", player.nickname(), player.game_name());
//! }
//!
//! // Friends of a profile, excluding the idle ones
//! let friends = client.fetch_friends("76561198088033749")?;
//! let active = friends.exclude_status([Status::Away, Status::Snooze]);
//! println!("{} active friends", active.count());
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`client`]: batched retrieval, avatar saving, friends resolution
//! - [`collection`]: the chainable query collection
//! - [`index`]: the inverted attribute index
//! - [`attributes`]: the criterion registry and index keys
//! - [`model`]: [`PlayerRecord`], [`Status`], [`AvatarSize`]
//! - [`transport`]: the wire seam and its two implementations
//! - [`config`]: explicit configuration values
//! - [`error`]: the error taxonomy

pub mod attributes;
pub mod client;
pub mod collection;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod transport;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use attributes::{AttrValue, Criterion};
pub use client::{SteamClient, MAX_IDS_PER_REQUEST};
pub use collection::PlayerCollection;
pub use config::{ChunkFailure, SteamConfig, DEFAULT_BASE_URL};
pub use error::{Result, SteamError};
pub use model::{AvatarSize, PlayerRecord, Status};
pub use transport::{HttpTransport, MemTransport, Transport};
