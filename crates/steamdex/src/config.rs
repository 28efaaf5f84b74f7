//! # Configuration
//!
//! All configuration is an explicit [`SteamConfig`] value handed to the
//! transport and client constructors. There is no process-wide credential
//! state: two clients with different keys can coexist in one process.
//!
//! | Field | Default | Description |
//! |-------|---------|-------------|
//! | `api_key` | `""` | Steam Web API key, injected into every request |
//! | `base_url` | `https://api.steampowered.com` | Service root, overridable for self-hosted proxies |
//! | `chunk_failure` | `Skip` | What a failed chunk does to a multi-chunk batch |

/// Default root of the Steam Web API.
pub const DEFAULT_BASE_URL: &str = "https://api.steampowered.com";

/// Policy for a failing chunk inside a multi-chunk batch.
///
/// A batch of ≤100 identifiers is a single request and always surfaces its
/// error; this policy only applies when the input was split into several
/// chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChunkFailure {
    /// Drop the failed chunk's records, log a warning, keep going.
    #[default]
    Skip,
    /// Abort the whole batch with the chunk's classified error.
    Abort,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteamConfig {
    /// Steam Web API key (https://steamcommunity.com/dev/apikey).
    pub api_key: String,

    /// Root URL requests are issued against.
    pub base_url: String,

    /// Failure policy for multi-chunk batches.
    pub chunk_failure: ChunkFailure,
}

impl Default for SteamConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            chunk_failure: ChunkFailure::Skip,
        }
    }
}

impl SteamConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_chunk_failure(mut self, policy: ChunkFailure) -> Self {
        self.chunk_failure = policy;
        self
    }

    /// Base URL without a trailing slash, ready for path concatenation.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
