//! # Transport Seam
//!
//! The [`Transport`] trait is the boundary between the retrieval logic and
//! the wire: one blocking request/response round trip, returning a decoded
//! JSON body or a classified [`SteamError`]. The client never sees raw HTTP.
//!
//! Two implementations ship with the crate:
//!
//! - [`HttpTransport`]: production, backed by a blocking `ureq` agent.
//! - [`MemTransport`]: in-memory canned responses with request recording
//!   and failure injection, for tests.
//!
//! Response classification lives here rather than in the HTTP layer so that
//! every implementation surfaces the same error taxonomy.

mod http;
mod mem;

pub use http::HttpTransport;
pub use mem::{MemTransport, RecordedRequest};

use serde_json::Value;

use crate::error::{Result, SteamError};

/// One blocking request/response round trip.
pub trait Transport {
    /// GET `url` with `params` flattened into the query string.
    ///
    /// Implementations inject the credential parameter themselves; callers
    /// only pass operation parameters. A non-success status or an
    /// unparseable body surfaces as a classified error, never as a value.
    fn request(&self, url: &str, params: &[(&str, &str)]) -> Result<Value>;

    /// Fetch a raw byte payload (avatar images).
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>>;
}

/// Classify a non-success response into the error taxonomy.
///
/// Steam answers rejected requests with an HTML page rather than structured
/// JSON; the two recognizable body patterns are matched case-insensitively,
/// anything else falls back to a plain HTTP error carrying the status code.
pub(crate) fn classify_response(status: u16, body: &str) -> SteamError {
    let lowered = body.to_lowercase();
    if let Some(name) = offending_parameter(&lowered) {
        return SteamError::InvalidParameter(name);
    }
    if lowered.contains("required parameters") {
        return SteamError::MissingParameters;
    }
    SteamError::Http(format!("request failed with status {status}"))
}

// The error page names the rejected parameter directly after a
// "verify your <pre>" marker.
fn offending_parameter(lowered: &str) -> Option<String> {
    const MARKER: &str = "verify your <pre>";
    let start = lowered.find(MARKER)? + MARKER.len();
    let name: String = lowered[start..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
