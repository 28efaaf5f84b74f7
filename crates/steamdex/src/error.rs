use thiserror::Error;

#[derive(Error, Debug)]
pub enum SteamError {
    /// The request could not complete, or the service answered with a
    /// non-success status that matched no known body pattern.
    #[error("request failed: {0}")]
    Http(String),

    /// The service rejected one named request parameter.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The service reported required parameters as absent.
    #[error("missing required parameters")]
    MissingParameters,

    /// The response body was not valid JSON.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The profile carries no avatar URL at the requested size.
    #[error("profile has no avatar url")]
    NoAvatar,

    /// Fetched bytes could not be written to disk.
    #[error("file error: {0}")]
    File(std::io::Error),
}

pub type Result<T> = std::result::Result<T, SteamError>;
