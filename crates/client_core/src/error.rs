use thiserror::Error;

/// Failure modes of a directory fetch. The UI collapses all of these into a
/// single human-readable message; the distinction exists at the library seam.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("invalid api url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
    #[error("invalid response payload: {0}")]
    Payload(#[source] reqwest::Error),
}
