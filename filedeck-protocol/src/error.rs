//! Typed error variants for API fetches.

use thiserror::Error;

/// Errors produced by [`crate::ApiClient`].
///
/// `Server` carries the server's own error message verbatim; the UI shows
/// it inline in the affected pane.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the response body not read.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The path or projection produced an invalid URL.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },
}
