//! Request error type for retry classification.

use thiserror::Error;

/// Error returned by a single HTTP exchange (curl failure, HTTP error, or bad body).
/// Kept separate from anyhow so we can classify and decide retries first.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Curl reported an error (timeout, connection, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status. The body is kept for diagnostics.
    #[error("HTTP {code}")]
    Status { code: u32, body: String },
    /// Body arrived but is not the JSON we expected.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl HttpError {
    /// HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u32> {
        match self {
            HttpError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}
