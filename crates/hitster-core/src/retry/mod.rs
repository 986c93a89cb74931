//! Retry and backoff policy.
//!
//! This module encapsulates error classification (timeouts, throttling,
//! connection failures) and backoff decisions so that every remote source
//! (Spotify, MusicBrainz, Gemini) shares one consistent policy.

mod classify;
mod error;
mod policy;
mod run;

pub use classify::{classify, classify_curl_error, classify_http_status};
pub use error::HttpError;
pub use policy::{Backoff, ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
