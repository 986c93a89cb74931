//! API credentials from the environment (optionally seeded from `.env`).

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// Load `./.env` (or the first one found in a parent directory) into the
/// process environment. Existing variables win.
///
/// Runs before logging is set up, so the outcome is returned for the caller
/// to log: `Ok(None)` when there is no `.env`.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenv::Error> {
    match dotenv::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Same as [`load_dotenv`] for an explicit file.
pub fn load_dotenv_from(path: &Path) -> Result<Option<PathBuf>, dotenv::Error> {
    match dotenv::from_path(path) {
        Ok(()) => Ok(Some(path.to_path_buf())),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Log what [`load_dotenv`] did, once a subscriber is installed.
pub fn log_dotenv_outcome(outcome: &Result<Option<PathBuf>, dotenv::Error>) {
    match outcome {
        Ok(Some(path)) => tracing::debug!("loaded environment from {}", path.display()),
        Ok(None) => {}
        Err(e) => tracing::warn!("ignoring unreadable .env: {}", e),
    }
}

/// First non-empty value among `names`, read through `lookup`.
fn first_of<F>(names: &[&str], lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    names
        .iter()
        .filter_map(|n| lookup(n))
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

const CLIENT_ID_VARS: [&str; 3] = ["SPOTIFY_CLIENT_ID", "SPOTIPY_CLIENT_ID", "CLIENT_ID"];
const CLIENT_SECRET_VARS: [&str; 3] = [
    "SPOTIFY_CLIENT_SECRET",
    "SPOTIPY_CLIENT_SECRET",
    "CLIENT_SECRET",
];

/// Client-credentials pair for the playlist service.
#[derive(Clone)]
pub struct SpotifyCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl std::fmt::Debug for SpotifyCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotifyCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

impl SpotifyCredentials {
    /// `SPOTIFY_CLIENT_ID`/`SPOTIFY_CLIENT_SECRET`, then the spotipy names,
    /// then bare `CLIENT_ID`/`CLIENT_SECRET`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let client_id = first_of(&CLIENT_ID_VARS, &lookup);
        let client_secret = first_of(&CLIENT_SECRET_VARS, &lookup);
        match (client_id, client_secret) {
            (Some(client_id), Some(client_secret)) => Ok(Self {
                client_id,
                client_secret,
            }),
            _ => bail!(
                "Spotify credentials missing: set SPOTIFY_CLIENT_ID and SPOTIFY_CLIENT_SECRET (or in .env)"
            ),
        }
    }
}

/// Gemini API key (`GEMINI_API_KEY`, then `GOOGLE_API_KEY`). None disables the judge.
pub fn gemini_api_key() -> Option<String> {
    first_of(&["GEMINI_API_KEY", "GOOGLE_API_KEY"], &process_env)
}
