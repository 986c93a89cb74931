use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::release_date::MonthLang;
use crate::retry::Backoff;

/// Retry policy parameters (`[retry]` in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of attempts per request (including the first).
    pub max_attempts: u32,
    /// Delay before the first retry, in seconds.
    pub base_delay_secs: f64,
    /// Added per further retry when `backoff = "linear"`.
    pub step_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
    /// "linear" (default) or "exponential".
    pub backoff: Backoff,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            base_delay_secs: 1.0,
            step_delay_secs: 1.0,
            max_delay_secs: 10,
            backoff: Backoff::Linear,
        }
    }
}

/// Base URLs of the remote services. Overridable so tests can point at a local server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub spotify_accounts: String,
    pub spotify_api: String,
    pub musicbrainz: String,
    pub gemini: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            spotify_accounts: "https://accounts.spotify.com".to_string(),
            spotify_api: "https://api.spotify.com/v1".to_string(),
            musicbrainz: "https://musicbrainz.org/ws/2".to_string(),
            gemini: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }
}

/// Release-date resolution knobs (`[resolution]`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Gemini model used as the fallback judge.
    pub gemini_model: String,
    /// Ask Gemini when MusicBrainz has no date (needs GEMINI_API_KEY).
    pub use_gemini: bool,
    /// Take the playlist's album release date into account.
    pub use_playlist_date: bool,
    /// Number of recordings requested per ISRC search.
    pub musicbrainz_limit: u32,
    /// Minimum spacing between MusicBrainz requests (their limit is 1 req/s).
    pub musicbrainz_min_interval_ms: u64,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            gemini_model: "gemini-2.5-flash".to_string(),
            use_gemini: true,
            use_playlist_date: true,
            musicbrainz_limit: 50,
            musicbrainz_min_interval_ms: 1000,
        }
    }
}

/// What the QR code on each card encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QrContent {
    /// Track URL (opens the track in the player app).
    #[default]
    Url,
    /// Bare track ID.
    Id,
}

/// Card rendering defaults (`[render]`). CLI flags override these.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Name or path of the typst executable.
    pub typst_bin: String,
    /// Font family for the cards; must be installed.
    pub font: Option<String>,
    /// Edition label printed on the cards.
    pub edition: Option<String>,
    pub qr_content: QrContent,
    pub month_lang: MonthLang,
    pub show_day: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            typst_bin: "typst".to_string(),
            font: None,
            edition: None,
            qr_content: QrContent::Url,
            month_lang: MonthLang::En,
            show_day: true,
        }
    }
}

/// Global configuration loaded from `~/.config/hitster-cards/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HitsterConfig {
    /// User-Agent sent with every request (MusicBrainz rejects anonymous clients).
    pub user_agent: String,
    pub endpoints: Endpoints,
    pub retry: RetryConfig,
    pub resolution: ResolutionConfig,
    pub render: RenderConfig,
}

impl Default for HitsterConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("hitster-cards/", env!("CARGO_PKG_VERSION")).to_string(),
            endpoints: Endpoints::default(),
            retry: RetryConfig::default(),
            resolution: ResolutionConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("hitster-cards")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HitsterConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HitsterConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path. Missing keys take their defaults.
pub fn load_from(path: &Path) -> Result<HitsterConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: HitsterConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
