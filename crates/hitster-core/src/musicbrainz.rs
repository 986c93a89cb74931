//! Encyclopedia source: MusicBrainz recording search by ISRC.
//!
//! A recording can appear on many releases; each search hit carries its own
//! `first-release-date`, and the earliest one across all hits is taken as the
//! original release.

use serde::Deserialize;
use std::cell::Cell;
use std::time::{Duration, Instant};

use crate::config::{Endpoints, ResolutionConfig};
use crate::http::HttpClient;
use crate::release_date::ReleaseDate;
use crate::resolve::EncyclopediaSource;

#[derive(Debug, Deserialize)]
struct RecordingSearch {
    #[serde(default)]
    recordings: Vec<Recording>,
}

#[derive(Debug, Deserialize)]
struct Recording {
    #[serde(rename = "first-release-date")]
    first_release_date: Option<String>,
}

pub struct MusicBrainzClient<'a> {
    http: &'a HttpClient,
    base: String,
    limit: u32,
    min_interval: Duration,
    last_request: Cell<Option<Instant>>,
}

impl<'a> MusicBrainzClient<'a> {
    pub fn new(http: &'a HttpClient, endpoints: &Endpoints, cfg: &ResolutionConfig) -> Self {
        Self {
            http,
            base: endpoints.musicbrainz.trim_end_matches('/').to_string(),
            limit: cfg.musicbrainz_limit.clamp(1, 100),
            min_interval: Duration::from_millis(cfg.musicbrainz_min_interval_ms),
            last_request: Cell::new(None),
        }
    }

    fn search_url(&self, isrc: &str) -> Result<url::Url, url::ParseError> {
        url::Url::parse_with_params(
            &format!("{}/recording/", self.base),
            &[
                ("query", format!("isrc:{}", isrc)),
                ("fmt", "json".to_string()),
                ("limit", self.limit.to_string()),
            ],
        )
    }

    /// Sleep until `min_interval` has passed since the previous request.
    fn pace(&self) {
        if let Some(last) = self.last_request.get() {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                std::thread::sleep(self.min_interval - elapsed);
            }
        }
        self.last_request.set(Some(Instant::now()));
    }
}

impl EncyclopediaSource for MusicBrainzClient<'_> {
    fn earliest_release_date(&self, isrc: &str) -> Option<ReleaseDate> {
        let url = match self.search_url(isrc) {
            Ok(u) => u,
            Err(e) => {
                tracing::warn!("invalid MusicBrainz URL for isrc {}: {}", isrc, e);
                return None;
            }
        };
        self.pace();
        match self.http.get_json::<RecordingSearch>(url.as_str(), &[]) {
            Ok(search) => {
                let date = earliest_first_release(&search.recordings);
                tracing::debug!(
                    "MusicBrainz isrc {}: {} recording(s), earliest {:?}",
                    isrc,
                    search.recordings.len(),
                    date.map(|d| d.to_string())
                );
                date
            }
            Err(e) => {
                tracing::warn!("MusicBrainz lookup for isrc {} failed: {}", isrc, e);
                None
            }
        }
    }
}

/// Earliest parseable `first-release-date` among the recordings.
fn earliest_first_release(recordings: &[Recording]) -> Option<ReleaseDate> {
    recordings
        .iter()
        .filter_map(|r| r.first_release_date.as_deref())
        .filter_map(|d| d.parse::<ReleaseDate>().ok())
        .min()
}
