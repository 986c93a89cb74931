//! Fetch, date and snapshot a playlist.
//!
//! Everything runs sequentially on the calling thread: one playlist page,
//! one MusicBrainz search, one Gemini prompt at a time.

use anyhow::Result;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::config::HitsterConfig;
use crate::credentials::SpotifyCredentials;
use crate::gemini::GeminiClient;
use crate::http::HttpClient;
use crate::model::{DatedSong, Song};
use crate::musicbrainz::MusicBrainzClient;
use crate::resolve::{dedupe, sort_by_release, JudgeSource, Resolver};
use crate::retry::RetryPolicy;
use crate::snapshot;
use crate::spotify::SpotifyClient;

/// What to fetch and where the snapshot lives.
#[derive(Debug, Clone)]
pub struct FetchRequest<'a> {
    pub playlist_id: &'a str,
    pub added_after: Option<NaiveDate>,
    /// Ignore an existing snapshot and hit the network.
    pub refresh: bool,
    pub out_dir: &'a Path,
}

/// Dated songs plus where they came from.
#[derive(Debug)]
pub struct Fetched {
    pub songs: Vec<DatedSong>,
    pub snapshot: PathBuf,
    pub from_cache: bool,
}

/// Load the playlist snapshot if present, otherwise fetch, resolve and write it.
pub fn load_or_fetch<F>(
    cfg: &HitsterConfig,
    req: &FetchRequest<'_>,
    gemini_key: Option<String>,
    progress: F,
) -> Result<Fetched>
where
    F: FnMut(usize, usize),
{
    let path = snapshot::snapshot_path(req.out_dir, req.playlist_id);
    if !req.refresh {
        if let Some(songs) = snapshot::load(&path)? {
            tracing::info!("read {} song(s) from {}", songs.len(), path.display());
            return Ok(Fetched {
                songs,
                snapshot: path,
                from_cache: true,
            });
        }
    }

    let credentials = SpotifyCredentials::from_env()?;
    let songs = fetch_and_resolve(
        cfg,
        &credentials,
        gemini_key,
        req.playlist_id,
        req.added_after,
        progress,
    )?;
    snapshot::save(&path, &songs)?;
    tracing::info!("song data written to {}", path.display());
    Ok(Fetched {
        songs,
        snapshot: path,
        from_cache: false,
    })
}

/// Fetch the playlist and resolve a release date for every track.
///
/// Returns de-duplicated songs sorted by release date. Songs for which no
/// source produced a date are dropped.
pub fn fetch_and_resolve<F>(
    cfg: &HitsterConfig,
    credentials: &SpotifyCredentials,
    gemini_key: Option<String>,
    playlist_id: &str,
    added_after: Option<NaiveDate>,
    progress: F,
) -> Result<Vec<DatedSong>>
where
    F: FnMut(usize, usize),
{
    let http = HttpClient::new(cfg.user_agent.clone(), RetryPolicy::from(&cfg.retry));

    tracing::info!("starting Spotify song retrieval for playlist {}", playlist_id);
    let spotify = SpotifyClient::connect(&http, &cfg.endpoints, credentials)?;
    let songs = spotify.playlist_songs(playlist_id, added_after)?;
    for song in &songs {
        tracing::debug!("{}", song_summary(song));
    }

    let musicbrainz = MusicBrainzClient::new(&http, &cfg.endpoints, &cfg.resolution);
    let gemini = match (cfg.resolution.use_gemini, gemini_key) {
        (true, Some(key)) => Some(GeminiClient::new(
            &http,
            &cfg.endpoints,
            &cfg.resolution,
            key,
        )),
        (true, None) => {
            tracing::warn!("GEMINI_API_KEY not set; songs unknown to MusicBrainz rely on playlist dates");
            None
        }
        (false, _) => None,
    };
    let judge = gemini.as_ref().map(|g| g as &dyn JudgeSource);

    tracing::info!(
        "querying MusicBrainz{} for original release dates of {} song(s)",
        if judge.is_some() { " and Gemini" } else { "" },
        songs.len()
    );
    let resolver = Resolver::new(Some(&musicbrainz), judge, cfg.resolution.use_playlist_date);
    let mut dated = resolver.resolve_all(&songs, progress);

    let removed = dedupe(&mut dated);
    if removed > 0 {
        tracing::info!("removed {} duplicate song(s)", removed);
    }
    sort_by_release(&mut dated);
    tracing::info!("dated {} of {} song(s)", dated.len(), songs.len());
    Ok(dated)
}

/// One aligned log line per fetched song; artists truncated to 24 chars.
pub fn song_summary(song: &Song) -> String {
    let mut artists = song.artists.join(", ");
    if artists.chars().count() > 24 {
        artists = artists.chars().take(23).collect::<String>() + "…";
    }
    format!(
        "Song: {:<28} | Artists: {:<24} | Release Date: {}",
        song.name,
        artists,
        song.album_release_date.as_deref().unwrap_or("?")
    )
}
