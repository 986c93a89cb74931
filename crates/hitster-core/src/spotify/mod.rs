//! Playlist source: Spotify Web API with the client-credentials grant.
//!
//! Fetches every page of a playlist's items and maps tracks to [`Song`]s.
//! Podcast episodes, local files and removed tracks are skipped.

mod page;
mod playlist_id;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::config::Endpoints;
use crate::credentials::SpotifyCredentials;
use crate::http::HttpClient;
use crate::model::Song;
use page::PlaylistPage;

pub use playlist_id::parse_playlist_id;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Authenticated playlist client. The token lives for the duration of one run.
pub struct SpotifyClient<'a> {
    http: &'a HttpClient,
    api_base: String,
    token: String,
}

impl<'a> SpotifyClient<'a> {
    /// Exchange client credentials for an app access token.
    pub fn connect(
        http: &'a HttpClient,
        endpoints: &Endpoints,
        credentials: &SpotifyCredentials,
    ) -> Result<Self> {
        let url = format!("{}/api/token", endpoints.spotify_accounts.trim_end_matches('/'));
        let token: TokenResponse = http
            .post_form(
                &url,
                &[("grant_type", "client_credentials")],
                Some((credentials.client_id.as_str(), credentials.client_secret.as_str())),
            )
            .context("Spotify token request failed (check client id/secret)")?;
        tracing::debug!("obtained Spotify access token");
        Ok(Self {
            http,
            api_base: endpoints.spotify_api.trim_end_matches('/').to_string(),
            token: token.access_token,
        })
    }

    /// All tracks of `playlist_id`, in playlist order, following `next` links.
    /// With `added_after`, only tracks added strictly after that day are kept.
    pub fn playlist_songs(
        &self,
        playlist_id: &str,
        added_after: Option<NaiveDate>,
    ) -> Result<Vec<Song>> {
        let first = url::Url::parse_with_params(
            &format!("{}/playlists/{}/tracks", self.api_base, playlist_id),
            &[("additional_types", "track"), ("limit", "100")],
        )
        .context("invalid Spotify API base URL")?;

        let auth = format!("Bearer {}", self.token);
        let mut songs = Vec::new();
        let mut next = Some(first.to_string());
        let mut pages = 0u32;
        while let Some(url) = next {
            let page: PlaylistPage = self
                .http
                .get_json(&url, &[("Authorization", auth.as_str())])
                .with_context(|| format!("fetch playlist {} page {}", playlist_id, pages + 1))?;
            pages += 1;
            for song in page.items.into_iter().filter_map(|item| item.into_song()) {
                if keep_added_after(&song, added_after) {
                    songs.push(song);
                }
            }
            next = page.next;
        }
        tracing::info!(
            "fetched {} song(s) from playlist {} in {} page(s)",
            songs.len(),
            playlist_id,
            pages
        );
        Ok(songs)
    }
}

/// Strictly-after comparison on the date part of `added_at`. Unparseable timestamps keep the song.
fn keep_added_after(song: &Song, added_after: Option<NaiveDate>) -> bool {
    let Some(cutoff) = added_after else {
        return true;
    };
    let Some(added_at) = song.added_at.as_deref() else {
        tracing::warn!("no added_at for '{}'; keeping it", song.name);
        return true;
    };
    match added_at
        .get(..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    {
        Some(day) => day > cutoff,
        None => {
            tracing::warn!(
                "could not filter '{}' by added_after (added_at={:?}); keeping it",
                song.name,
                added_at
            );
            true
        }
    }
}
