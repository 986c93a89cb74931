//! Minimal playlist-items page structures (only the fields we use).

use serde::Deserialize;

use crate::model::Song;

#[derive(Debug, Deserialize)]
pub(crate) struct PlaylistPage {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaylistItem {
    pub added_at: Option<String>,
    #[serde(default)]
    pub is_local: bool,
    pub track: Option<TrackObject>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrackObject {
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub artists: Vec<ArtistObject>,
    pub album: Option<AlbumObject>,
    #[serde(default)]
    pub external_ids: ExternalIds,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArtistObject {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AlbumObject {
    pub release_date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ExternalIds {
    pub isrc: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ExternalUrls {
    pub spotify: Option<String>,
}

impl PlaylistItem {
    /// Map to a Song; None for episodes, local files and unavailable tracks.
    pub fn into_song(self) -> Option<Song> {
        if self.is_local {
            return None;
        }
        let track = self.track?;
        if track.kind.as_deref().is_some_and(|k| k != "track") {
            return None;
        }
        let id = track.id?;
        let url = track
            .external_urls
            .spotify
            .unwrap_or_else(|| format!("https://open.spotify.com/track/{}", id));
        let isrc = track
            .external_ids
            .isrc
            .map(|i| i.trim().to_ascii_uppercase())
            .filter(|i| !i.is_empty());
        Some(Song {
            id,
            name: track.name,
            artists: track.artists.into_iter().map(|a| a.name).collect(),
            isrc,
            url,
            album_release_date: track.album.and_then(|a| a.release_date),
            added_at: self.added_at,
        })
    }
}
