//! Songs as fetched from the playlist and as dated for the deck.

use serde::{Deserialize, Serialize};

use crate::release_date::ReleaseDate;

/// A playlist track before release-date resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub id: String,
    pub name: String,
    pub artists: Vec<String>,
    /// Cross-reference key for MusicBrainz; missing for some tracks.
    pub isrc: Option<String>,
    /// Link to the track; default QR payload.
    pub url: String,
    /// Album release date as reported by the playlist service (raw).
    pub album_release_date: Option<String>,
    /// When the track was added to the playlist (RFC 3339).
    pub added_at: Option<String>,
}

/// Where a song's chosen release date came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateSource {
    Playlist,
    MusicBrainz,
    Gemini,
    Custom,
}

/// A song with its resolved release date. This is the snapshot record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedSong {
    pub id: String,
    pub name: String,
    pub artists: Vec<String>,
    #[serde(default)]
    pub isrc: Option<String>,
    pub url: String,
    pub release_date: ReleaseDate,
    pub source: DateSource,
    /// Month label overriding the one derived from `release_date` (custom cards).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month_label: Option<String>,
}

impl DatedSong {
    pub fn from_song(song: &Song, release_date: ReleaseDate, source: DateSource) -> Self {
        Self {
            id: song.id.clone(),
            name: song.name.clone(),
            artists: song.artists.clone(),
            isrc: song.isrc.clone(),
            url: song.url.clone(),
            release_date,
            source,
            month_label: None,
        }
    }

    pub fn artists_joined(&self) -> String {
        self.artists.join(", ")
    }
}
