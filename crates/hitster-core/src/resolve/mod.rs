//! Release-date resolution: pick one original release date per song.
//!
//! Sources are consulted in a fixed order. The encyclopedia (by ISRC) comes
//! first, the judge is asked only when the encyclopedia has nothing, and the
//! playlist's album date is always a candidate. [`reconcile`] then picks the
//! winner. Songs without any candidate are dropped.

mod dedupe;
mod reconcile;

pub use dedupe::dedupe;
pub use reconcile::{prefers, reconcile, Candidate};

use crate::model::{DateSource, DatedSong, Song};
use crate::release_date::ReleaseDate;

/// Looks up the earliest known release of a recording by ISRC.
pub trait EncyclopediaSource {
    fn earliest_release_date(&self, isrc: &str) -> Option<ReleaseDate>;
}

/// Best-guess original release year for a title and its artists.
pub trait JudgeSource {
    fn release_year(&self, title: &str, artists: &[String]) -> Option<ReleaseDate>;
}

pub struct Resolver<'a> {
    encyclopedia: Option<&'a dyn EncyclopediaSource>,
    judge: Option<&'a dyn JudgeSource>,
    use_playlist_date: bool,
}

impl<'a> Resolver<'a> {
    pub fn new(
        encyclopedia: Option<&'a dyn EncyclopediaSource>,
        judge: Option<&'a dyn JudgeSource>,
        use_playlist_date: bool,
    ) -> Self {
        Self {
            encyclopedia,
            judge,
            use_playlist_date,
        }
    }

    /// Candidates for one song, in source priority order.
    pub fn candidates(&self, song: &Song) -> Vec<Candidate> {
        let mut candidates = Vec::with_capacity(2);

        let encyclopedia = match (self.encyclopedia, song.isrc.as_deref()) {
            (Some(source), Some(isrc)) if !isrc.is_empty() => source.earliest_release_date(isrc),
            (Some(_), _) => {
                tracing::debug!("'{}' has no ISRC; skipping MusicBrainz", song.name);
                None
            }
            _ => None,
        };
        if let Some(date) = encyclopedia {
            candidates.push(Candidate::new(date, DateSource::MusicBrainz));
        } else if let Some(judge) = self.judge {
            if let Some(year) = judge.release_year(&song.name, &song.artists) {
                candidates.push(Candidate::new(year, DateSource::Gemini));
            }
        }

        if self.use_playlist_date {
            let playlist = song.album_release_date.as_deref().and_then(|raw| {
                raw.parse::<ReleaseDate>()
                    .map_err(|e| tracing::debug!("'{}': ignoring playlist date: {}", song.name, e))
                    .ok()
            });
            if let Some(date) = playlist {
                if let Some(other) = candidates.first() {
                    if other.date.year() != date.year() {
                        tracing::debug!(
                            "'{}': {:?} says {}, playlist says {}",
                            song.name,
                            other.source,
                            other.date,
                            date
                        );
                    }
                }
                candidates.push(Candidate::new(date, DateSource::Playlist));
            }
        }
        candidates
    }

    /// Resolve one song; None when no source produced a date.
    pub fn resolve_song(&self, song: &Song) -> Option<DatedSong> {
        match reconcile(&self.candidates(song)) {
            Some(winner) => Some(DatedSong::from_song(song, winner.date, winner.source)),
            None => {
                tracing::warn!(
                    "no release date for '{}' by {}; dropping it",
                    song.name,
                    song.artists.join(", ")
                );
                None
            }
        }
    }

    /// Resolve every song in order. `progress(done, total)` is called after each song.
    pub fn resolve_all<F>(&self, songs: &[Song], mut progress: F) -> Vec<DatedSong>
    where
        F: FnMut(usize, usize),
    {
        let total = songs.len();
        let mut dated = Vec::with_capacity(total);
        for (i, song) in songs.iter().enumerate() {
            if let Some(d) = self.resolve_song(song) {
                dated.push(d);
            }
            progress(i + 1, total);
        }
        dated
    }
}

/// Chronological deck order: release date, then title.
pub fn sort_by_release(songs: &mut [DatedSong]) {
    songs.sort_by(|a, b| {
        a.release_date
            .cmp(&b.release_date)
            .then_with(|| a.name.cmp(&b.name))
    });
}

#[cfg(test)]
mod tests;
