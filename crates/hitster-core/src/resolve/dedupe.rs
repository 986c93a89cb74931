//! Merge duplicate songs (same title and same artist list).

use std::collections::HashMap;

use super::reconcile::prefers;
use crate::model::DatedSong;

/// Removes songs whose `name` and `artists` exactly equal an earlier one.
/// The first occurrence stays in place but takes the release date (and its
/// source) that [`prefers`] picks among its duplicates: the earliest, or a
/// more precise date that refines it. Returns how many were removed.
pub fn dedupe(songs: &mut Vec<DatedSong>) -> usize {
    let before = songs.len();
    let mut first_index: HashMap<(String, Vec<String>), usize> = HashMap::new();
    let mut kept: Vec<DatedSong> = Vec::with_capacity(before);

    for song in songs.drain(..) {
        let key = (song.name.clone(), song.artists.clone());
        match first_index.get(&key) {
            Some(&i) => {
                let first = &mut kept[i];
                tracing::debug!(
                    "duplicate '{}' ({} vs {})",
                    song.name,
                    first.release_date,
                    song.release_date
                );
                if prefers(&song.release_date, &first.release_date) {
                    first.release_date = song.release_date;
                    first.source = song.source;
                }
            }
            None => {
                first_index.insert(key, kept.len());
                kept.push(song);
            }
        }
    }

    *songs = kept;
    before - songs.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DateSource;

    fn song(id: &str, name: &str, artists: &[&str], date: &str) -> DatedSong {
        DatedSong {
            id: id.into(),
            name: name.into(),
            artists: artists.iter().map(|a| a.to_string()).collect(),
            isrc: None,
            url: format!("https://open.spotify.com/track/{id}"),
            release_date: date.parse().unwrap(),
            source: DateSource::Playlist,
            month_label: None,
        }
    }

    #[test]
    fn keeps_first_with_earliest_date() {
        let mut songs = vec![
            song("a", "Hallelujah", &["Leonard Cohen"], "1994"),
            song("b", "Other", &["Someone"], "2001"),
            song("c", "Hallelujah", &["Leonard Cohen"], "1984-12-01"),
        ];
        let removed = dedupe(&mut songs);
        assert_eq!(removed, 1);
        assert_eq!(songs.len(), 2);
        assert_eq!(songs[0].id, "a");
        assert_eq!(songs[0].release_date.to_string(), "1984-12-01");
        assert_eq!(songs[1].id, "b");
    }

    #[test]
    fn duplicate_keeps_more_precise_date_of_same_year() {
        let mut songs = vec![
            song("a", "Take On Me", &["a-ha"], "1985"),
            song("b", "Take On Me", &["a-ha"], "1985-03-07"),
        ];
        assert_eq!(dedupe(&mut songs), 1);
        assert_eq!(songs[0].id, "a");
        assert_eq!(songs[0].release_date.to_string(), "1985-03-07");
    }

    #[test]
    fn duplicate_precise_later_date_does_not_override() {
        let mut songs = vec![
            song("a", "Take On Me", &["a-ha"], "1985-03"),
            song("b", "Take On Me", &["a-ha"], "1985-10-16"),
        ];
        assert_eq!(dedupe(&mut songs), 1);
        assert_eq!(songs[0].release_date.to_string(), "1985-03");
    }

    #[test]
    fn different_artists_are_not_duplicates() {
        let mut songs = vec![
            song("a", "Hallelujah", &["Leonard Cohen"], "1984"),
            song("b", "Hallelujah", &["Jeff Buckley"], "1994"),
            song("c", "hallelujah", &["Leonard Cohen"], "1984"),
        ];
        assert_eq!(dedupe(&mut songs), 0);
        assert_eq!(songs.len(), 3);
    }
}
