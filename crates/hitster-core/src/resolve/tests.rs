use super::*;
use std::cell::RefCell;
use std::collections::HashMap;

struct FakeEncyclopedia {
    dates: HashMap<&'static str, &'static str>,
    asked: RefCell<Vec<String>>,
}

impl EncyclopediaSource for FakeEncyclopedia {
    fn earliest_release_date(&self, isrc: &str) -> Option<ReleaseDate> {
        self.asked.borrow_mut().push(isrc.to_string());
        self.dates.get(isrc).and_then(|d| d.parse().ok())
    }
}

struct FakeJudge {
    answer: Option<&'static str>,
    asked: RefCell<Vec<String>>,
}

impl JudgeSource for FakeJudge {
    fn release_year(&self, title: &str, _artists: &[String]) -> Option<ReleaseDate> {
        self.asked.borrow_mut().push(title.to_string());
        self.answer.and_then(|a| a.parse().ok())
    }
}

fn encyclopedia(entries: &[(&'static str, &'static str)]) -> FakeEncyclopedia {
    FakeEncyclopedia {
        dates: entries.iter().copied().collect(),
        asked: RefCell::new(Vec::new()),
    }
}

fn judge(answer: Option<&'static str>) -> FakeJudge {
    FakeJudge {
        answer,
        asked: RefCell::new(Vec::new()),
    }
}

fn song(name: &str, isrc: Option<&str>, album: Option<&str>) -> Song {
    Song {
        id: name.to_lowercase().replace(' ', "-"),
        name: name.to_string(),
        artists: vec!["Artist".to_string()],
        isrc: isrc.map(str::to_string),
        url: format!("https://open.spotify.com/track/{}", name),
        album_release_date: album.map(str::to_string),
        added_at: None,
    }
}

#[test]
fn encyclopedia_beats_later_remaster() {
    let enc = encyclopedia(&[("ISRC1", "1977-10-28")]);
    let jdg = judge(Some("1970"));
    let resolver = Resolver::new(Some(&enc), Some(&jdg), true);
    let dated = resolver
        .resolve_song(&song("Song A", Some("ISRC1"), Some("2011-01-01")))
        .unwrap();
    assert_eq!(dated.release_date.to_string(), "1977-10-28");
    assert_eq!(dated.source, DateSource::MusicBrainz);
    assert!(jdg.asked.borrow().is_empty(), "judge only runs as fallback");
}

#[test]
fn judge_consulted_when_encyclopedia_empty() {
    let enc = encyclopedia(&[]);
    let jdg = judge(Some("1969"));
    let resolver = Resolver::new(Some(&enc), Some(&jdg), true);
    let dated = resolver
        .resolve_song(&song("Song B", Some("ISRC2"), Some("2009-09-09")))
        .unwrap();
    assert_eq!(dated.release_date.to_string(), "1969");
    assert_eq!(dated.source, DateSource::Gemini);
    assert_eq!(enc.asked.borrow().as_slice(), ["ISRC2"]);
}

#[test]
fn playlist_date_refines_same_year_answer() {
    let jdg = judge(Some("1987"));
    let resolver = Resolver::new(None, Some(&jdg), true);
    let dated = resolver
        .resolve_song(&song("Song C", None, Some("1987-11-12")))
        .unwrap();
    assert_eq!(dated.release_date.to_string(), "1987-11-12");
    assert_eq!(dated.source, DateSource::Playlist);
}

#[test]
fn earlier_playlist_date_in_same_year_wins() {
    let enc = encyclopedia(&[("ISRC5", "1987-11-12")]);
    let resolver = Resolver::new(Some(&enc), None, true);
    let dated = resolver
        .resolve_song(&song("Song E", Some("ISRC5"), Some("1987-03-01")))
        .unwrap();
    assert_eq!(dated.release_date.to_string(), "1987-03-01");
    assert_eq!(dated.source, DateSource::Playlist);
}

#[test]
fn later_precise_playlist_date_does_not_replace_encyclopedia_month() {
    let enc = encyclopedia(&[("ISRC6", "1987-03")]);
    let resolver = Resolver::new(Some(&enc), None, true);
    let dated = resolver
        .resolve_song(&song("Song F", Some("ISRC6"), Some("1987-11-12")))
        .unwrap();
    assert_eq!(dated.release_date.to_string(), "1987-03");
    assert_eq!(dated.source, DateSource::MusicBrainz);
}

#[test]
fn missing_isrc_skips_encyclopedia() {
    let enc = encyclopedia(&[("ISRC3", "1960")]);
    let resolver = Resolver::new(Some(&enc), None, true);
    let dated = resolver
        .resolve_song(&song("Song D", None, Some("1999-02")))
        .unwrap();
    assert_eq!(dated.release_date.to_string(), "1999-02");
    assert!(enc.asked.borrow().is_empty());
}

#[test]
fn playlist_date_can_be_ignored() {
    let resolver = Resolver::new(None, None, false);
    assert!(resolver
        .resolve_song(&song("Song E", None, Some("1999-02-03")))
        .is_none());
}

#[test]
fn unknown_playlist_date_is_dropped() {
    let jdg = judge(None);
    let resolver = Resolver::new(None, Some(&jdg), true);
    assert!(resolver
        .resolve_song(&song("Song F", None, Some("0000")))
        .is_none());
}

#[test]
fn resolve_all_reports_progress_and_drops_undated() {
    let enc = encyclopedia(&[("ISRC1", "1980")]);
    let resolver = Resolver::new(Some(&enc), None, true);
    let songs = vec![
        song("One", Some("ISRC1"), None),
        song("Two", None, None),
        song("Three", None, Some("1990")),
    ];
    let mut seen = Vec::new();
    let dated = resolver.resolve_all(&songs, |done, total| seen.push((done, total)));
    assert_eq!(seen, vec![(1, 3), (2, 3), (3, 3)]);
    let names: Vec<&str> = dated.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["One", "Three"]);
}

#[test]
fn sort_by_release_then_name() {
    let resolver = Resolver::new(None, None, true);
    let mut dated = resolver.resolve_all(
        &[
            song("Zebra", None, Some("1990")),
            song("Apple", None, Some("1990")),
            song("Old", None, Some("1960-05-05")),
        ],
        |_, _| {},
    );
    sort_by_release(&mut dated);
    let names: Vec<&str> = dated.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["Old", "Apple", "Zebra"]);
}
