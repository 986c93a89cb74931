//! Flat JSON snapshot of dated songs, so re-renders skip the network.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::filename::output_name;
use crate::model::DatedSong;

/// `<dir>/hitster-data-<playlist>.json`.
pub fn snapshot_path(dir: &Path, playlist_id: &str) -> PathBuf {
    dir.join(output_name("data", playlist_id, "json"))
}

/// Write songs as pretty JSON (creates parent dir if needed).
pub fn save(path: &Path, songs: &[DatedSong]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create dir: {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(songs).context("serialize snapshot")?;
    std::fs::write(path, json).with_context(|| format!("write snapshot: {}", path.display()))?;
    Ok(())
}

/// Load songs from a snapshot. Ok(None) if the file does not exist; a corrupt file is an error.
pub fn load(path: &Path) -> Result<Option<Vec<DatedSong>>> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("read snapshot: {}", path.display())),
    };
    let songs: Vec<DatedSong> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse snapshot: {}", path.display()))?;
    Ok(Some(songs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DateSource;

    fn sample() -> Vec<DatedSong> {
        vec![DatedSong {
            id: "4uLU6hMCjMI75M1A2tKUQC".into(),
            name: "Never Gonna Give You Up".into(),
            artists: vec!["Rick Astley".into()],
            isrc: Some("GBARL9300135".into()),
            url: "https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC".into(),
            release_date: "1987-07-27".parse().unwrap(),
            source: DateSource::MusicBrainz,
            month_label: None,
        }]
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = snapshot_path(&dir.path().join("out"), "abc");
        assert!(path.ends_with("out/hitster-data-abc.json"));
        save(&path, &sample()).unwrap();
        assert_eq!(load(&path).unwrap(), Some(sample()));
    }

    #[test]
    fn snapshot_json_shape() {
        let json = serde_json::to_value(&sample()).unwrap();
        let first = &json[0];
        assert_eq!(first["release_date"], "1987-07-27");
        assert_eq!(first["source"], "musicbrainz");
        assert!(first.get("month_label").is_none());
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&dir.path().join("nope.json")).unwrap().is_none());
    }

    #[test]
    fn corrupt_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "[{\"id\": 1}]").unwrap();
        assert!(load(&path).is_err());
    }
}
