//! Card deck staging: `cards.typ`, `songs.json` and one QR SVG per card.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use super::RenderOptions;
use crate::deck::{qr_payload, qr_svg};
use crate::model::DatedSong;

pub(crate) const MAIN: &str = "cards.typ";
const TEMPLATE: &str = include_str!("templates/cards.typ");

/// One card as the template sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardEntry {
    pub id: String,
    pub name: String,
    pub artists: String,
    pub year: String,
    pub month: String,
    pub day: String,
    /// QR file, relative to the staging root.
    pub qr: String,
}

/// Card labels for each song, in deck order.
pub fn card_entries(songs: &[DatedSong], opts: &RenderOptions) -> Vec<CardEntry> {
    songs
        .iter()
        .enumerate()
        .map(|(i, song)| {
            let (year, month, day) = song.release_date.display_parts(opts.month_lang, opts.show_day);
            CardEntry {
                id: song.id.clone(),
                name: song.name.clone(),
                artists: song.artists_joined(),
                year,
                month: song.month_label.clone().unwrap_or(month),
                day,
                qr: format!("qr/{}.svg", i),
            }
        })
        .collect()
}

/// Write template, card data and QR images under `dir`.
pub fn stage_cards(dir: &Path, songs: &[DatedSong], opts: &RenderOptions) -> Result<()> {
    let qr_dir = dir.join("qr");
    std::fs::create_dir_all(&qr_dir)
        .with_context(|| format!("create dir: {}", qr_dir.display()))?;

    let entries = card_entries(songs, opts);
    for (song, entry) in songs.iter().zip(&entries) {
        let svg = qr_svg(qr_payload(song, opts.qr_content))?;
        let path = dir.join(&entry.qr);
        std::fs::write(&path, svg).with_context(|| format!("write {}", path.display()))?;
    }

    let json = serde_json::to_string_pretty(&entries).context("serialize cards")?;
    std::fs::write(dir.join("songs.json"), json).context("write songs.json")?;
    std::fs::write(dir.join(MAIN), TEMPLATE).context("write cards.typ")?;
    tracing::debug!("staged {} card(s) in {}", entries.len(), dir.display());
    Ok(())
}
