//! `hitster-cards render <snapshot>` – print cards from a saved snapshot.

use anyhow::{Context, Result};
use hitster_core::config::HitsterConfig;
use hitster_core::snapshot;
use std::path::Path;

use super::deck::{render_deck, DeckPaths};
use crate::cli::RenderArgs;

pub fn run_render(
    cfg: &HitsterConfig,
    out_dir: &Path,
    snapshot_path: &Path,
    args: &RenderArgs,
) -> Result<()> {
    let songs = snapshot::load(snapshot_path)?
        .with_context(|| format!("snapshot not found: {}", snapshot_path.display()))?;
    tracing::info!("read {} song(s) from {}", songs.len(), snapshot_path.display());

    let stem = playlist_stem(snapshot_path);
    let paths = DeckPaths::new(out_dir, &stem, args);
    render_deck(songs, &args.options(cfg), args, &paths)
}

/// `hitster-data-<playlist>.json` -> `<playlist>`; other names keep their stem.
fn playlist_stem(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    stem.strip_prefix("hitster-data-")
        .map(str::to_string)
        .unwrap_or(stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_from_snapshot_name() {
        assert_eq!(playlist_stem(Path::new("out/hitster-data-abc.json")), "abc");
        assert_eq!(playlist_stem(Path::new("party.json")), "party");
    }
}
