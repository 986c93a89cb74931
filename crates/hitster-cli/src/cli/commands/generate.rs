//! `hitster-cards generate <playlist>` – the whole pipeline.

use anyhow::Result;
use hitster_core::config::HitsterConfig;
use hitster_core::render::RenderOptions;
use std::path::Path;

use super::deck::{render_deck, DeckPaths};
use super::fetch::fetch_songs;
use crate::cli::{FetchArgs, RenderArgs};

pub fn run_generate(
    cfg: &HitsterConfig,
    out_dir: &Path,
    fetch: &FetchArgs,
    render: &RenderArgs,
) -> Result<()> {
    let playlist_id = fetch.playlist_id()?;
    let opts = render.options(cfg);
    let paths = DeckPaths::new(out_dir, &playlist_id, render);
    log_overview(&playlist_id, fetch, &opts, &paths);

    let fetched = fetch_songs(cfg, out_dir, &playlist_id, fetch)?;
    render_deck(fetched.songs, &opts, render, &paths)
}

fn log_overview(playlist_id: &str, fetch: &FetchArgs, opts: &RenderOptions, paths: &DeckPaths) {
    tracing::info!(
        "\n========== Hitster Cards - Argument Overview ==========\n\
         Playlist ID:         {}\n\
         Month Language:      {:?}\n\
         Day in Release Date: {}\n\
         QR Code Content:     {:?}\n\
         Cards PDF Output:    {}\n\
         Year Distribution:   {}\n\
         Added After:         {}\n\
         Edition:             {}\n\
         Font:                {}\n\
         =======================================================",
        playlist_id,
        opts.month_lang,
        if opts.show_day { "included" } else { "omitted" },
        opts.qr_content,
        paths.cards.display(),
        paths.years.display(),
        fetch
            .added_after
            .map(|d| d.to_string())
            .unwrap_or_else(|| "not set".to_string()),
        opts.edition.as_deref().unwrap_or("not set"),
        opts.font.as_deref().unwrap_or("typst default"),
    );
}
