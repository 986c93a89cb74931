//! `hitster-cards fetch <playlist>` – fetch, date and snapshot a playlist.

use anyhow::Result;
use hitster_core::config::HitsterConfig;
use hitster_core::credentials;
use hitster_core::pipeline::{self, FetchRequest, Fetched};
use std::io::Write;
use std::path::Path;

use crate::cli::FetchArgs;

pub fn run_fetch(cfg: &HitsterConfig, out_dir: &Path, args: &FetchArgs) -> Result<()> {
    let playlist_id = args.playlist_id()?;
    let fetched = fetch_songs(cfg, out_dir, &playlist_id, args)?;
    println!(
        "{} song(s) in {}",
        fetched.songs.len(),
        fetched.snapshot.display()
    );
    Ok(())
}

/// Snapshot or network, with a progress line while dating songs.
pub(crate) fn fetch_songs(
    cfg: &HitsterConfig,
    out_dir: &Path,
    playlist_id: &str,
    args: &FetchArgs,
) -> Result<Fetched> {
    let req = FetchRequest {
        playlist_id,
        added_after: args.added_after,
        refresh: args.refresh,
        out_dir,
    };
    let fetched = pipeline::load_or_fetch(cfg, &req, credentials::gemini_api_key(), |done, total| {
        print!("\r  dating songs {}/{}  ", done, total);
        let _ = std::io::stdout().flush();
        if done == total {
            println!();
        }
    })?;
    if fetched.from_cache {
        println!(
            "Using snapshot {} (pass --refresh to query again).",
            fetched.snapshot.display()
        );
    }
    Ok(fetched)
}
