//! Shared tail of `generate` and `render`: custom cards, shuffle, typeset.

use anyhow::Result;
use hitster_core::custom_card::parse_custom_card;
use hitster_core::deck::{shuffle_deck, DECK_SEED};
use hitster_core::filename::output_name;
use hitster_core::model::DatedSong;
use hitster_core::render::{self, RenderOptions, Rendered};
use std::path::{Path, PathBuf};

use crate::cli::RenderArgs;

/// Where the two PDFs go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DeckPaths {
    pub cards: PathBuf,
    pub years: PathBuf,
}

impl DeckPaths {
    pub fn new(out_dir: &Path, playlist: &str, args: &RenderArgs) -> Self {
        Self {
            cards: args
                .cards_pdf
                .clone()
                .unwrap_or_else(|| out_dir.join(output_name("cards", playlist, "pdf"))),
            years: args
                .years_pdf
                .clone()
                .unwrap_or_else(|| out_dir.join(output_name("years", playlist, "pdf"))),
        }
    }
}

/// Append valid custom cards; malformed ones are logged and skipped.
pub(crate) fn add_custom_cards(songs: &mut Vec<DatedSong>, specs: &[String]) {
    for spec in specs {
        match parse_custom_card(spec, songs.len() + 1) {
            Ok(card) => {
                tracing::info!(
                    "added custom card '{}': title '{}', year {}, artist '{}'",
                    card.id,
                    card.name,
                    card.release_date,
                    card.artists_joined()
                );
                songs.push(card);
            }
            Err(e) => tracing::error!("{}: {:?}", e, spec),
        }
    }
}

pub(crate) fn render_deck(
    mut songs: Vec<DatedSong>,
    opts: &RenderOptions,
    args: &RenderArgs,
    paths: &DeckPaths,
) -> Result<()> {
    add_custom_cards(&mut songs, &args.custom_cards);
    if songs.is_empty() {
        anyhow::bail!("no songs to print");
    }
    shuffle_deck(&mut songs, DECK_SEED);

    tracing::info!("typesetting {} card(s)", songs.len());
    report("Cards", render::render_cards(&songs, opts, &paths.cards, args.typst_source_only)?);
    report("Year distribution", render::render_years(&songs, opts, &paths.years, args.typst_source_only)?);
    tracing::info!("done");
    Ok(())
}

fn report(what: &str, rendered: Rendered) {
    match rendered {
        Rendered::Pdf(path) => println!("{} written to {}", what, path.display()),
        Rendered::Source(dir) => println!("{} typst sources written to {}", what, dir.display()),
        Rendered::Skipped => println!("{} skipped (no data)", what),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn render_args(extra: &[&str]) -> RenderArgs {
        let mut argv = vec!["hitster-cards", "render", "snap.json"];
        argv.extend_from_slice(extra);
        match crate::cli::Cli::try_parse_from(argv).unwrap().command {
            crate::cli::CliCommand::Render { render, .. } => render,
            _ => panic!("expected Render"),
        }
    }

    #[test]
    fn default_paths_use_playlist() {
        let paths = DeckPaths::new(Path::new("out"), "abc", &render_args(&[]));
        assert_eq!(paths.cards, PathBuf::from("out/hitster-cards-abc.pdf"));
        assert_eq!(paths.years, PathBuf::from("out/hitster-years-abc.pdf"));
    }

    #[test]
    fn explicit_paths_win() {
        let paths = DeckPaths::new(
            Path::new("out"),
            "abc",
            &render_args(&["--cards-pdf", "deck.pdf", "--years-pdf", "chart.pdf"]),
        );
        assert_eq!(paths.cards, PathBuf::from("deck.pdf"));
        assert_eq!(paths.years, PathBuf::from("chart.pdf"));
    }

    #[test]
    fn custom_cards_numbered_after_songs_and_bad_ones_skipped() {
        let mut songs = Vec::new();
        add_custom_cards(
            &mut songs,
            &[
                "https://x.example/1,First,1990,Someone,May".to_string(),
                "broken".to_string(),
                "https://x.example/2,Second,1991,Other,".to_string(),
            ],
        );
        let ids: Vec<&str> = songs.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["custom_1", "custom_2"]);
    }

    #[test]
    fn typst_sources_only() {
        let dir = tempfile::tempdir().unwrap();
        let args = render_args(&["--typst-source-only", "-c", "https://x.example/1,Only,1990,Someone,"]);
        let opts = args.options(&hitster_core::config::HitsterConfig::default());
        let paths = DeckPaths::new(dir.path(), "abc", &args);
        render_deck(Vec::new(), &opts, &args, &paths).unwrap();
        assert!(dir.path().join("hitster-cards-abc-typst/cards.typ").exists());
        assert!(dir.path().join("hitster-cards-abc-typst/qr/0.svg").exists());
        assert!(dir.path().join("hitster-years-abc-typst/years.json").exists());
    }
}
