//! Printable output: the card deck PDF and the release-year chart PDF.
//!
//! Both are typeset by the external `typst` compiler. We stage a small
//! source tree (embedded template, JSON data, QR SVGs) in a directory and run
//! `typst compile` on it; with `source_only` the tree is left on disk instead.

mod cards;
mod typst;
mod years;

pub use cards::{card_entries, stage_cards, CardEntry};
pub use typst::TypstCompiler;
pub use years::{stage_years, year_distribution, YearCount};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::{QrContent, RenderConfig};
use crate::model::DatedSong;
use crate::release_date::MonthLang;

/// Effective render settings: config defaults with CLI overrides applied.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub typst_bin: String,
    pub font: Option<String>,
    pub edition: Option<String>,
    pub qr_content: QrContent,
    pub month_lang: MonthLang,
    pub show_day: bool,
}

impl From<&RenderConfig> for RenderOptions {
    fn from(cfg: &RenderConfig) -> Self {
        Self {
            typst_bin: cfg.typst_bin.clone(),
            font: cfg.font.clone(),
            edition: cfg.edition.clone(),
            qr_content: cfg.qr_content,
            month_lang: cfg.month_lang,
            show_day: cfg.show_day,
        }
    }
}

/// Outcome of a render step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Pdf(PathBuf),
    /// Typst sources written to this directory (not compiled).
    Source(PathBuf),
    /// Nothing to draw (e.g. no songs with a year).
    Skipped,
}

/// Typeset the card deck to `out_pdf` (or leave sources next to it).
pub fn render_cards(
    songs: &[DatedSong],
    opts: &RenderOptions,
    out_pdf: &Path,
    source_only: bool,
) -> Result<Rendered> {
    let compiler = TypstCompiler::new(&opts.typst_bin);
    let mut inputs = Vec::new();
    if let Some(edition) = &opts.edition {
        inputs.push(("edition", edition.as_str()));
    }
    if let Some(font) = &opts.font {
        inputs.push(("font", font.as_str()));
    }
    let stage = |dir: &Path| stage_cards(dir, songs, opts);
    run_stage(&compiler, out_pdf, source_only, &inputs, cards::MAIN, stage)
}

/// Typeset the release-year distribution chart to `out_pdf`.
pub fn render_years(
    songs: &[DatedSong],
    opts: &RenderOptions,
    out_pdf: &Path,
    source_only: bool,
) -> Result<Rendered> {
    let counts = year_distribution(songs.iter().map(|s| s.release_date.year()));
    if counts.is_empty() {
        tracing::warn!("no valid year data; skipping year distribution chart");
        return Ok(Rendered::Skipped);
    }
    let compiler = TypstCompiler::new(&opts.typst_bin);
    let stage = |dir: &Path| stage_years(dir, &counts);
    run_stage(&compiler, out_pdf, source_only, &[], years::MAIN, stage)
}

/// Stage into a temp dir and compile, or stage into `<out>-typst/` and stop.
fn run_stage<F>(
    compiler: &TypstCompiler,
    out_pdf: &Path,
    source_only: bool,
    inputs: &[(&str, &str)],
    main: &str,
    stage: F,
) -> Result<Rendered>
where
    F: Fn(&Path) -> Result<()>,
{
    if source_only {
        let dir = source_dir_for(out_pdf);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("create dir: {}", dir.display()))?;
        stage(&dir)?;
        return Ok(Rendered::Source(dir));
    }

    let scratch = tempfile::Builder::new()
        .prefix("hitster-typst-")
        .tempdir()
        .context("create typst scratch dir")?;
    stage(scratch.path())?;
    compiler.compile(scratch.path(), main, out_pdf, inputs)?;
    Ok(Rendered::Pdf(out_pdf.to_path_buf()))
}

/// `out/hitster-cards-x.pdf` -> `out/hitster-cards-x-typst/`.
fn source_dir_for(out_pdf: &Path) -> PathBuf {
    let stem = out_pdf
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "hitster".to_string());
    out_pdf.with_file_name(format!("{}-typst", stem))
}
