//! Argument groups shared between subcommands.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use hitster_core::config::{HitsterConfig, QrContent};
use hitster_core::release_date::MonthLang;
use hitster_core::render::RenderOptions;
use hitster_core::spotify::parse_playlist_id;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Playlist ID, spotify:playlist:<id> URI or open.spotify.com share link.
    #[arg(env = "PLAYLIST_ID")]
    pub playlist: String,

    /// Only include songs added after this date.
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_day)]
    pub added_after: Option<NaiveDate>,

    /// Ignore an existing snapshot and query all sources again.
    #[arg(long)]
    pub refresh: bool,
}

impl FetchArgs {
    pub fn playlist_id(&self) -> Result<String> {
        parse_playlist_id(&self.playlist)
            .with_context(|| format!("not a Spotify playlist ID or link: {:?}", self.playlist))
    }
}

fn parse_day(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MonthLangArg {
    En,
    De,
}

impl From<MonthLangArg> for MonthLang {
    fn from(a: MonthLangArg) -> Self {
        match a {
            MonthLangArg::En => MonthLang::En,
            MonthLangArg::De => MonthLang::De,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QrTypeArg {
    /// Track URL.
    Url,
    /// Bare track ID.
    Id,
}

impl From<QrTypeArg> for QrContent {
    fn from(a: QrTypeArg) -> Self {
        match a {
            QrTypeArg::Url => QrContent::Url,
            QrTypeArg::Id => QrContent::Id,
        }
    }
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Cards PDF (default: hitster-cards-<playlist>.pdf in --out-dir).
    #[arg(long, value_name = "FILE")]
    pub cards_pdf: Option<PathBuf>,

    /// Year distribution PDF (default: hitster-years-<playlist>.pdf in --out-dir).
    #[arg(long, value_name = "FILE")]
    pub years_pdf: Option<PathBuf>,

    /// Language for month names on the cards.
    #[arg(long, value_enum)]
    pub month_lang: Option<MonthLangArg>,

    /// Omit the day from the release date.
    #[arg(long)]
    pub no_day: bool,

    /// QR code content.
    #[arg(long, value_enum)]
    pub qr_type: Option<QrTypeArg>,

    /// Edition label printed on the cards (e.g. "Summer 2025").
    #[arg(long)]
    pub edition: Option<String>,

    /// Font family for the cards; must be installed.
    #[arg(long)]
    pub font: Option<String>,

    /// Write the typst sources next to the PDF paths instead of compiling.
    #[arg(long)]
    pub typst_source_only: bool,

    /// Extra card: qr-string,title,year,artist,month. Repeatable.
    #[arg(short = 'c', long = "custom-card", value_name = "QR,TITLE,YEAR,ARTIST,MONTH")]
    pub custom_cards: Vec<String>,
}

impl RenderArgs {
    /// Config `[render]` defaults with flags applied on top.
    pub fn options(&self, cfg: &HitsterConfig) -> RenderOptions {
        let mut opts = RenderOptions::from(&cfg.render);
        if let Some(lang) = self.month_lang {
            opts.month_lang = lang.into();
        }
        if self.no_day {
            opts.show_day = false;
        }
        if let Some(qr) = self.qr_type {
            opts.qr_content = qr.into();
        }
        if self.edition.is_some() {
            opts.edition = self.edition.clone();
        }
        if self.font.is_some() {
            opts.font = self.font.clone();
        }
        opts
    }
}
