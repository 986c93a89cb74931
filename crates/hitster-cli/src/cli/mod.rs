//! CLI for hitster-cards.

mod args;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use hitster_core::config;
use std::path::PathBuf;

pub use args::{FetchArgs, MonthLangArg, QrTypeArg, RenderArgs};
use commands::{run_fetch, run_generate, run_render};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "hitster-cards")]
#[command(about = "Generate Hitster game cards from a Spotify playlist", long_about = None)]
pub struct Cli {
    /// Log every song and every source answer (debug level).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of ~/.config/hitster-cards/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory for the snapshot and the PDFs.
    #[arg(long, global = true, default_value = ".", value_name = "DIR")]
    pub out_dir: PathBuf,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch and date a playlist (or reuse its snapshot), then print cards and year chart.
    Generate {
        #[command(flatten)]
        fetch: FetchArgs,
        #[command(flatten)]
        render: RenderArgs,
    },

    /// Fetch and date a playlist and write its JSON snapshot only.
    Fetch {
        #[command(flatten)]
        fetch: FetchArgs,
    },

    /// Print cards and year chart from an existing snapshot file.
    Render {
        /// Snapshot written by `fetch` or `generate` (hitster-data-<playlist>.json).
        snapshot: PathBuf,
        #[command(flatten)]
        render: RenderArgs,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match &self.command {
            CliCommand::Generate { fetch, render } => {
                run_generate(&cfg, &self.out_dir, fetch, render)?
            }
            CliCommand::Fetch { fetch } => run_fetch(&cfg, &self.out_dir, fetch)?,
            CliCommand::Render { snapshot, render } => {
                run_render(&cfg, &self.out_dir, snapshot, render)?
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
