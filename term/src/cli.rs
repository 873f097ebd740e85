//! Command line arguments and logging setup.

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use termsweeper_core::{CellCount, Coord, GameConfig, GameError};

#[derive(Debug, Parser)]
#[command(author, version, about = "Minesweeper in the terminal")]
pub(crate) struct Args {
    /// Number of rows for the board.
    #[arg(short, long, value_name = "ROWS", default_value_t = 5)]
    pub rows: Coord,

    /// Number of columns for the board.
    #[arg(short, long, value_name = "COLS", default_value_t = 10)]
    pub cols: Coord,

    /// Number of bombs to place on the board, capped at rows * cols.
    #[arg(short, long, value_name = "COUNT", default_value_t = 5)]
    pub bombs: CellCount,

    /// Show placement of the bombs.
    #[arg(long)]
    pub debug: bool,

    /// Seed for bomb placement, random when omitted.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Write log output to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

impl Args {
    pub(crate) fn game_config(&self) -> Result<GameConfig, GameError> {
        GameConfig::new(self.rows, self.cols, self.bombs, self.debug)
    }
}

/// Installs `env_logger` at the level picked by `-v`/`-q`, `RUST_LOG` still wins.
///
/// Logging to stderr while the board is on screen garbles the display, so anything above
/// the default level is best sent to `--log-file`.
pub(crate) fn init_logging(args: &Args) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(args.verbosity.log_level_filter())
        .parse_default_env();

    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("Failed to install logger")
}
