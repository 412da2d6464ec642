//! Command-line interface for timeline_tui.

use crate::config::{ConfigError, TuiConfig};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use timeline_tictactoe::FirstPlayerMode;

/// Timeline tic-tac-toe - play, rewind and branch in the terminal
#[derive(Parser, Debug)]
#[command(name = "timeline_tui")]
#[command(about = "Tic-tac-toe with a time-travel move list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Who opens each game
    #[arg(long, value_enum)]
    pub first_player: Option<StartArg>,

    /// Show the latest move at the top of the move list
    #[arg(long)]
    pub descending: bool,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Opening player choice on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartArg {
    /// Coin flip every game
    Random,
    /// X always starts
    X,
    /// O always starts
    O,
}

impl From<StartArg> for FirstPlayerMode {
    fn from(arg: StartArg) -> Self {
        match arg {
            StartArg::Random => FirstPlayerMode::Random,
            StartArg::X => FirstPlayerMode::X,
            StartArg::O => FirstPlayerMode::O,
        }
    }
}

impl Cli {
    /// Reads the config file, if any, and layers the flags over it.
    pub fn resolve(self) -> Result<TuiConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => TuiConfig::from_file(path)?,
            None => TuiConfig::default(),
        };
        Ok(base.override_with(
            self.first_player.map(FirstPlayerMode::from),
            self.descending,
            self.log_file,
        ))
    }
}
