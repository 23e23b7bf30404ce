//! Command-line interface.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "tally", version, about = "Keep score from the terminal")]
pub struct Cli {
    /// Config file (default: <config dir>/tally/config.toml)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the starting score
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub seed: Option<i64>,

    /// Append every dispatched action to a JSON-lines file
    #[arg(long, value_name = "PATH")]
    pub record: Option<PathBuf>,

    /// Write logs to this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbose logging (-v for debug, -vv for trace)
    #[arg(long, short, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Apply a JSON-lines action file to a fresh store and print the final score
    Replay {
        /// Action records, one JSON object per line
        file: PathBuf,
    },
    /// Print the effective configuration as TOML
    ShowConfig,
}

impl Cli {
    /// Config path from `--config`, or the platform default.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(seed) = self.seed {
            config.store.seed = seed;
        }
        if let Some(path) = &self.record {
            config.recorder.path = Some(path.clone());
        }
    }
}
