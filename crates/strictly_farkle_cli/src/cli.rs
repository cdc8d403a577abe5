//! Command-line interface for strictly_farkle.

use clap::{Parser, Subcommand};

/// Strictly Farkle - single-player dice game in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_farkle")]
#[command(about = "Single-player Farkle in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game
    Play {
        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Seed for reproducible dice (overrides the config seed)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the score of a set of dice
    Score {
        /// Die faces (1-6)
        #[arg(value_parser = clap::value_parser!(u8).range(1..=6))]
        values: Vec<u8>,
    },
}
