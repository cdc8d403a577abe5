//! Strictly Farkle - terminal game
//!
//! Plays single-player Farkle on stdin/stdout, or scores a set of dice.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use strictly_farkle::{Face, FarkleConfig, score};
use strictly_farkle_cli::{Cli, Command, Session};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play { config, seed } => run_play(config, seed),
        Command::Score { values } => run_score(values),
    }
}

/// Run an interactive game on the terminal
#[instrument]
fn run_play(config: Option<PathBuf>, seed: Option<u64>) -> Result<()> {
    let mut config = match config {
        Some(path) => FarkleConfig::from_file(&path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => FarkleConfig::default(),
    };
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    info!(?config, "Starting game");
    let engine = config.engine()?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(engine, stdin.lock(), stdout.lock());
    session.run()
}

/// Print the score of the given faces
#[instrument]
fn run_score(values: Vec<u8>) -> Result<()> {
    let faces = values
        .iter()
        .map(|&v| Face::from_value(v).with_context(|| format!("invalid die face {}", v)))
        .collect::<Result<Vec<_>>>()?;
    println!("{}", score(faces));
    Ok(())
}
