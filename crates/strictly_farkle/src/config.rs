//! Game configuration loaded from TOML.

use crate::dice_source::{DiceSource, ScriptedDice, SeededDice};
use crate::engine::TurnEngine;
use crate::scoring::ScoringRules;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Configuration for a game.
///
/// ```toml
/// seed = 42
///
/// [rules.single]
/// ones = 100
/// twos = 0
/// threes = 0
/// fours = 0
/// fives = 50
/// sixes = 0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct FarkleConfig {
    /// Seed for reproducible dice. Entropy is used when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Fixed faces to replay instead of random dice. Takes precedence over `seed`.
    #[serde(default)]
    script: Option<Vec<u8>>,

    /// Scoring table.
    #[serde(default)]
    rules: ScoringRules,
}

impl FarkleConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(seed = ?config.seed, scripted = config.script.is_some(), "Config loaded");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    ///
    /// Rejects scoring tables whose best six-dice throw does not fit the
    /// engine's `u32` counters.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        let highest = config.rules.highest_roll();
        if highest > u64::from(u32::MAX) {
            warn!(highest, "Scoring table out of range");
            return Err(ConfigError::new(format!(
                "Scoring table too large: a single roll could score {}, limit is {}",
                highest,
                u32::MAX
            )));
        }
        Ok(config)
    }

    /// Replaces the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configured dice source.
    #[instrument(skip(self))]
    pub fn dice_source(&self) -> Result<Box<dyn DiceSource>, ConfigError> {
        if let Some(script) = &self.script {
            let dice = ScriptedDice::from_values(script)
                .map_err(|e| ConfigError::new(format!("Invalid dice script: {}", e)))?;
            debug!(len = script.len(), "Using scripted dice");
            return Ok(Box::new(dice));
        }
        let dice: Box<dyn DiceSource> = match self.seed {
            Some(seed) => Box::new(SeededDice::from_seed(seed)),
            None => Box::new(SeededDice::from_entropy()),
        };
        Ok(dice)
    }

    /// Builds an engine with the configured dice and rules.
    #[instrument(skip(self))]
    pub fn engine(&self) -> Result<TurnEngine<Box<dyn DiceSource>>, ConfigError> {
        Ok(TurnEngine::with_rules(self.dice_source()?, self.rules))
    }
}

/// A game config that could not be read, parsed, or turned into dice.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// What was wrong with the config.
    pub message: String,
    /// Line of the check that rejected it.
    pub line: u32,
    /// File of the check that rejected it.
    pub file: &'static str,
}

impl ConfigError {
    /// Records the caller's location with the message.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
