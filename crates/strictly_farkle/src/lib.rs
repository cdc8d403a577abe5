//! Strictly Farkle - rules engine for a single-player Farkle-style dice game.
//!
//! # Architecture
//!
//! - **Scoring**: pure function from die faces to points
//! - **Engine**: state machine owning the six dice and the score counters
//! - **Contracts**: preconditions and postconditions every action passes through
//! - **View**: read-only snapshot a host renders after each command
//!
//! # Example
//!
//! ```
//! use strictly_farkle::{Event, GamePhase, ScriptedDice, TurnEngine};
//!
//! let dice = ScriptedDice::from_values(&[1, 1, 1, 2, 3, 4]).unwrap();
//! let mut engine = TurnEngine::with_dice(dice);
//!
//! assert_eq!(engine.roll().unwrap(), Event::Rolled { available_score: 1000 });
//! for index in 0..3 {
//!     engine.toggle_die(index).unwrap();
//! }
//! engine.bank_selection().unwrap();
//! engine.end_round().unwrap();
//!
//! assert_eq!(engine.total_score(), 1000);
//! assert_eq!(engine.phase(), GamePhase::PreRoll);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod config;
mod dice_source;
mod engine;
mod kani_support;
mod phase;
mod scoring;
mod state;
mod types;
mod view;

// Public modules
pub mod contracts;
pub mod invariants;

// Crate-level exports - Domain types
pub use types::{DICE_COUNT, Dice, Die, DieState, Face};

// Crate-level exports - Scoring
pub use scoring::{FaceValues, ScoringRules, score};

// Crate-level exports - Actions and phases
pub use action::{Action, ActionError, Bust, BustChoice, Event};
pub use phase::GamePhase;

// Crate-level exports - Engine
pub use dice_source::{DiceError, DiceSource, ScriptedDice, SeededDice};
pub use engine::TurnEngine;
pub use state::TurnState;
pub use view::{Controls, TurnView};

// Crate-level exports - Configuration
pub use config::{ConfigError, FarkleConfig};

// Crate-level exports - Contracts and invariants
pub use contracts::{ActionContract, Contract};
pub use invariants::{FarkleInvariants, Invariant, InvariantSet, InvariantViolation};
