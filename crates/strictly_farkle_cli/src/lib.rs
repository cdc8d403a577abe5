//! Terminal host for the strictly_farkle rules engine.
//!
//! The host owns no game state: it parses commands, forwards them to a
//! [`strictly_farkle::TurnEngine`], and renders the engine's view.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod render;
mod session;

pub use cli::{Cli, Command};
pub use render::{describe_error, describe_event, render_view};
pub use session::{Input, Session};
