//! Interactive play loop.
//!
//! The session reads one command per line, forwards it to the engine, and
//! re-renders from the engine's view afterwards. It never touches game
//! state itself.

use crate::render::{describe_error, describe_event, render_view};
use anyhow::Result;
use std::io::{BufRead, Write};
use strictly_farkle::{Action, BustChoice, DiceSource, Event, TurnEngine};
use tracing::{debug, info, instrument};

const HELP: &str = "\
Commands:
  roll            roll every die that is not locked
  toggle <n..>    select or deselect dice by number (1-6)
  bank            lock the selected dice and add their score to the round
  stop            end the round and bank the round score
  forfeit         give up the round score and start the next round
  reset           start a new game
  show            print the table
  help            print this message
  quit            leave the game";

/// A line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Engine actions to apply in order.
    Actions(Vec<Action>),
    /// Re-render the table.
    Show,
    /// Print the command list.
    Help,
    /// Leave the game.
    Quit,
}

impl Input {
    /// Parses a command line. Die numbers are 1-based.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(Input::Show);
        };
        let single = |action: Action| -> Result<Self, String> { Ok(Input::Actions(vec![action])) };
        match command.to_lowercase().as_str() {
            "roll" | "r" => single(Action::Roll),
            "bank" | "b" | "score" => single(Action::BankSelection),
            "stop" | "s" | "end" => single(Action::EndRound),
            "forfeit" => single(Action::ForfeitRound),
            "reset" | "new" => single(Action::ResetGame),
            "show" => Ok(Input::Show),
            "help" | "?" => Ok(Input::Help),
            "quit" | "q" | "exit" => Ok(Input::Quit),
            "toggle" | "t" => {
                let actions = words
                    .map(|w| match w.parse::<usize>() {
                        Ok(n) if n >= 1 => Ok(Action::ToggleDie(n - 1)),
                        _ => Err(format!("'{}' is not a die number", w)),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                if actions.is_empty() {
                    Err("toggle needs at least one die number".to_string())
                } else {
                    Ok(Input::Actions(actions))
                }
            }
            other => Err(format!("Unknown command '{}', try help", other)),
        }
    }
}

/// Terminal session driving one engine.
#[derive(Debug)]
pub struct Session<D, R, W> {
    engine: TurnEngine<D>,
    input: R,
    output: W,
}

impl<D: DiceSource, R: BufRead, W: Write> Session<D, R, W> {
    /// Creates a session over an engine and a pair of streams.
    pub fn new(engine: TurnEngine<D>, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
        }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &TurnEngine<D> {
        &self.engine
    }

    /// Consumes the session, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        info!("Session started");
        writeln!(self.output, "Welcome to Farkle! Type help for commands.")?;
        self.show()?;

        while let Some(line) = self.prompt("> ")? {
            match Input::parse(&line) {
                Ok(Input::Quit) => break,
                Ok(Input::Help) => writeln!(self.output, "{}", HELP)?,
                Ok(Input::Show) => self.show()?,
                Ok(Input::Actions(actions)) => {
                    if !self.play(actions)? {
                        break;
                    }
                }
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }

        info!(
            total_score = self.engine.total_score(),
            rounds = self.engine.round_number(),
            "Session finished"
        );
        writeln!(
            self.output,
            "Final score: {} after {} rounds.",
            self.engine.total_score(),
            self.engine.round_number()
        )?;
        Ok(())
    }

    /// Applies actions in order, stopping at the first rejection.
    /// Returns false when input ran out during a bust prompt.
    fn play(&mut self, actions: Vec<Action>) -> Result<bool> {
        for action in actions {
            debug!(%action, "Player action");
            match self.engine.apply(action) {
                Ok(Event::Bust(bust)) => {
                    writeln!(self.output, "{}", describe_event(&Event::Bust(bust)))?;
                    if !self.resolve_bust()? {
                        return Ok(false);
                    }
                }
                Ok(event) => writeln!(self.output, "{}", describe_event(&event))?,
                Err(err) => {
                    writeln!(self.output, "{}", describe_error(&err))?;
                    break;
                }
            }
        }
        self.show()?;
        Ok(true)
    }

    /// Asks the player how to answer a bust until they choose.
    fn resolve_bust(&mut self) -> Result<bool> {
        loop {
            let question = "Forfeit only this round (f) or throw in the towel (r)? ";
            let Some(answer) = self.prompt(question)? else {
                return Ok(false);
            };
            let choice = match answer.trim().to_lowercase().as_str() {
                "f" | "forfeit" => BustChoice::ForfeitRound,
                "r" | "reset" => BustChoice::ResetGame,
                _ => continue,
            };
            let event = self.engine.resolve_bust(choice)?;
            writeln!(self.output, "{}", describe_event(&event))?;
            return Ok(true);
        }
    }

    fn show(&mut self) -> Result<()> {
        writeln!(self.output, "{}", render_view(&self.engine.view()))?;
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toggle_is_one_based() {
        assert_eq!(
            Input::parse("toggle 1 3"),
            Ok(Input::Actions(vec![Action::ToggleDie(0), Action::ToggleDie(2)]))
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Input::parse("toggle").is_err());
        assert!(Input::parse("toggle 0").is_err());
        assert!(Input::parse("toggle x").is_err());
        assert!(Input::parse("dance").is_err());
    }

    #[test]
    fn test_blank_line_shows_table() {
        assert_eq!(Input::parse("   "), Ok(Input::Show));
        assert_eq!(Input::parse("STOP"), Ok(Input::Actions(vec![Action::EndRound])));
    }
}
