//! Tests for the interactive session against scripted dice.

use std::io::Cursor;
use strictly_farkle::{GamePhase, ScriptedDice, TurnEngine};
use strictly_farkle_cli::Session;

fn play(script: &[u8], input: &str) -> (TurnEngine<ScriptedDice>, String) {
    let dice = ScriptedDice::from_values(script).expect("valid script");
    let mut session = Session::new(
        TurnEngine::with_dice(dice),
        Cursor::new(input.to_string()),
        Vec::new(),
    );
    session.run().expect("session runs");
    let engine = session.engine().clone();
    let output = String::from_utf8(session.into_output()).expect("utf8 output");
    (engine, output)
}

#[test]
fn test_round_played_through_commands() {
    let (engine, output) = play(
        &[1, 1, 1, 2, 3, 4],
        "roll\ntoggle 1 2 3\nbank\nstop\nquit\n",
    );
    assert_eq!(engine.total_score(), 1000);
    assert_eq!(engine.round_number(), 1);
    assert!(output.contains("Round 1 complete. Total score: 1000"));
    assert!(output.contains("Final score: 1000 after 1 rounds."));
}

#[test]
fn test_rejections_are_reported_not_fatal() {
    let (engine, output) = play(&[1, 1, 1, 2, 3, 4], "toggle 1\nroll\ntoggle 7\nbank\n");
    assert!(output.contains("Roll before selecting dice to score!"));
    assert!(output.contains("There is no die 7, pick 1-6."));
    assert!(output.contains("Select scoring dice before banking!"));
    assert_eq!(engine.phase(), GamePhase::Scoring);
}

#[test]
fn test_bust_prompt_forfeits_round() {
    let (engine, output) = play(
        &[1, 2, 3, 4, 6, 6, 2, 3, 4, 6, 2],
        "roll\ntoggle 1\nbank\nroll\nmaybe\nf\nquit\n",
    );
    assert!(output.contains("Bust! Rolled [2 3 4 6 2], nothing scores."));
    assert!(output.contains("Round 1 forfeited, 100 points lost."));
    assert_eq!(engine.total_score(), 0);
    assert_eq!(engine.round_number(), 1);
    assert_eq!(engine.phase(), GamePhase::PreRoll);
}

#[test]
fn test_bust_prompt_resets_game() {
    let (engine, output) = play(
        &[5, 2, 3, 4, 6, 6, 2, 3, 4, 6, 6, 2],
        "roll\nt 1\nb\ns\nroll\nr\n",
    );
    assert!(output.contains("New game."));
    assert_eq!(engine.total_score(), 0);
    assert_eq!(engine.round_number(), 0);
}

#[test]
fn test_end_of_input_during_bust_ends_session() {
    let (engine, output) = play(&[2, 3, 4, 6, 2, 3], "roll\n");
    assert!(output.contains("Final score: 0 after 0 rounds."));
    assert_eq!(engine.phase(), GamePhase::Bust);
}
