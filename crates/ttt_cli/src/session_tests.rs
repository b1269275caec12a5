use super::*;
use minimax_engine::MinimaxEngine;
use std::io::Cursor;
use ttt_core::SearchConfig;

fn play(input: &str, side: Option<Side>) -> (Result<Outcome>, String, Position) {
    let mut output = Vec::new();
    let engine = MinimaxEngine::with_config(SearchConfig::default());
    let mut session = Session::new(Cursor::new(input.to_string()), &mut output, engine);
    if let Some(side) = side {
        session = session.with_human_side(side);
    }
    let outcome = session.run();
    let board = *session.board();
    drop(session);
    (outcome, String::from_utf8(output).unwrap(), board)
}

#[test]
fn test_engine_beats_careless_human() {
    // Human O plays along the top edge and never blocks.
    let (outcome, output, _) = play("O\n1 2\n1 3\n3 2\n2 1\n", None);
    assert_eq!(outcome.unwrap(), Outcome::WonBy(Side::X));
    assert!(output.contains("Do you want to play as X or O?"));
    assert!(output.contains("X wins!"));
}

#[test]
fn test_invalid_input_reprompts() {
    let (outcome, output, board) = play("1 1\nfoo\n1 1\n9 9\n", Some(Side::X));
    // Input runs out while the game is still going
    assert!(outcome.is_err());
    assert_eq!(output.matches("Invalid move. Try again.").count(), 3);
    assert_eq!(board.cell(Move::new(0, 0)), ttt_core::Cell::X);
    assert_eq!(board.count(Side::O), 1);
}

#[test]
fn test_side_prompt_rejects_garbage() {
    let (_, output, _) = play("maybe\nx\n", None);
    assert!(output.contains("Please answer X or O."));
    assert!(output.contains("Enter your move"));
}

#[test]
fn test_engine_opens_when_human_plays_o() {
    let mut output = Vec::new();
    let engine = MinimaxEngine::new();
    let mut session = Session::new(Cursor::new(String::new()), &mut output, engine)
        .with_human_side(Side::O);
    // No input available: the engine opens, then reading fails.
    assert!(session.run().is_err());
    assert_eq!(session.board().count(Side::X), 1);
    assert_eq!(session.board().cell(Move::new(0, 0)), ttt_core::Cell::X);
}
