use super::*;
use ttt_core::Side;

fn x_engine() -> Sides {
    Sides::for_engine(Side::X)
}

#[test]
fn test_empty_board_is_zero() {
    let pos = Position::empty();
    assert_eq!(evaluate(&pos, x_engine(), &HeuristicWeights::STANDARD), 0);
}

#[test]
fn test_weights_follow_engine_side() {
    // X center (4), O corner (3)
    let pos = Position::from_notation("O../.X./...").unwrap();
    let weights = HeuristicWeights::STANDARD;
    assert_eq!(evaluate(&pos, Sides::for_engine(Side::X), &weights), 1);
    assert_eq!(evaluate(&pos, Sides::for_engine(Side::O), &weights), -1);
}

#[test]
fn test_custom_weights() {
    let pos = Position::from_notation("XO./.../...").unwrap();
    let weights = HeuristicWeights([[10, 1, 1], [1, 1, 1], [1, 1, 1]]);
    assert_eq!(evaluate(&pos, x_engine(), &weights), 9);
}

#[test]
fn test_evaluate_is_pure() {
    let pos = Position::from_notation("XO./.X./...").unwrap();
    let weights = HeuristicWeights::STANDARD;
    let a = evaluate(&pos, x_engine(), &weights);
    let b = evaluate(&pos, x_engine(), &weights);
    assert_eq!(a, b);
}

#[test]
fn test_plain_terminal_scores() {
    let sides = x_engine();
    let plain = TerminalScoring::Plain;
    assert_eq!(terminal_score(Outcome::WonBy(Side::X), sides, 3, plain), Some(10));
    assert_eq!(terminal_score(Outcome::WonBy(Side::O), sides, 3, plain), Some(-10));
    assert_eq!(terminal_score(Outcome::Draw, sides, 3, plain), Some(0));
    assert_eq!(terminal_score(Outcome::InProgress, sides, 3, plain), None);
}

#[test]
fn test_depth_biased_prefers_fast_wins_and_slow_losses() {
    let sides = x_engine();
    let biased = TerminalScoring::DepthBiased;
    let quick_win = terminal_score(Outcome::WonBy(Side::X), sides, 0, biased).unwrap();
    let slow_win = terminal_score(Outcome::WonBy(Side::X), sides, 4, biased).unwrap();
    let quick_loss = terminal_score(Outcome::WonBy(Side::O), sides, 1, biased).unwrap();
    let slow_loss = terminal_score(Outcome::WonBy(Side::O), sides, 5, biased).unwrap();
    assert_eq!(quick_win, 10);
    assert_eq!(slow_win, 6);
    assert!(slow_loss > quick_loss);
    assert_eq!(terminal_score(Outcome::Draw, sides, 7, biased), Some(0));
}
