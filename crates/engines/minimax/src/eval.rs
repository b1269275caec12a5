//! Terminal scores and the positional heuristic.

use ttt_core::{HeuristicWeights, Move, Outcome, Position, TerminalScoring};

use crate::search::Sides;

/// Scores for finished games, from the engine's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTable {
    pub engine_win: i32,
    pub opponent_win: i32,
    pub draw: i32,
}

pub const SCORES: ScoreTable = ScoreTable {
    engine_win: 10,
    opponent_win: -10,
    draw: 0,
};

/// Score of a finished game, or `None` while it is still in progress.
///
/// With [`TerminalScoring::DepthBiased`] every ply below the root move
/// costs a win one point and softens a loss by one.
pub fn terminal_score(
    outcome: Outcome,
    sides: Sides,
    depth: u8,
    scoring: TerminalScoring,
) -> Option<i32> {
    let bias = match scoring {
        TerminalScoring::Plain => 0,
        TerminalScoring::DepthBiased => i32::from(depth),
    };
    match outcome {
        Outcome::InProgress => None,
        Outcome::Draw => Some(SCORES.draw),
        Outcome::WonBy(side) if side == sides.engine => Some(SCORES.engine_win - bias),
        Outcome::WonBy(_) => Some(SCORES.opponent_win + bias),
    }
}

/// Evaluates a non-terminal position from the engine's perspective.
///
/// Returns the summed weight of the engine's cells minus the summed weight
/// of the opponent's cells.
pub fn evaluate(pos: &Position, sides: Sides, weights: &HeuristicWeights) -> i32 {
    let mut score = 0i32;

    for mv in Move::ALL {
        match pos.cell(mv).side() {
            Some(side) if side == sides.engine => score += weights.weight(mv),
            Some(side) if side == sides.opponent => score -= weights.weight(mv),
            _ => {}
        }
    }

    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
