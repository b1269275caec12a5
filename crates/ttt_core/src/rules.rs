//! Terminal-state detection.

use crate::board::Position;
use crate::types::*;

/// Every winning line, in the order they are checked: rows, columns,
/// main diagonal, anti-diagonal.
pub const LINES: [[Move; 3]; 8] = [
    [Move { row: 0, col: 0 }, Move { row: 0, col: 1 }, Move { row: 0, col: 2 }],
    [Move { row: 1, col: 0 }, Move { row: 1, col: 1 }, Move { row: 1, col: 2 }],
    [Move { row: 2, col: 0 }, Move { row: 2, col: 1 }, Move { row: 2, col: 2 }],
    [Move { row: 0, col: 0 }, Move { row: 1, col: 0 }, Move { row: 2, col: 0 }],
    [Move { row: 0, col: 1 }, Move { row: 1, col: 1 }, Move { row: 2, col: 1 }],
    [Move { row: 0, col: 2 }, Move { row: 1, col: 2 }, Move { row: 2, col: 2 }],
    [Move { row: 0, col: 0 }, Move { row: 1, col: 1 }, Move { row: 2, col: 2 }],
    [Move { row: 0, col: 2 }, Move { row: 1, col: 1 }, Move { row: 2, col: 0 }],
];

/// Returns the first completed line and its owner.
pub fn winning_line(pos: &Position) -> Option<(Side, [Move; 3])> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let side = pos.cell(a).side()?;
        (pos.cell(b) == pos.cell(a) && pos.cell(c) == pos.cell(a)).then_some((side, line))
    })
}

/// Classifies a position.
///
/// A completed line always wins over a full board.
pub fn classify(pos: &Position) -> Outcome {
    if let Some((side, _)) = winning_line(pos) {
        return Outcome::WonBy(side);
    }
    if pos.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
