//! Human-facing move text: two 1-indexed numbers, `"row col"`.

use crate::{board::Position, error::*, rules::classify, types::*};

pub fn move_to_text(mv: Move) -> String {
    mv.to_string()
}

/// Parses `"2 3"` (or `"2,3"`) into the 0-indexed move (1, 2).
pub fn parse_move(txt: &str) -> Result<Move> {
    let err = || GameError::ParseMove(txt.trim().to_string());

    let mut parts = txt
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty());
    let row: u8 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
    let col: u8 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
    if parts.next().is_some() {
        return Err(err());
    }
    if !(1..=BOARD_SIZE).contains(&row) || !(1..=BOARD_SIZE).contains(&col) {
        return Err(err());
    }
    Move::try_new(row - 1, col - 1)
}

/// Replays `moves` on `pos`, alternating sides from whoever is to move.
pub fn apply_moves(pos: &mut Position, moves: &[&str]) -> Result<()> {
    for txt in moves {
        let outcome = classify(pos);
        if outcome.is_terminal() {
            return Err(GameError::GameOver(outcome));
        }
        let mv = parse_move(txt)?;
        let side = pos.side_to_move();
        pos.try_place(mv, side)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
