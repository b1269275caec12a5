use std::fmt;

use crate::error::{GameError, Result};
use crate::types::*;

/// A 3x3 grid of cells.
///
/// Search code mutates a position in place with [`Position::place`] and
/// restores it with [`Position::clear`]; every caller must undo what it
/// placed before returning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub cells: [[Cell; 3]; 3],
}

impl Position {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a position from raw rows without checking mark counts, so
    /// analysis positions can be set up freely.
    pub fn from_rows(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Parses compact notation such as `"XX./OO./..."`.
    ///
    /// `X`/`O` (any case) are marks; `.`, `-`, `_` and spaces are empty
    /// cells; `/` row separators are optional. The mark counts must be
    /// reachable from the empty board with X moving first.
    pub fn from_notation(s: &str) -> Result<Self> {
        let mut cells = Vec::with_capacity(NUM_CELLS);
        for c in s.chars() {
            let cell = match c {
                '/' | '\n' | '\r' => continue,
                '.' | '-' | '_' | ' ' => Cell::Empty,
                _ => match Side::from_symbol(c) {
                    Some(side) => Cell::from(side),
                    None => return Err(GameError::InvalidCell(c)),
                },
            };
            cells.push(cell);
        }
        if cells.len() != NUM_CELLS {
            return Err(GameError::BadLength(cells.len()));
        }

        let mut pos = Self::empty();
        for (mv, cell) in Move::ALL.iter().zip(cells) {
            pos.cells[mv.row as usize][mv.col as usize] = cell;
        }
        pos.validate()?;
        Ok(pos)
    }

    pub fn to_notation(&self) -> String {
        let mut s = String::with_capacity(11);
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                s.push('/');
            }
            for cell in row {
                s.push(match cell.side() {
                    Some(side) => side.symbol(),
                    None => '.',
                });
            }
        }
        s
    }

    #[inline]
    pub fn cell(&self, mv: Move) -> Cell {
        self.cells[mv.row as usize][mv.col as usize]
    }

    /// Puts `side`'s mark on `mv`. The cell is expected to be empty.
    #[inline]
    pub fn place(&mut self, mv: Move, side: Side) {
        debug_assert!(self.cell(mv).is_empty(), "place on occupied cell {mv}");
        self.cells[mv.row as usize][mv.col as usize] = Cell::from(side);
    }

    /// Undoes a [`Position::place`].
    #[inline]
    pub fn clear(&mut self, mv: Move) {
        self.cells[mv.row as usize][mv.col as usize] = Cell::Empty;
    }

    /// Checked placement for callers outside the search (game loops, notation).
    pub fn try_place(&mut self, mv: Move, side: Side) -> Result<()> {
        let mv = Move::try_new(mv.row, mv.col)?;
        if !self.cell(mv).is_empty() {
            return Err(GameError::Occupied(mv));
        }
        self.place(mv, side);
        Ok(())
    }

    /// Empty cells in scan order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        Move::ALL.into_iter().filter(|&mv| self.cell(mv).is_empty())
    }

    pub fn has_empty_cell(&self) -> bool {
        self.empty_cells().next().is_some()
    }

    pub fn is_full(&self) -> bool {
        !self.has_empty_cell()
    }

    pub fn count(&self, side: Side) -> usize {
        let target = Cell::from(side);
        self.cells.iter().flatten().filter(|&&c| c == target).count()
    }

    /// Moves played so far.
    pub fn ply(&self) -> usize {
        self.count(Side::X) + self.count(Side::O)
    }

    /// X when the counts are equal, O otherwise.
    pub fn side_to_move(&self) -> Side {
        if self.count(Side::X) == self.count(Side::O) {
            Side::X
        } else {
            Side::O
        }
    }

    /// Checks that X has played as many marks as O, or exactly one more.
    pub fn validate(&self) -> Result<()> {
        let x = self.count(Side::X);
        let o = self.count(Side::O);
        if x == o || x == o + 1 {
            Ok(())
        } else {
            Err(GameError::ImbalancedMarks { x, o })
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const DIVIDER: &str = "---------";
        writeln!(f, "{DIVIDER}")?;
        for (r, row) in self.cells.iter().enumerate() {
            let rendered: Vec<String> = row
                .iter()
                .map(|c| c.side().map_or(' ', Side::symbol).to_string())
                .collect();
            writeln!(f, "{}", rendered.join(" | "))?;
            if r + 1 < self.cells.len() {
                writeln!(f, "{DIVIDER}")?;
            }
        }
        write!(f, "{DIVIDER}")
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
