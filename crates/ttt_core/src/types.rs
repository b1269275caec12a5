use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{GameError, Result};

/// Board edge length. Only 3x3 is supported.
pub const BOARD_SIZE: u8 = 3;

/// Number of cells on the board.
pub const NUM_CELLS: usize = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Moves first.
    X,
    O,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::X, Side::O];

    pub fn other(self) -> Side {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Side::X => 0,
            Side::O => 1,
        }
    }
    pub fn symbol(self) -> char {
        match self {
            Side::X => 'X',
            Side::O => 'O',
        }
    }

    /// Parses `x`/`X`/`o`/`O`.
    pub fn from_symbol(c: char) -> Option<Side> {
        match c.to_ascii_uppercase() {
            'X' => Some(Side::X),
            'O' => Some(Side::O),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Side::X),
            Cell::O => Some(Side::O),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Cell::X,
            Side::O => Cell::O,
        }
    }
}

/// A cell coordinate, 0-indexed. The external (human) form is 1-indexed,
/// see [`crate::notation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: u8, // 0..3
    pub col: u8, // 0..3
}

impl Move {
    /// Every cell in scan order: row 0 first, columns left to right within a row.
    pub const ALL: [Move; NUM_CELLS] = [
        Move { row: 0, col: 0 },
        Move { row: 0, col: 1 },
        Move { row: 0, col: 2 },
        Move { row: 1, col: 0 },
        Move { row: 1, col: 1 },
        Move { row: 1, col: 2 },
        Move { row: 2, col: 0 },
        Move { row: 2, col: 1 },
        Move { row: 2, col: 2 },
    ];

    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Self { row, col }
    }

    pub fn try_new(row: u8, col: u8) -> Result<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self { row, col })
        } else {
            Err(GameError::OutOfRange { row, col })
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        (self.row * BOARD_SIZE + self.col) as usize
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Move::ALL.get(idx).copied()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}

/// Result of classifying a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    WonBy(Side),
    Draw,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::WonBy(side) => write!(f, "{side} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}
