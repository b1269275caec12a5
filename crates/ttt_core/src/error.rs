//! Error type shared by every crate in the workspace.

use thiserror::Error;

use crate::types::{Move, Outcome, Side};

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("no empty cell left to play")]
    NoEmptyCells,
    #[error("engine and opponent are both {0}")]
    SameSides(Side),
    #[error("invalid cell character {0:?}")]
    InvalidCell(char),
    #[error("expected 9 cells, found {0}")]
    BadLength(usize),
    #[error("mark counts are inconsistent (X: {x}, O: {o})")]
    ImbalancedMarks { x: usize, o: usize },
    #[error("cell ({row}, {col}) is outside the 3x3 board")]
    OutOfRange { row: u8, col: u8 },
    #[error("cell {0} is already occupied")]
    Occupied(Move),
    #[error("cannot parse move {0:?}: expected two numbers between 1 and 3")]
    ParseMove(String),
    #[error("game is already over ({0})")]
    GameOver(Outcome),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
