pub mod board;
pub mod config;
pub mod error;
pub mod notation;
pub mod perft;
pub mod rules;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use config::*;
pub use error::{GameError, Result};
pub use notation::*;
pub use perft::perft;
pub use rules::*;
pub use types::*;

// =============================================================================
// Engine trait: implemented by every player the tournament can seat
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen move
    pub best_move: Move,
    /// Backed-up score of the chosen move from the engine's perspective
    pub score: i32,
    /// Depth limit the search ran with
    pub depth: u8,
    /// Number of nodes searched (for stats)
    pub nodes: u64,
}

/// Trait that all engines must implement.
///
/// Lets the tournament and the interactive game swap between the minimax
/// engine and simple baselines.
pub trait Engine: Send {
    /// Picks a move for `side` in `pos`.
    ///
    /// # Errors
    /// Fails when the position has no empty cell. The caller decides what
    /// to do once a game is over; engines never return a meaningless move.
    fn search(&mut self, pos: &Position, side: Side) -> Result<SearchResult>;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "ttt-lab"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// Optional: Set a named option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
