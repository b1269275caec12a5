//! Random Move Tic-Tac-Toe Engine
//!
//! A simple engine that selects uniformly at random among the empty cells.
//! Useful for:
//! - Exercising the tournament runner with non-drawn games
//! - Baseline comparisons (the minimax engine should never lose to this)

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;
use ttt_core::{Engine, GameError, Move, Position, Result, SearchResult, Side};


/// An engine that plays random empty cells.
///
/// Seeded engines replay the same choices after every `new_game`.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    seed: Option<u64>,
    rng: StdRng,
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            seed: None,
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, pos: &Position, side: Side) -> Result<SearchResult> {
        let moves: Vec<Move> = pos.empty_cells().collect();
        self.nodes = moves.len() as u64;

        let best_move = *moves.choose(&mut self.rng).ok_or(GameError::NoEmptyCells)?;
        debug!(side = %side, mv = %best_move, "random move");

        Ok(SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: self.nodes,
        })
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
        if let Some(seed) = self.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
    }
}
