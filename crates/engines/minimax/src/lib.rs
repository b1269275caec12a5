//! Minimax Tic-Tac-Toe Engine
//!
//! Exhaustive minimax with optional alpha-beta pruning, an optional depth
//! limit backed by a positional heuristic, and configurable terminal scoring.

mod eval;
mod search;

use tracing::{debug, info};
use ttt_core::{Engine, Position, Result, SearchConfig, SearchResult, Side, TerminalScoring};

/// Tic-tac-toe engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Minimax search over every empty cell in row-major order
/// - Alpha-beta pruning (on by default, exact either way)
/// - Weighted-cell heuristic at the depth limit
/// - Optional rayon-parallel root evaluation
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    config: SearchConfig,
    /// Search root moves on the rayon pool
    parallel: bool,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            parallel: false,
            nodes: 0,
        }
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, pos: &Position, side: Side) -> Result<SearchResult> {
        self.nodes = 0;
        let sides = Sides::for_engine(side);

        let (best_move, score) = if self.parallel {
            pick_best_move_parallel(pos, sides, &self.config, &mut self.nodes)?
        } else {
            pick_best_move(pos, sides, &self.config, &mut self.nodes)?
        };

        info!(
            side = %side,
            mv = %best_move,
            score,
            nodes = self.nodes,
            "minimax move"
        );

        Ok(SearchResult {
            best_move,
            score,
            depth: self.config.depth_limit,
            nodes: self.nodes,
        })
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        let applied = match name.to_ascii_lowercase().as_str() {
            "depth" => value.parse::<u8>().map(|d| self.config.depth_limit = d).is_ok(),
            "pruning" => parse_bool(value).map(|b| self.config.pruning = b).is_some(),
            "win_shortcut" => parse_bool(value).map(|b| self.config.win_shortcut = b).is_some(),
            "parallel" => parse_bool(value).map(|b| self.parallel = b).is_some(),
            "scoring" => match value.to_ascii_lowercase().as_str() {
                "plain" => {
                    self.config.scoring = TerminalScoring::Plain;
                    true
                }
                "depth_biased" => {
                    self.config.scoring = TerminalScoring::DepthBiased;
                    true
                }
                _ => false,
            },
            _ => false,
        };
        debug!(name, value, applied, "set_option");
        applied
    }
}

// Re-export for direct use if needed
pub use eval::{evaluate, terminal_score, ScoreTable, SCORES};
pub use search::{
    best_move, minimax, pick_best_move, pick_best_move_parallel, root_scores, SearchContext,
    Sides, INFINITY,
};

#[cfg(test)]
mod lib_tests;
