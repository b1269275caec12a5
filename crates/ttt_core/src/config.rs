//! Search configuration.
//!
//! A `SearchConfig` is a plain value handed to every search call. Engines
//! keep their own copy; nothing here is process-wide.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{GameError, Result};
use crate::types::Move;

/// Positional weight of each cell, used only for leaves cut off by the
/// depth limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeuristicWeights(pub [[i32; 3]; 3]);

impl HeuristicWeights {
    /// Center 4, corners 3, edges 2.
    pub const STANDARD: HeuristicWeights = HeuristicWeights([[3, 2, 3], [2, 4, 2], [3, 2, 3]]);

    #[inline]
    pub fn weight(&self, mv: Move) -> i32 {
        self.0[mv.row as usize][mv.col as usize]
    }

    pub fn validate(&self) -> Result<()> {
        for mv in Move::ALL {
            let w = self.weight(mv);
            if w <= 0 {
                return Err(GameError::InvalidConfig(format!(
                    "weight at {mv} must be positive, got {w}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// How finished games are scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalScoring {
    /// Straight table lookup: win +10, loss -10, draw 0.
    #[default]
    Plain,
    /// Wins lose one point per ply and losses gain one, so the engine
    /// prefers the quickest win and the slowest loss.
    DepthBiased,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Plies searched below each root move before falling back to the heuristic.
    pub depth_limit: u8,
    /// Alpha-beta pruning. Never changes the result, only the node count.
    pub pruning: bool,
    pub weights: HeuristicWeights,
    pub scoring: TerminalScoring,
    /// Return a root move that wins on the spot without searching the rest.
    pub win_shortcut: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth_limit: 9,
            pruning: true,
            weights: HeuristicWeights::STANDARD,
            scoring: TerminalScoring::Plain,
            win_shortcut: false,
        }
    }
}

impl SearchConfig {
    /// Full-depth search with the given pruning setting.
    pub fn full_depth(pruning: bool) -> Self {
        Self {
            pruning,
            ..Self::default()
        }
    }

    pub fn with_depth(depth_limit: u8) -> Self {
        Self {
            depth_limit,
            ..Self::default()
        }
    }

    pub fn easy() -> Self {
        Self::with_depth(1)
    }

    pub fn medium() -> Self {
        Self::with_depth(3)
    }

    pub fn hard() -> Self {
        Self::with_depth(9)
    }

    /// Depth 5 with pruning, the settings the interactive game shipped with.
    pub fn classic() -> Self {
        Self::with_depth(5)
    }

    /// Looks up a named difficulty level.
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "easy" => Some(Self::easy()),
            "medium" => Some(Self::medium()),
            "hard" => Some(Self::hard()),
            "classic" => Some(Self::classic()),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.weights.validate()
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: SearchConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
