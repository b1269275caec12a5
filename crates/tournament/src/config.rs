//! Tournament configuration, read from TOML.
//!
//! ```toml
//! name = "difficulty ladder"
//! games_per_match = 20
//!
//! [[engine]]
//! name = "hard"
//! kind = "minimax"
//! search = { depth_limit = 9 }
//!
//! [[engine]]
//! name = "random"
//! kind = "random"
//! seed = 42
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use ttt_core::{Engine, GameError, Result, SearchConfig};

/// One participant and how to build it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EngineSpec {
    Minimax {
        name: String,
        #[serde(default)]
        search: SearchConfig,
        #[serde(default)]
        parallel: bool,
    },
    Random {
        name: String,
        #[serde(default)]
        seed: Option<u64>,
    },
}

impl EngineSpec {
    pub fn name(&self) -> &str {
        match self {
            EngineSpec::Minimax { name, .. } | EngineSpec::Random { name, .. } => name,
        }
    }

    /// Parses a command-line engine spec.
    ///
    /// - `minimax` - full depth
    /// - `minimax:<depth>` or `minimax:<preset>` (easy, medium, hard, classic)
    /// - `random` or `random:<seed>`
    pub fn parse(spec: &str) -> Result<Self> {
        let (kind, arg) = match spec.split_once(':') {
            Some((kind, arg)) => (kind, Some(arg)),
            None => (spec, None),
        };
        let unknown = || GameError::InvalidConfig(format!("unknown engine spec {spec:?}"));

        match kind.to_ascii_lowercase().as_str() {
            "minimax" | "mm" => {
                let search = match arg {
                    None => SearchConfig::default(),
                    Some(arg) => match arg.parse::<u8>() {
                        Ok(depth) => SearchConfig::with_depth(depth),
                        Err(_) => SearchConfig::preset(arg).ok_or_else(unknown)?,
                    },
                };
                Ok(EngineSpec::Minimax {
                    name: spec.to_string(),
                    search,
                    parallel: false,
                })
            }
            "random" | "rand" => {
                let seed = match arg {
                    None => None,
                    Some(arg) => Some(arg.parse::<u64>().map_err(|_| unknown())?),
                };
                Ok(EngineSpec::Random {
                    name: spec.to_string(),
                    seed,
                })
            }
            _ => Err(unknown()),
        }
    }

    pub fn build(&self) -> Result<Box<dyn Engine>> {
        match self {
            EngineSpec::Minimax {
                search, parallel, ..
            } => {
                search.validate()?;
                Ok(Box::new(
                    MinimaxEngine::with_config(search.clone()).parallel(*parallel),
                ))
            }
            EngineSpec::Random { seed, .. } => Ok(Box::new(match seed {
                Some(seed) => RandomEngine::with_seed(*seed),
                None => RandomEngine::new(),
            })),
        }
    }
}

fn default_games() -> u32 {
    10
}

fn default_true() -> bool {
    true
}

/// Tournament configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentConfig {
    pub name: String,
    #[serde(default = "default_games")]
    pub games_per_match: u32,
    #[serde(default = "default_true")]
    pub alternate_sides: bool,
    #[serde(default)]
    pub verbose: bool,
    #[serde(rename = "engine")]
    pub engines: Vec<EngineSpec>,
}

impl TournamentConfig {
    pub fn validate(&self) -> Result<()> {
        if self.engines.len() < 2 {
            return Err(GameError::InvalidConfig(
                "a tournament needs at least two engines".to_string(),
            ));
        }
        if self.games_per_match == 0 {
            return Err(GameError::InvalidConfig(
                "games_per_match must be at least 1".to_string(),
            ));
        }
        let mut names = HashSet::new();
        for engine in &self.engines {
            if !names.insert(engine.name()) {
                return Err(GameError::InvalidConfig(format!(
                    "duplicate engine name {:?}",
                    engine.name()
                )));
            }
            if let EngineSpec::Minimax { search, .. } = engine {
                search.validate()?;
            }
        }
        Ok(())
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: TournamentConfig = toml::from_str(s)?;
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
