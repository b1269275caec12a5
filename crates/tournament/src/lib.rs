//! Tournament Runner for tic-tac-toe engines
//!
//! This crate provides infrastructure for:
//! - Running matches between different engines
//! - Round-robin tournaments described by a TOML file
//! - Generating reports (text and JSON) of the results
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the minimax engine and the random baseline
//! cargo run -p tournament -- match minimax random:42 --games 100
//!
//! # Run a round robin from a config file
//! cargo run -p tournament -- round-robin tournament.toml
//! ```

mod config;
mod match_runner;
mod results;

pub use config::*;
pub use match_runner::*;
pub use results::*;
