//! Search benchmark: node counts and timing with and without pruning.
//!
//! Usage:
//!   cargo run --release --example search_bench -p minimax_engine -- [depth] [position]
//!
//! Examples:
//!   # Default: full depth over the suite
//!   cargo run --release --example search_bench -p minimax_engine
//!
//!   # Depth-limited search of one position
//!   cargo run --release --example search_bench -p minimax_engine -- 3 "X../.O./..."

use minimax_engine::{pick_best_move, Sides};
use std::env;
use std::time::Instant;
use ttt_core::{Position, SearchConfig};

const TEST_POSITIONS: &[(&str, &str)] = &[
    ("Empty board", ".../.../..."),
    ("Corner opening", "X../.../..."),
    ("Center reply", "X../.O./..."),
    ("Open row threat", "XX./OO./..."),
    ("Block required", "OO./XX./..."),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(9);

    let positions: Vec<(String, String)> = match args.get(2) {
        Some(notation) => vec![("Custom".to_string(), notation.clone())],
        None => TEST_POSITIONS
            .iter()
            .map(|(name, notation)| (name.to_string(), notation.to_string()))
            .collect(),
    };

    println!("=== Search Benchmark ===");
    println!("Depth: {depth}");
    println!();

    for (name, notation) in positions {
        let pos = match Position::from_notation(&notation) {
            Ok(pos) => pos,
            Err(e) => {
                eprintln!("{name}: {e}");
                continue;
            }
        };
        let sides = Sides::for_engine(pos.side_to_move());

        for pruning in [false, true] {
            let config = SearchConfig {
                depth_limit: depth,
                pruning,
                ..SearchConfig::default()
            };
            let mut nodes = 0u64;

            let start = Instant::now();
            let result = pick_best_move(&pos, sides, &config, &mut nodes);
            let elapsed = start.elapsed();

            let label = if pruning { "alpha-beta" } else { "minimax" };
            match result {
                Ok((mv, score)) => println!(
                    "{name:.<24} {label:<10} best {mv} ({score:>3}) {nodes:>9} nodes in {elapsed:>9.3?}"
                ),
                Err(e) => println!("{name:.<24} {label:<10} {e}"),
            }
        }
    }
}
