//! Tournament CLI
//!
//! Run matches and round robins between engines.

use anyhow::{bail, Context, Result};
use std::env;
use std::path::Path;
use tournament::{run_round_robin, EngineSpec, MatchConfig, MatchRunner, TournamentConfig};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Tic-tac-toe Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [--games N] [--quiet]");
    println!("  tournament round-robin <config.toml> [--json]");
    println!();
    println!("Engines:");
    println!("  minimax           - Full-depth alpha-beta");
    println!("  minimax:<depth>   - Depth-limited search");
    println!("  minimax:<preset>  - easy, medium, hard or classic");
    println!("  random[:<seed>]   - Uniformly random empty cell");
    println!();
    println!("Examples:");
    println!("  tournament match minimax random:42 --games 100");
    println!("  tournament match minimax:easy minimax:hard");
}

fn run_match(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        print_usage();
        bail!("match requires two engine specifications");
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];

    // Parse optional arguments
    let mut num_games: u32 = 10;
    let mut verbose = true;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                let value = args.get(i + 1).context("--games needs a value")?;
                num_games = value
                    .parse()
                    .with_context(|| format!("invalid game count {value:?}"))?;
                i += 1;
            }
            "--quiet" | "-q" => verbose = false,
            other => bail!("unknown option {other:?}"),
        }
        i += 1;
    }

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!("Games: {}", num_games);
    println!();

    let mut engine1 = EngineSpec::parse(engine1_spec)?.build()?;
    let mut engine2 = EngineSpec::parse(engine2_spec)?.build()?;

    let config = MatchConfig {
        num_games,
        verbose,
        ..Default::default()
    };

    let runner = MatchRunner::new(config);
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut())?;

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);
    Ok(())
}

fn run_tournament(args: &[String]) -> Result<()> {
    let Some(path) = args.first() else {
        print_usage();
        bail!("round-robin requires a config file");
    };
    let json = args.iter().skip(1).any(|a| a == "--json");

    let config = TournamentConfig::load(Path::new(path))
        .with_context(|| format!("failed to load tournament config {path}"))?;
    let results = run_round_robin(&config)?;

    if json {
        println!("{}", results.to_json()?);
    } else {
        results.print_report();
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "round-robin" | "rr" => run_tournament(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command: {other}")
        }
    }
}
