//! Interactive tic-tac-toe against the minimax engine.
//!
//! Usage:
//!   tictactoe [--depth N] [--no-pruning] [--side X|O] [--depth-biased]
//!             [--win-shortcut] [--difficulty easy|medium|hard|classic]
//!             [--config search.toml]

mod session;

use anyhow::{bail, Context, Result};
use minimax_engine::MinimaxEngine;
use std::env;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ttt_core::{SearchConfig, Side, TerminalScoring};

use crate::session::Session;

struct Options {
    config: SearchConfig,
    side: Option<Side>,
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut config = SearchConfig::classic();
    let mut side = None;

    // A config file replaces the defaults; later flags override it
    if let Some(i) = args.iter().position(|a| a == "--config") {
        let path = args.get(i + 1).context("--config needs a path")?;
        config = SearchConfig::load(Path::new(path))
            .with_context(|| format!("failed to load search config {path}"))?;
    }

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => i += 1,
            "--depth" | "-d" => {
                let value = args.get(i + 1).context("--depth needs a value")?;
                config.depth_limit = value
                    .parse()
                    .with_context(|| format!("invalid depth {value:?}"))?;
                i += 1;
            }
            "--difficulty" => {
                let value = args.get(i + 1).context("--difficulty needs a value")?;
                config = SearchConfig::preset(value)
                    .with_context(|| format!("unknown difficulty {value:?}"))?;
                i += 1;
            }
            "--side" => {
                let value = args.get(i + 1).context("--side needs X or O")?;
                let mut chars = value.chars();
                side = match (chars.next().and_then(Side::from_symbol), chars.next()) {
                    (Some(side), None) => Some(side),
                    _ => bail!("invalid side {value:?}"),
                };
                i += 1;
            }
            "--no-pruning" => config.pruning = false,
            "--depth-biased" => config.scoring = TerminalScoring::DepthBiased,
            "--win-shortcut" => config.win_shortcut = true,
            other => bail!("unknown argument {other:?}"),
        }
        i += 1;
    }

    config.validate()?;
    Ok(Options { config, side })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(&args)?;
    info!(config = ?options.config, "starting game");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "\nWelcome to Tic Tac Toe!\n")?;
    writeln!(out, "Depth limit is set to: {}", options.config.depth_limit)?;
    let pruning = if options.config.pruning { "enabled" } else { "disabled" };
    writeln!(out, "Alpha-Beta pruning is {pruning}.\n")?;

    let engine = MinimaxEngine::with_config(options.config);
    let mut session = Session::new(io::stdin().lock(), out, engine);
    if let Some(side) = options.side {
        session = session.with_human_side(side);
    }
    session.run()?;
    Ok(())
}
