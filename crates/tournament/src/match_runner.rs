//! Match runner for playing games between engines

use tracing::{debug, info};
use ttt_core::{classify, Engine, Outcome, Position, Result, Side};

use crate::config::TournamentConfig;
use crate::results::{GameRecord, GameResult, MatchResult, TournamentResults};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Whether to alternate sides each game
    pub alternate_sides: bool,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            alternate_sides: true,
            verbose: true,
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> Result<MatchResult> {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Alternate sides if configured
            let engine1_x = !self.config.alternate_sides || game_num % 2 == 0;

            let game = if engine1_x {
                self.play_game(engine1, engine2)?
            } else {
                self.play_game(engine2, engine1)?
            };

            let x_result = result_for_x(game.outcome);
            let game_result = if engine1_x {
                x_result
            } else {
                x_result.flipped()
            };
            result.record(game_result);

            info!(
                game = game_num + 1,
                engine1 = engine1.name(),
                engine2 = engine2.name(),
                outcome = %game.outcome,
                moves = game.moves.len(),
                "game finished"
            );

            if self.config.verbose {
                let side = if engine1_x { "X" } else { "O" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    side,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        Ok(result)
    }

    /// Play a single game from the empty board, `x` moving first
    pub fn play_game(&self, x: &mut dyn Engine, o: &mut dyn Engine) -> Result<GameRecord> {
        let mut pos = Position::empty();
        let mut moves = Vec::with_capacity(9);
        x.new_game();
        o.new_game();

        loop {
            let outcome = classify(&pos);
            if outcome.is_terminal() {
                return Ok(GameRecord { moves, outcome });
            }

            let side = pos.side_to_move();
            let result = match side {
                Side::X => x.search(&pos, side)?,
                Side::O => o.search(&pos, side)?,
            };
            debug!(side = %side, mv = %result.best_move, nodes = result.nodes, "move");

            // Engines are not trusted to return an on-board empty cell
            pos.try_place(result.best_move, side)?;
            moves.push(result.best_move);
        }
    }
}

/// Result of a finished game from X's perspective
fn result_for_x(outcome: Outcome) -> GameResult {
    match outcome {
        Outcome::WonBy(Side::X) => GameResult::Win,
        Outcome::WonBy(Side::O) => GameResult::Loss,
        Outcome::Draw | Outcome::InProgress => GameResult::Draw,
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
) -> Result<MatchResult> {
    let config = MatchConfig {
        num_games,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

/// Plays every pair of configured engines once.
pub fn run_round_robin(config: &TournamentConfig) -> Result<TournamentResults> {
    config.validate()?;

    let participants: Vec<String> = config.engines.iter().map(|e| e.name().to_string()).collect();
    let mut results = TournamentResults::new(&config.name, participants, config.games_per_match);
    let runner = MatchRunner::new(MatchConfig {
        num_games: config.games_per_match,
        alternate_sides: config.alternate_sides,
        verbose: config.verbose,
    });

    for (i, spec1) in config.engines.iter().enumerate() {
        for spec2 in &config.engines[i + 1..] {
            let mut engine1 = spec1.build()?;
            let mut engine2 = spec2.build()?;
            if config.verbose {
                println!("\n--- {} vs {} ---", spec1.name(), spec2.name());
            }
            let result = runner.run_match(engine1.as_mut(), engine2.as_mut())?;
            results.add_match(spec1.name(), spec2.name(), result);
        }
    }

    Ok(results)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
