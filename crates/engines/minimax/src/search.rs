//! Minimax search with optional alpha-beta pruning

use rayon::prelude::*;
use tracing::{debug, trace};
use ttt_core::{classify, GameError, Move, Outcome, Position, Result, SearchConfig, Side};

use crate::eval::{evaluate, terminal_score, SCORES};

/// Bound used for the initial alpha-beta window. Far outside any score.
pub const INFINITY: i32 = i32::MAX / 2;

/// Which side maximizes and which minimizes. Fixed for a whole search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sides {
    pub engine: Side,
    pub opponent: Side,
}

impl Sides {
    pub fn new(engine: Side, opponent: Side) -> Result<Self> {
        let sides = Self { engine, opponent };
        sides.validate()?;
        Ok(sides)
    }

    /// The engine plays `engine`, the opponent the other side.
    pub fn for_engine(engine: Side) -> Self {
        Self {
            engine,
            opponent: engine.other(),
        }
    }

    pub fn validate(self) -> Result<()> {
        if self.engine == self.opponent {
            return Err(GameError::SameSides(self.engine));
        }
        Ok(())
    }

    #[inline]
    fn mover(self, maximizing: bool) -> Side {
        if maximizing {
            self.engine
        } else {
            self.opponent
        }
    }
}

/// Everything a search needs besides the position itself.
#[derive(Debug, Clone, Copy)]
pub struct SearchContext<'a> {
    pub sides: Sides,
    pub config: &'a SearchConfig,
}

/// Recursive minimax search.
///
/// `depth` counts plies below the root move. Finished games are scored
/// before the depth limit is looked at, so a win or draw is always exact.
/// With pruning enabled the returned value for a full `(-INFINITY, INFINITY)`
/// window is identical to the unpruned one.
///
/// Every mark placed is cleared again before the function returns.
pub fn minimax(
    pos: &mut Position,
    depth: u8,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    ctx: &SearchContext<'_>,
    nodes: &mut u64,
) -> i32 {
    let outcome = classify(pos);
    if let Some(score) = terminal_score(outcome, ctx.sides, depth, ctx.config.scoring) {
        return score;
    }

    if depth >= ctx.config.depth_limit {
        return evaluate(pos, ctx.sides, &ctx.config.weights);
    }

    let mover = ctx.sides.mover(maximizing);
    let mut best = if maximizing { -INFINITY } else { INFINITY };

    for mv in Move::ALL {
        if !pos.cell(mv).is_empty() {
            continue;
        }
        pos.place(mv, mover);
        *nodes += 1;

        let score = minimax(pos, depth + 1, !maximizing, alpha, beta, ctx, nodes);

        pos.clear(mv);

        if maximizing {
            best = best.max(score);
            if ctx.config.pruning {
                alpha = alpha.max(best);
            }
        } else {
            best = best.min(score);
            if ctx.config.pruning {
                beta = beta.min(best);
            }
        }
        if ctx.config.pruning && beta <= alpha {
            break; // Cutoff: no sibling can change the parent's choice
        }
    }

    best
}

/// Scores a single root move: plays it, searches the reply tree from the
/// opponent's side, and takes it back.
fn score_root_move(tmp: &mut Position, mv: Move, ctx: &SearchContext<'_>, nodes: &mut u64) -> i32 {
    tmp.place(mv, ctx.sides.engine);
    *nodes += 1;
    let score = minimax(tmp, 0, false, -INFINITY, INFINITY, ctx, nodes);
    tmp.clear(mv);
    score
}

fn wins_immediately(pos: &Position, mv: Move, engine: Side) -> bool {
    let mut tmp = *pos;
    tmp.place(mv, engine);
    classify(&tmp) == Outcome::WonBy(engine)
}

fn check_preconditions(pos: &Position, sides: Sides) -> Result<()> {
    sides.validate()?;
    if !pos.has_empty_cell() {
        return Err(GameError::NoEmptyCells);
    }
    Ok(())
}

/// First move in scan order with the highest score. Later equal scores never
/// replace an earlier one.
fn first_best(scored: impl IntoIterator<Item = (Move, i32)>) -> Option<(Move, i32)> {
    scored.into_iter().fold(None, |best, (mv, score)| match best {
        Some((_, best_score)) if score <= best_score => best,
        _ => Some((mv, score)),
    })
}

/// Searches every empty cell for `sides.engine` and returns the best move
/// with its score.
///
/// # Arguments
/// * `pos` - The position to search; never modified
/// * `sides` - Engine (maximizing) and opponent (minimizing) sides
/// * `config` - Depth limit, pruning, weights and scoring variant
/// * `nodes` - Counter for nodes searched (for statistics)
///
/// # Errors
/// `NoEmptyCells` on a full board, `SameSides` when both sides are equal.
pub fn pick_best_move(
    pos: &Position,
    sides: Sides,
    config: &SearchConfig,
    nodes: &mut u64,
) -> Result<(Move, i32)> {
    check_preconditions(pos, sides)?;

    let ctx = SearchContext { sides, config };
    let mut tmp = *pos;
    let mut best = None;

    for mv in Move::ALL {
        if !tmp.cell(mv).is_empty() {
            continue;
        }

        if config.win_shortcut && wins_immediately(&tmp, mv, sides.engine) {
            *nodes += 1;
            debug!(%mv, "immediate win");
            return Ok((mv, SCORES.engine_win));
        }

        let score = score_root_move(&mut tmp, mv, &ctx, nodes);
        trace!(%mv, score, "root move scored");

        best = first_best(best.into_iter().chain([(mv, score)]));
    }

    best.ok_or(GameError::NoEmptyCells)
}

/// Same decision as [`pick_best_move`], with root moves searched on
/// separate copies of the position across the rayon pool.
pub fn pick_best_move_parallel(
    pos: &Position,
    sides: Sides,
    config: &SearchConfig,
    nodes: &mut u64,
) -> Result<(Move, i32)> {
    check_preconditions(pos, sides)?;

    let candidates: Vec<Move> = pos.empty_cells().collect();

    if config.win_shortcut {
        if let Some(&mv) = candidates
            .iter()
            .find(|&&mv| wins_immediately(pos, mv, sides.engine))
        {
            *nodes += 1;
            debug!(%mv, "immediate win");
            return Ok((mv, SCORES.engine_win));
        }
    }

    let scored: Vec<(Move, i32, u64)> = candidates
        .par_iter()
        .map(|&mv| {
            let ctx = SearchContext { sides, config };
            let mut tmp = *pos;
            let mut local_nodes = 0u64;
            let score = score_root_move(&mut tmp, mv, &ctx, &mut local_nodes);
            (mv, score, local_nodes)
        })
        .collect();

    *nodes += scored.iter().map(|&(_, _, n)| n).sum::<u64>();
    first_best(scored.into_iter().map(|(mv, score, _)| (mv, score))).ok_or(GameError::NoEmptyCells)
}

/// Backed-up score of every legal root move, in scan order. The win
/// shortcut is not applied.
pub fn root_scores(pos: &Position, sides: Sides, config: &SearchConfig) -> Result<Vec<(Move, i32)>> {
    check_preconditions(pos, sides)?;

    let ctx = SearchContext { sides, config };
    let mut tmp = *pos;
    let mut nodes = 0u64;
    let candidates: Vec<Move> = pos.empty_cells().collect();
    Ok(candidates
        .into_iter()
        .map(|mv| (mv, score_root_move(&mut tmp, mv, &ctx, &mut nodes)))
        .collect())
}

/// Decision entry point for callers that hold the sides separately.
pub fn best_move(
    pos: &Position,
    engine: Side,
    opponent: Side,
    config: &SearchConfig,
) -> Result<Move> {
    let sides = Sides::new(engine, opponent)?;
    let mut nodes = 0;
    pick_best_move(pos, sides, config, &mut nodes).map(|(mv, _)| mv)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
