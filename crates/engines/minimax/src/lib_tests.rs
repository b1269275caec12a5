use super::*;
use ttt_core::{GameError, Move};

#[test]
fn minimax_engine_blocks_immediate_loss() {
    let mut engine = MinimaxEngine::new();
    let pos = Position::from_notation("X.X/.O./...").unwrap();

    let result = engine.search(&pos, Side::O).unwrap();

    assert_eq!(result.best_move, Move::new(0, 1));
    assert_eq!(result.depth, 9);
    assert!(result.nodes > 0);
    assert_eq!(engine.nodes(), result.nodes);
}

#[test]
fn minimax_engine_rejects_full_board() {
    let mut engine = MinimaxEngine::new();
    let pos = Position::from_notation("XOX/XOO/OXX").unwrap();

    let err = engine.search(&pos, Side::X).unwrap_err();

    assert!(matches!(err, GameError::NoEmptyCells));
}

#[test]
fn minimax_engine_parallel_agrees() {
    let pos = Position::from_notation("X../.O./..X").unwrap();
    let mut seq = MinimaxEngine::new();
    let mut par = MinimaxEngine::new().parallel(true);

    let a = seq.search(&pos, Side::O).unwrap();
    let b = par.search(&pos, Side::O).unwrap();

    assert_eq!(a, b);
}

#[test]
fn minimax_engine_options() {
    let mut engine = MinimaxEngine::new();
    assert!(engine.set_option("depth", "3"));
    assert!(engine.set_option("Pruning", "off"));
    assert!(engine.set_option("scoring", "depth_biased"));
    assert!(engine.set_option("win_shortcut", "true"));
    assert!(!engine.set_option("depth", "deep"));
    assert!(!engine.set_option("hash", "16"));

    let config = engine.config();
    assert_eq!(config.depth_limit, 3);
    assert!(!config.pruning);
    assert_eq!(config.scoring, TerminalScoring::DepthBiased);
    assert!(config.win_shortcut);
}
