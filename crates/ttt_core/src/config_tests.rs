use super::*;

#[test]
fn test_default_is_full_depth_plain_scoring() {
    let config = SearchConfig::default();
    assert_eq!(config.depth_limit, 9);
    assert!(config.pruning);
    assert_eq!(config.scoring, TerminalScoring::Plain);
    assert!(!config.win_shortcut);
    assert_eq!(config.weights, HeuristicWeights::STANDARD);
}

#[test]
fn test_standard_weights_favor_center_then_corners() {
    let w = HeuristicWeights::STANDARD;
    let center = w.weight(Move::new(1, 1));
    let corner = w.weight(Move::new(0, 0));
    let edge = w.weight(Move::new(0, 1));
    assert!(center > corner && corner > edge);
}

#[test]
fn test_from_toml_partial() {
    let config = SearchConfig::from_toml_str(
        r#"
        depth_limit = 4
        pruning = false
        scoring = "depth_biased"
        "#,
    )
    .unwrap();
    assert_eq!(config.depth_limit, 4);
    assert!(!config.pruning);
    assert_eq!(config.scoring, TerminalScoring::DepthBiased);
    assert_eq!(config.weights, HeuristicWeights::STANDARD);
}

#[test]
fn test_from_toml_weights() {
    let config = SearchConfig::from_toml_str("weights = [[1, 1, 1], [1, 5, 1], [1, 1, 1]]").unwrap();
    assert_eq!(config.weights.weight(Move::new(1, 1)), 5);
}

#[test]
fn test_rejects_non_positive_weight() {
    let err = SearchConfig::from_toml_str("weights = [[1, 1, 1], [1, 0, 1], [1, 1, 1]]").unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));
}

#[test]
fn test_rejects_unknown_key() {
    let err = SearchConfig::from_toml_str("depth = 3").unwrap_err();
    assert!(matches!(err, GameError::Toml(_)));
}

#[test]
fn test_presets() {
    assert_eq!(SearchConfig::preset("easy").unwrap().depth_limit, 1);
    assert_eq!(SearchConfig::preset("Medium").unwrap().depth_limit, 3);
    assert_eq!(SearchConfig::preset("hard").unwrap().depth_limit, 9);
    assert_eq!(SearchConfig::preset("classic").unwrap().depth_limit, 5);
    assert!(SearchConfig::preset("impossible").is_none());
}
