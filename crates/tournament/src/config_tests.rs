use super::*;
use ttt_core::TerminalScoring;

const LADDER: &str = r#"
name = "ladder"
games_per_match = 4

[[engine]]
name = "hard"
kind = "minimax"
search = { depth_limit = 9, scoring = "depth_biased" }

[[engine]]
name = "easy"
kind = "minimax"
parallel = true
search = { depth_limit = 1, pruning = false }

[[engine]]
name = "monkey"
kind = "random"
seed = 42
"#;

#[test]
fn test_parse_ladder() {
    let config = TournamentConfig::from_toml_str(LADDER).unwrap();
    assert_eq!(config.name, "ladder");
    assert_eq!(config.games_per_match, 4);
    assert!(config.alternate_sides);
    assert_eq!(config.engines.len(), 3);

    match &config.engines[0] {
        EngineSpec::Minimax { name, search, parallel } => {
            assert_eq!(name, "hard");
            assert_eq!(search.scoring, TerminalScoring::DepthBiased);
            assert!(search.pruning);
            assert!(!parallel);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(
        config.engines[2],
        EngineSpec::Random {
            name: "monkey".to_string(),
            seed: Some(42)
        }
    );
}

#[test]
fn test_rejects_duplicate_names() {
    let toml = r#"
name = "dup"
[[engine]]
name = "a"
kind = "random"
[[engine]]
name = "a"
kind = "minimax"
"#;
    let err = TournamentConfig::from_toml_str(toml).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));
}

#[test]
fn test_rejects_single_engine() {
    let toml = r#"
name = "solo"
[[engine]]
name = "a"
kind = "random"
"#;
    assert!(TournamentConfig::from_toml_str(toml).is_err());
}

#[test]
fn test_parse_cli_specs() {
    assert_eq!(
        EngineSpec::parse("minimax:3").unwrap(),
        EngineSpec::Minimax {
            name: "minimax:3".to_string(),
            search: SearchConfig::with_depth(3),
            parallel: false,
        }
    );
    assert!(matches!(
        EngineSpec::parse("minimax:medium").unwrap(),
        EngineSpec::Minimax { search, .. } if search.depth_limit == 3
    ));
    assert_eq!(
        EngineSpec::parse("random:7").unwrap(),
        EngineSpec::Random {
            name: "random:7".to_string(),
            seed: Some(7)
        }
    );
    assert!(EngineSpec::parse("stockfish").is_err());
    assert!(EngineSpec::parse("random:abc").is_err());
    assert!(EngineSpec::parse("minimax:impossible").is_err());
}

#[test]
fn test_build_engines() {
    let config = TournamentConfig::from_toml_str(LADDER).unwrap();
    for spec in &config.engines {
        let engine = spec.build().unwrap();
        assert!(!engine.name().is_empty());
    }
}
