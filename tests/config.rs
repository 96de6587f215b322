use chessai::board::Position;
use chessai::config::{EngineConfig, MinimaxConfig, MonteCarloConfig, RandomConfig};
use chessai::error::ConfigError;
use pretty_assertions::assert_eq;

#[test]
fn parses_each_engine_with_defaults() {
    let c = EngineConfig::from_json_str(r#"{ "engine": "minimax", "depth": 2 }"#).unwrap();
    assert_eq!(c, EngineConfig::Minimax(MinimaxConfig { depth: 2, ..MinimaxConfig::default() }));

    let c = EngineConfig::from_json_str(r#"{ "engine": "monte_carlo", "seed": 7, "simulations": 64 }"#).unwrap();
    assert_eq!(c, EngineConfig::MonteCarlo(MonteCarloConfig { seed: 7, simulations: 64, ..MonteCarloConfig::default() }));

    let c = EngineConfig::from_json_str(r#"{ "engine": "random" }"#).unwrap();
    assert_eq!(c, EngineConfig::Random(RandomConfig::default()));
}

#[test]
fn json_round_trip() {
    let c = EngineConfig::MonteCarlo(MonteCarloConfig { cycles: 12, threads: 3, ..MonteCarloConfig::default() });
    assert_eq!(EngineConfig::from_json_str(&c.to_json()).unwrap(), c);
}

#[test]
fn rejects_unknown_engines_and_missing_files() {
    assert!(matches!(EngineConfig::from_json_str(r#"{ "engine": "stockfish" }"#), Err(ConfigError::Json(_))));
    assert!(matches!(EngineConfig::from_path("/nonexistent/chessai.json"), Err(ConfigError::Io { .. })));
}

#[test]
fn built_engines_play_legal_moves() {
    let pos = Position::startpos();
    for cfg in [
        EngineConfig::Minimax(MinimaxConfig { depth: 1, ..MinimaxConfig::default() }),
        EngineConfig::MonteCarlo(MonteCarloConfig { simulations: 2, cycles: 5, max_rollout_plies: 10, ..MonteCarloConfig::default() }),
        EngineConfig::Random(RandomConfig { seed: 4 }),
    ] {
        let mut engine = cfg.build();
        let mv = engine.make_move(&pos).unwrap_or_else(|| panic!("{} found no move", engine.name()));
        assert!(pos.legal_moves().contains(&mv), "{} played {mv}", engine.name());
    }
}
