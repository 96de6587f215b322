use chessai::board::{GameState, Position};
use chessai::config::MonteCarloConfig;
use chessai::search::mcts::rollout;
use chessai::search::{ChessEngine, MonteCarloEngine};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const MATE_IN_ONE: &str = "7k/p2rR1p1/1p1r1p2/3P4/4QPq1/1P6/P5PK/8 w - - 1 1";

fn small(seed: u64, simulations: u32, cycles: u32) -> MonteCarloEngine {
    MonteCarloEngine::with_config(&MonteCarloConfig {
        seed,
        exploration: 1.4142,
        simulations,
        cycles,
        max_rollout_plies: 40,
        threads: 0,
    })
}

#[test]
fn finds_mate_in_one() {
    let pos = Position::from_fen(MATE_IN_ONE).unwrap();
    let mut engine = small(0, 8, 120);
    let best = engine.make_move(&pos).expect("a move");
    assert_eq!(best.to_string(), "e7e8");
    assert_eq!(pos.apply(&best).game_state(), GameState::WhiteWin);
    assert!(engine.statistics().unwrap().contains("e7e8"));
}

#[test]
fn no_moves_and_forced_moves() {
    let mut engine = small(0, 4, 10);
    let mated = Position::from_fen("8/8/8/8/kQK5/8/8/8 b - - 0 1").unwrap();
    assert!(engine.make_move(&mated).is_none());

    let forced = Position::from_fen("6kR/p2rR1p1/1p1r1p2/3P4/4QPq1/1P6/P5PK/8 b - - 2 1").unwrap();
    let only = engine.make_move_with(&forced, &mut |_| {}, &|| false).unwrap();
    assert_eq!(only.mv.to_string(), "g8h8");
    assert_eq!(only.eval, None);
}

#[test]
fn same_seed_same_move() {
    let pos = Position::startpos();
    let a = small(11, 4, 30).make_move_with(&pos, &mut |_| {}, &|| false).unwrap();
    let b = small(11, 4, 30).make_move_with(&pos, &mut |_| {}, &|| false).unwrap();
    assert_eq!(a, b);

    let threaded = MonteCarloEngine::with_config(&MonteCarloConfig { threads: 2, ..*small(11, 4, 30).config() })
        .make_move_with(&pos, &mut |_| {}, &|| false)
        .unwrap();
    assert_eq!(a, threaded, "thread count must not change the result");
}

#[test]
fn progress_every_ten_cycles() {
    let mut engine = small(3, 2, 30);
    let mut calls = 0;
    let best = engine.make_move_with(&Position::startpos(), &mut |_| calls += 1, &|| false);
    assert!(best.is_some());
    assert_eq!(calls, 3);
}

#[test]
fn cancellation_still_returns_a_legal_move() {
    let pos = Position::startpos();
    let mut engine = small(0, 4, 1000);
    let best = engine.make_move_with(&pos, &mut |_| {}, &|| true).unwrap();
    assert!(pos.legal_moves().contains(&best.mv));
    assert_eq!(best.eval, None);
}

#[test]
fn rollouts_end_in_a_result() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mated = Position::from_fen("8/8/8/8/kQK5/8/8/8 b - - 0 1").unwrap();
    assert_eq!(rollout(&mated, &mut rng, 10), GameState::WhiteWin);
    // two bare kings never finish and are cut off as a draw
    let bare = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    assert_eq!(rollout(&bare, &mut rng, 30), GameState::Draw);
    assert_eq!(rollout(&Position::startpos(), &mut rng, 0), GameState::Draw);
}
