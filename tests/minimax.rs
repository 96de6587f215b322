use chessai::board::{GameState, Position};
use chessai::search::eval::{is_mate_score, material_eval};
use chessai::search::{ChessEngine, MinimaxEngine};
use std::cell::Cell;

const MATE_IN_TWO: &str = "6k1/p2rR1p1/1p1r1p1R/3P4/4QPq1/1P6/P5PK/8 w - - 1 1";
const MATE_IN_ONE: &str = "7k/p2rR1p1/1p1r1p2/3P4/4QPq1/1P6/P5PK/8 w - - 1 1";

#[test]
fn finds_mate_in_two_and_plays_it_out() {
    let mut engine = MinimaxEngine::new(2);
    let board1 = Position::from_fen(MATE_IN_TWO).unwrap();
    let first = engine.make_move(&board1).expect("a move");
    assert_eq!(first.to_string(), "h6h8");

    let board2 = board1.apply(&first);
    let reply = engine.make_move(&board2).expect("a reply");
    assert_eq!(reply.to_string(), "g8h8");

    let board3 = board2.apply(&reply);
    let mate = engine.make_move(&board3).expect("mating move");
    let board4 = board3.apply(&mate);
    assert_eq!(board4.game_state(), GameState::WhiteWin, "{} did not mate", mate);
}

#[test]
fn finds_mate_in_one() {
    let mut engine = MinimaxEngine::new(2);
    let pos = Position::from_fen(MATE_IN_ONE).unwrap();
    let best = engine.make_move_with(&pos, &mut |_| {}, &|| false).expect("a move");
    assert_eq!(best.mv.to_string(), "e7e8");
    assert!(best.eval.map_or(false, is_mate_score), "eval {:?}", best.eval);
    assert_eq!(pos.apply(&best.mv).game_state(), GameState::WhiteWin);
}

#[test]
fn black_prefers_mate_too() {
    // colour-flipped mate-in-one position
    let pos = Position::from_fen("8/p5pk/1p6/4qpQ1/3p4/1P1R1P2/P2Rr1P1/7K b - - 1 1").unwrap();
    let mut engine = MinimaxEngine::new(1);
    let best = engine.make_move_with(&pos, &mut |_| {}, &|| false).expect("a move");
    assert_eq!(best.mv.to_string(), "e2e1");
    assert!(best.eval.map_or(false, |e| e < 0 && is_mate_score(e)));
}

#[test]
fn no_moves_and_forced_moves() {
    let mut engine = MinimaxEngine::new(3);
    let mated = Position::from_fen("8/8/8/8/kQK5/8/8/8 b - - 0 1").unwrap();
    assert!(engine.make_move(&mated).is_none());

    let forced = Position::from_fen("6kR/p2rR1p1/1p1r1p2/3P4/4QPq1/1P6/P5PK/8 b - - 2 1").unwrap();
    let calls = Cell::new(0);
    let only = engine.make_move_with(&forced, &mut |_| calls.set(calls.get() + 1), &|| false).unwrap();
    assert_eq!(only.mv.to_string(), "g8h8");
    assert_eq!(only.eval, None, "forced move is returned without search");
    assert_eq!(calls.get(), 0);
}

#[test]
fn wins_material() {
    let pos = Position::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").unwrap();
    let mut engine = MinimaxEngine::new(1);
    assert_eq!(engine.make_move(&pos).unwrap().to_string(), "e4d5");
}

#[test]
fn progress_after_every_root_move() {
    let mut engine = MinimaxEngine::new(1);
    let mut seen = Vec::new();
    let best = engine.make_move_with(&Position::startpos(), &mut |m| seen.push(*m), &|| false).unwrap();
    assert_eq!(seen.len(), 20);
    assert_eq!(seen.last().copied(), Some(best));
    assert_eq!(best.eval, Some(0));
}

#[test]
fn cancellation_returns_a_legal_move() {
    let mut engine = MinimaxEngine::new(2);
    let pos = Position::startpos();
    let mut calls = 0;
    let best = engine.make_move_with(&pos, &mut |_| calls += 1, &|| true).unwrap();
    assert_eq!(calls, 0);
    assert!(pos.legal_moves().contains(&best.mv));
    assert_eq!(best.eval, None);

    // stop after three root moves
    let checked = Cell::new(0);
    let mut calls = 0;
    engine.make_move_with(&pos, &mut |_| calls += 1, &|| { checked.set(checked.get() + 1); checked.get() > 3 });
    assert_eq!(calls, 3);
}

#[test]
fn evaluate_is_material_at_the_leaves() {
    let mut engine = MinimaxEngine::new(1);
    let pos = Position::startpos();
    assert_eq!(engine.evaluate(&pos, 0), material_eval(&pos));
    assert_eq!(engine.evaluate(&pos, 2), 0);
    assert!(engine.nodes() > 20);
    let up = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
    assert_eq!(material_eval(&up), 500);
}

#[test]
fn shared_keys_give_the_same_search() {
    use chessai::search::zobrist::ZobristKeys;
    let keys = ZobristKeys::shared(42);
    let pos = Position::from_fen(MATE_IN_TWO).unwrap();
    let mut a = MinimaxEngine::new(2).with_keys(keys.clone());
    let mut b = MinimaxEngine::new(2).with_keys(keys);
    assert_eq!(a.make_move(&pos), b.make_move(&pos));
    assert_eq!(a.nodes(), b.nodes());
    assert_eq!(a.statistics(), Some(format!("depth: 2 nodes: {}", a.nodes())));
}
