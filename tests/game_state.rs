use chessai::board::{GameState, Position};

fn state(fen: &str) -> GameState { Position::from_fen(fen).expect("valid FEN").game_state() }

#[test]
fn checkmate_is_a_win_for_the_other_side() {
    assert_eq!(state("8/8/8/8/kQK5/8/8/8 b - - 0 1"), GameState::WhiteWin);
    assert_eq!(state("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3"), GameState::BlackWin);
}

#[test]
fn stalemate_is_a_draw() {
    assert_eq!(state("8/8/8/8/8/1Q6/2K5/k7 b - - 0 1"), GameState::Draw);
}

#[test]
fn positions_with_moves_are_in_play() {
    assert_eq!(state("8/8/8/8/8/1Q6/2K5/k7 w - - 0 1"), GameState::Playing);
    assert_eq!(Position::startpos().game_state(), GameState::Playing);
}

#[test]
fn classify_matches_game_state() {
    for fen in [
        "8/8/8/8/kQK5/8/8/8 b - - 0 1",
        "8/8/8/8/8/1Q6/2K5/k7 b - - 0 1",
        "8/8/8/8/8/1Q6/2K5/k7 w - - 0 1",
        "4k3/8/8/2KPp2r/8/8/8/8 w - e6 0 1",
    ] {
        let p = Position::from_fen(fen).unwrap();
        assert_eq!(p.classify(&p.legal_moves()), p.game_state(), "{fen}");
        assert_eq!(p.has_legal_move(), !p.legal_moves().is_empty(), "{fen}");
    }
}

#[test]
fn results_print_as_scores() {
    assert_eq!(GameState::WhiteWin.to_string(), "1-0");
    assert_eq!(GameState::Draw.to_string(), "1/2-1/2");
    assert!(!GameState::Playing.is_over());
}
