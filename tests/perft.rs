use chessai::board::Position;
use chessai::perft::{perft, perft_divide, perft_parallel};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
const POSITION_4: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
const POSITION_5: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

#[test]
fn perft_startpos_small_depths() {
    let b = Position::startpos();
    assert_eq!(perft(&b, 1), 20);
    assert_eq!(perft(&b, 2), 400);
    assert_eq!(perft(&b, 3), 8902);
    assert_eq!(perft(&b, 4), 197281);
}

#[test]
fn perft_kiwipete() {
    let b = Position::from_fen(KIWIPETE).unwrap();
    assert_eq!(perft(&b, 1), 48);
    assert_eq!(perft(&b, 2), 2039);
    assert_eq!(perft(&b, 3), 97862);
}

#[test]
fn perft_en_passant_pins() {
    let b = Position::from_fen(POSITION_3).unwrap();
    assert_eq!(perft(&b, 1), 14);
    assert_eq!(perft(&b, 2), 191);
    assert_eq!(perft(&b, 3), 2812);
    assert_eq!(perft(&b, 4), 43238);
}

#[test]
fn perft_promotions_and_castling_rights() {
    let b = Position::from_fen(POSITION_4).unwrap();
    assert_eq!(perft(&b, 1), 6);
    assert_eq!(perft(&b, 2), 264);
    assert_eq!(perft(&b, 3), 9467);

    let b = Position::from_fen(POSITION_5).unwrap();
    assert_eq!(perft(&b, 1), 44);
    assert_eq!(perft(&b, 2), 1486);
    assert_eq!(perft(&b, 3), 62379);
}

#[test]
fn divide_and_parallel_agree() {
    let b = Position::from_fen(KIWIPETE).unwrap();
    let divide = perft_divide(&b, 2);
    assert_eq!(divide.len(), 48);
    assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), 2039);
    assert_eq!(perft_parallel(&b, 3), 97862);
    assert_eq!(perft(&b, 0), 1);
}
