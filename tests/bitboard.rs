use chessai::board::{Bitboard, Square};
use chessai::ChessError;

fn sq(s: &str) -> Square { s.parse().expect("valid square") }

fn bb(squares: &[&str]) -> Bitboard { Bitboard::from_squares(squares.iter().map(|s| sq(s))) }

fn checkerboard() -> Bitboard {
    Bitboard::from_squares(Square::all().filter(|s| (s.file() + s.row()) % 2 == 0))
}

#[test]
fn bit_zero_is_a8_and_bit_63_is_h1() {
    assert_eq!(Bitboard::from_square(sq("a8")).0, 1);
    assert_eq!(Bitboard::from_square(sq("h1")).0, 1 << 63);
    assert_eq!(Bitboard::from_square(sq("b8")).0, 2);
}

#[test]
fn set_and_get_bits() {
    let b = Bitboard::EMPTY.set_bit(sq("e4"), true);
    assert!(b.get_bit(sq("e4")));
    assert!(!b.get_bit(sq("e5")));
    assert_eq!(b.set_bit(sq("e4"), false), Bitboard::EMPTY);

    let mut m = Bitboard::EMPTY;
    m.set_bit_in_place(sq("a1"), true);
    m |= Bitboard::from_square(sq("h8"));
    assert_eq!(m.count(), 2);
    m &= !Bitboard::from_square(sq("a1"));
    assert_eq!(m, bb(&["h8"]));
}

#[test]
fn single_square_shifts() {
    let d4 = bb(&["d4"]);
    assert_eq!(d4.shift(1, 0), bb(&["e4"]));
    assert_eq!(d4.shift(4, 0), bb(&["h4"]));
    assert_eq!(d4.shift(0, 2), bb(&["d6"]));
    assert_eq!(d4.shift(3, 3), bb(&["g7"]));
    assert_eq!(d4.shift(-3, -3), bb(&["a1"]));
    assert_eq!(d4.shift(4, -2), bb(&["h2"]));
}

#[test]
fn shifts_drop_squares_instead_of_wrapping() {
    let h4 = bb(&["h4"]);
    assert_eq!(h4.shift_files(1), Bitboard::EMPTY);
    assert_eq!(bb(&["a4"]).shift_files(-1), Bitboard::EMPTY);
    assert_eq!(bb(&["a8"]).shift_rows(1), Bitboard::EMPTY);
    assert_eq!(bb(&["a1"]).shift_rows(-1), Bitboard::EMPTY);
    assert_eq!(Bitboard::ALL.shift_files(8), Bitboard::EMPTY);
    assert_eq!(Bitboard::ALL.shift_rows(-9), Bitboard::EMPTY);
}

#[test]
fn checkerboard_shifts_keep_half_the_squares() {
    let c = checkerboard();
    assert_eq!(c.count(), 32);
    for (f, r) in [(4, 0), (-4, 0), (0, 4), (0, -4)] {
        assert_eq!(c.shift(f, r).count(), 16, "shift ({f}, {r})");
    }
    // one file over is the opposite colour
    assert_eq!(c.shift_files(1) & c, Bitboard::EMPTY);
}

#[test]
fn indexes_are_ascending() {
    let b = bb(&["h1", "a8", "e4", "d5"]);
    let idx: Vec<usize> = b.indexes_of_set_bits().iter().map(|s| s.index()).collect();
    assert_eq!(idx, vec![0, 27, 36, 63]);
    assert_eq!(b.first_set_index(), Some(sq("a8")));
    assert_eq!(Bitboard::EMPTY.first_set_index(), None);
    assert!(Bitboard::EMPTY.indexes_of_set_bits().is_empty());
}

#[test]
fn line_through_diagonal_squares() {
    let line = Bitboard::line_through_squares(sq("a3"), sq("c5")).unwrap();
    assert_eq!(line, bb(&["a3", "b4", "c5", "d6", "e7", "f8"]));
    // argument order does not matter
    assert_eq!(Bitboard::line_through_squares(sq("f8"), sq("b4")).unwrap(), line);
}

#[test]
fn line_through_ranks_files_and_anti_diagonals() {
    assert_eq!(Bitboard::line_through_squares(sq("b2"), sq("g2")).unwrap(), Bitboard::rank(1));
    assert_eq!(Bitboard::line_through_squares(sq("c1"), sq("c8")).unwrap(), Bitboard::file(2));
    assert_eq!(
        Bitboard::line_through_squares(sq("h1"), sq("b7")).unwrap(),
        bb(&["a8", "b7", "c6", "d5", "e4", "f3", "g2", "h1"])
    );
}

#[test]
fn no_line_between_unaligned_squares() {
    let err = Bitboard::line_through_squares(sq("a3"), sq("c6")).unwrap_err();
    assert_eq!(err, ChessError::NoLineBetween(sq("a3"), sq("c6")));
    assert!(Bitboard::line_through_squares(sq("e4"), sq("e4")).is_err());
}
