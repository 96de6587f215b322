use std::fmt;
use std::str::FromStr;

use crate::error::ChessError;

/// A board square. Index 0 is A8, index 63 is H1; files vary fastest.
/// `row` 0 is rank 1, so index = file + (7 - row) * 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square(56);
    pub const B1: Square = Square(57);
    pub const C1: Square = Square(58);
    pub const D1: Square = Square(59);
    pub const E1: Square = Square(60);
    pub const F1: Square = Square(61);
    pub const G1: Square = Square(62);
    pub const H1: Square = Square(63);
    pub const A8: Square = Square(0);
    pub const B8: Square = Square(1);
    pub const C8: Square = Square(2);
    pub const D8: Square = Square(3);
    pub const E8: Square = Square(4);
    pub const F8: Square = Square(5);
    pub const G8: Square = Square(6);
    pub const H8: Square = Square(7);

    /// Square for a (file, row) pair, `None` when off the board.
    #[inline]
    pub const fn from_coords(file: i32, row: i32) -> Option<Square> {
        if file < 0 || file > 7 || row < 0 || row > 7 { return None; }
        Some(Square((file + (7 - row) * 8) as u8))
    }

    #[inline]
    pub const fn from_index(index: usize) -> Option<Square> {
        if index < 64 { Some(Square(index as u8)) } else { None }
    }

    /// Caller guarantees `index < 64`.
    #[inline]
    pub(crate) const fn new_unchecked(index: u8) -> Square { Square(index) }

    #[inline]
    pub const fn index(self) -> usize { self.0 as usize }

    #[inline]
    pub const fn file(self) -> i32 { (self.0 % 8) as i32 }

    #[inline]
    pub const fn row(self) -> i32 { 7 - (self.0 / 8) as i32 }

    /// Square displaced by the given file/row steps; `None` once the step leaves the board.
    #[inline]
    pub const fn offset(self, file_offset: i32, row_offset: i32) -> Option<Square> {
        Square::from_coords(self.file() + file_offset, self.row() + row_offset)
    }

    pub fn all() -> impl Iterator<Item = Square> { (0u8..64).map(Square) }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file() as u8) as char;
        let rank = (b'1' + self.row() as u8) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        if b.len() != 2 { return Err(ChessError::InvalidSquare(s.to_string())); }
        let f = b[0].to_ascii_lowercase();
        let r = b[1];
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return Err(ChessError::InvalidSquare(s.to_string()));
        }
        Square::from_coords((f - b'a') as i32, (r - b'1') as i32).ok_or_else(|| ChessError::InvalidSquare(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips() {
        for i in 0..64 {
            let sq = Square::from_index(i).unwrap();
            assert_eq!(sq.index(), i);
            assert_eq!(Square::from_coords(sq.file(), sq.row()), Some(sq));
        }
        assert_eq!(Square::from_index(64), None);
    }

    #[test]
    fn corners_and_names() {
        assert_eq!(Square::from_coords(0, 7), Some(Square::A8));
        assert_eq!(Square::from_coords(7, 0), Some(Square::H1));
        assert_eq!(Square::A8.index(), 0);
        assert_eq!(Square::H1.index(), 63);
        assert_eq!("e4".parse::<Square>().unwrap().to_string(), "e4");
        assert_eq!("E4".parse::<Square>().unwrap().to_string(), "e4");
        assert!("i9".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
    }

    #[test]
    fn offsets_stop_at_the_edge() {
        assert_eq!(Square::H1.offset(1, 0), None);
        assert_eq!(Square::A8.offset(0, 1), None);
        assert_eq!(Square::E1.offset(1, 2), "f3".parse().ok());
        assert_eq!(Square::from_coords(-1, 3), None);
    }
}
