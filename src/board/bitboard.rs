//! 64-bit square sets.
//!
//! Bit 0 is A8 and bit 63 is H1, so a rank occupies one byte and the top rank
//! comes first.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::board::Square;
use crate::error::ChessError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u64);

const FILE_A_BITS: u64 = 0x0101_0101_0101_0101;

/// Files `lo..hi` on every rank.
const fn file_span(lo: u32, hi: u32) -> u64 {
    let byte = ((1u64 << hi) - 1) & !((1u64 << lo) - 1);
    FILE_A_BITS.wrapping_mul(byte)
}

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);
    pub const ALL: Bitboard = Bitboard(!0);

    #[inline]
    pub const fn from_square(sq: Square) -> Self { Bitboard(1u64 << sq.index()) }

    pub fn from_squares<I: IntoIterator<Item = Square>>(squares: I) -> Self {
        squares.into_iter().fold(Bitboard::EMPTY, |bb, sq| bb | Bitboard::from_square(sq))
    }

    #[inline]
    pub const fn is_empty(self) -> bool { self.0 == 0 }

    #[inline]
    pub const fn count(self) -> u32 { self.0.count_ones() }

    #[inline]
    pub const fn get_bit(self, sq: Square) -> bool { self.0 & (1u64 << sq.index()) != 0 }

    #[inline]
    pub const fn contains(self, sq: Square) -> bool { self.get_bit(sq) }

    #[inline]
    pub const fn set_bit(self, sq: Square, value: bool) -> Self {
        if value { Bitboard(self.0 | (1u64 << sq.index())) } else { Bitboard(self.0 & !(1u64 << sq.index())) }
    }

    #[inline]
    pub fn set_bit_in_place(&mut self, sq: Square, value: bool) { *self = self.set_bit(sq, value); }

    /// Shift toward file H for positive offsets, toward file A for negative ones.
    /// Squares pushed over the edge are dropped rather than wrapping.
    pub const fn shift_files(self, offset: i32) -> Self {
        if offset == 0 { return self; }
        if offset >= 8 || offset <= -8 { return Bitboard::EMPTY; }
        let k = offset.unsigned_abs();
        if offset > 0 {
            Bitboard((self.0 & file_span(0, 8 - k)) << k)
        } else {
            Bitboard((self.0 & file_span(k, 8)) >> k)
        }
    }

    /// Shift toward rank 8 for positive offsets, toward rank 1 for negative ones.
    pub const fn shift_rows(self, offset: i32) -> Self {
        if offset == 0 { return self; }
        if offset >= 8 || offset <= -8 { return Bitboard::EMPTY; }
        let bits = offset.unsigned_abs() * 8;
        if offset > 0 { Bitboard(self.0 >> bits) } else { Bitboard(self.0 << bits) }
    }

    pub const fn shift(self, file_offset: i32, row_offset: i32) -> Self {
        self.shift_files(file_offset).shift_rows(row_offset)
    }

    /// Set squares in ascending index order.
    pub fn indexes_of_set_bits(self) -> Vec<Square> { self.into_iter().collect() }

    #[inline]
    pub fn first_set_index(self) -> Option<Square> {
        if self.0 == 0 { None } else { Square::from_index(self.0.trailing_zeros() as usize) }
    }

    pub fn rank(row: i32) -> Self {
        if !(0..8).contains(&row) { return Bitboard::EMPTY; }
        Bitboard(0xFFu64 << ((7 - row) * 8))
    }

    pub fn file(file: i32) -> Self {
        if !(0..8).contains(&file) { return Bitboard::EMPTY; }
        Bitboard(FILE_A_BITS << file)
    }

    /// The whole rank, file or diagonal that passes through both squares.
    pub fn line_through_squares(a: Square, b: Square) -> Result<Self, ChessError> {
        if a == b { return Err(ChessError::NoLineBetween(a, b)); }
        let df = b.file() - a.file();
        let dr = b.row() - a.row();
        let step = if dr == 0 {
            (1, 0)
        } else if df == 0 {
            (0, 1)
        } else if df == dr {
            (1, 1)
        } else if df == -dr {
            (1, -1)
        } else {
            return Err(ChessError::NoLineBetween(a, b));
        };
        let mut line = Bitboard::from_square(a);
        for dir in [1, -1] {
            let mut cur = a.offset(step.0 * dir, step.1 * dir);
            while let Some(sq) = cur {
                line.set_bit_in_place(sq, true);
                cur = sq.offset(step.0 * dir, step.1 * dir);
            }
        }
        Ok(line)
    }
}

pub struct BitboardIter(u64);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 { return None; }
        let idx = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Square::new_unchecked(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    fn into_iter(self) -> BitboardIter { BitboardIter(self.0) }
}

impl BitAnd for Bitboard {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self { Bitboard(self.0 & rhs.0) }
}

impl BitOr for Bitboard {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self { Bitboard(self.0 | rhs.0) }
}

impl BitXor for Bitboard {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self { Bitboard(self.0 ^ rhs.0) }
}

impl Not for Bitboard {
    type Output = Self;
    #[inline]
    fn not(self) -> Self { Bitboard(!self.0) }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) { self.0 &= rhs.0; }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) { self.0 |= rhs.0; }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) { self.0 ^= rhs.0; }
}

impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in 0..8 {
            for file in 0..8 {
                let set = self.0 & (1u64 << (rank * 8 + file)) != 0;
                write!(f, "{}", if set { '1' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_span_masks() {
        assert_eq!(file_span(0, 8), !0);
        assert_eq!(file_span(0, 7), 0x7F7F_7F7F_7F7F_7F7F);
        assert_eq!(file_span(1, 8), 0xFEFE_FEFE_FEFE_FEFE);
    }
}
