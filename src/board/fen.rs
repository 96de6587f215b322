use std::fmt;
use std::str::FromStr;

use crate::board::{CastlingRights, Color, Piece, PieceKind, Position, Square};
use crate::error::{FenError, FenErrorKind};

pub const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Whitespace-separated fields with their byte offsets.
fn fields(fen: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut start = None;
    for (i, c) in fen.char_indices() {
        if c.is_ascii_whitespace() {
            if let Some(s) = start.take() { out.push((s, &fen[s..i])); }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start { out.push((s, &fen[s..])); }
    out
}

fn err(kind: FenErrorKind, position: usize) -> FenError { FenError::new(kind, position) }

/// Displays a position as FEN; `Position`'s own `Display` draws the board.
pub struct Fen<'a>(pub &'a Position);

impl fmt::Display for Fen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0.to_fen()) }
}

impl Position {
    pub fn from_fen(fen: &str) -> Result<Position, FenError> {
        let parts = fields(fen);
        if parts.is_empty() { return Err(err(FenErrorKind::Empty, 0)); }
        if parts.len() != 6 {
            let at = parts.get(6).map_or(fen.len(), |p| p.0);
            return Err(err(FenErrorKind::FieldCount(parts.len()), at));
        }

        let mut pos = Position::empty();
        parse_placement(&mut pos, parts[0])?;

        let (off, side) = parts[1];
        match side {
            "w" => pos.set_side_to_move(Color::White),
            "b" => pos.set_side_to_move(Color::Black),
            _ => return Err(err(FenErrorKind::SideToMove, off)),
        }

        pos.set_castling(parse_castling(parts[2])?);

        let (off, ep) = parts[3];
        if ep != "-" {
            let sq = Square::from_str(ep).map_err(|_| err(FenErrorKind::EnPassant, off))?;
            if sq.row() != 2 && sq.row() != 5 { return Err(err(FenErrorKind::EnPassant, off)); }
            pos.set_en_passant(Some(sq));
        }

        let (off, half) = parts[4];
        let half: u32 = half.parse().map_err(|_| err(FenErrorKind::HalfMoveClock, off))?;
        let (off, full) = parts[5];
        let full: u32 = full.parse().map_err(|_| err(FenErrorKind::FullMoveNumber, off))?;
        pos.set_clocks(half, full);

        for color in [Color::White, Color::Black] {
            if pos.pieces(color, PieceKind::King).count() != 1 {
                return Err(err(FenErrorKind::KingCount, parts[0].0));
            }
        }
        // otherwise the side to move could capture a king
        if pos.is_in_check(pos.side_to_move().other()) {
            return Err(err(FenErrorKind::OpponentInCheck, parts[0].0));
        }
        Ok(pos)
    }

    pub fn fen(&self) -> Fen<'_> { Fen(self) }

    pub fn to_fen(&self) -> String {
        let mut s = String::with_capacity(90);
        for row in (0..8).rev() {
            let mut gap = 0;
            for file in 0..8 {
                match Square::from_coords(file, row).and_then(|sq| self.piece_at(sq)) {
                    Some(p) => {
                        if gap > 0 { s.push(char::from(b'0' + gap)); gap = 0; }
                        s.push(p.fen_char());
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 { s.push(char::from(b'0' + gap)); }
            if row > 0 { s.push('/'); }
        }

        s.push(' ');
        s.push(if self.side_to_move() == Color::White { 'w' } else { 'b' });
        s.push(' ');

        let c = self.castling();
        if !c.any() {
            s.push('-');
        } else {
            if c.white_king_side { s.push('K'); }
            if c.white_queen_side { s.push('Q'); }
            if c.black_king_side { s.push('k'); }
            if c.black_queen_side { s.push('q'); }
        }

        s.push(' ');
        match self.en_passant() {
            Some(sq) => s.push_str(&sq.to_string()),
            None => s.push('-'),
        }
        s.push_str(&format!(" {} {}", self.halfmove_clock(), self.fullmove_number()));
        s
    }
}

fn parse_placement(pos: &mut Position, (off, placement): (usize, &str)) -> Result<(), FenError> {
    let mut row = 7;
    let mut file = 0;
    for (i, c) in placement.char_indices() {
        let at = off + i;
        match c {
            '/' => {
                if file == 0 || row == 0 { return Err(err(FenErrorKind::MisplacedSlash, at)); }
                if file != 8 { return Err(err(FenErrorKind::SquareCount, at)); }
                row -= 1;
                file = 0;
            }
            '1'..='8' => {
                file += c as i32 - '0' as i32;
                if file > 8 { return Err(err(FenErrorKind::SquareCount, at)); }
            }
            _ => {
                let piece = Piece::from_fen_char(c).ok_or(err(FenErrorKind::UnknownPiece(c), at))?;
                let sq = Square::from_coords(file, row).ok_or(err(FenErrorKind::SquareCount, at))?;
                pos.set_piece(sq, Some(piece));
                file += 1;
            }
        }
    }
    let end = off + placement.len();
    if row != 0 { return Err(err(FenErrorKind::RankCount, end)); }
    if file != 8 { return Err(err(FenErrorKind::SquareCount, end)); }
    Ok(())
}

fn parse_castling((off, field): (usize, &str)) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::NONE;
    if field == "-" { return Ok(rights); }
    for (i, c) in field.char_indices() {
        let flag = match c {
            'K' => &mut rights.white_king_side,
            'Q' => &mut rights.white_queen_side,
            'k' => &mut rights.black_king_side,
            'q' => &mut rights.black_queen_side,
            _ => return Err(err(FenErrorKind::Castling, off + i)),
        };
        if *flag { return Err(err(FenErrorKind::Castling, off + i)); }
        *flag = true;
    }
    Ok(rights)
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Position::from_fen(s) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startpos_matches_constant() {
        assert_eq!(Position::startpos().to_fen(), STARTPOS_FEN);
        assert_eq!(Position::from_fen(STARTPOS_FEN).unwrap(), Position::startpos());
        assert_eq!(Position::startpos().fen().to_string(), STARTPOS_FEN);
    }

    #[test]
    fn field_offsets() {
        assert_eq!(fields("a  bc d"), vec![(0, "a"), (3, "bc"), (6, "d")]);
        assert!(fields("   ").is_empty());
    }
}
