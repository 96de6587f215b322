use std::fmt;

use crate::board::movegen::{self, DIAGONAL, ORTHOGONAL};
use crate::board::{Bitboard, CastlingRights, Color, GameState, Move, Piece, PieceKind, SpecialMove, Square};
use crate::error::ChessError;

/// A complete game state. Moves never mutate a position; [`Position::apply`]
/// returns the successor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pieces: [Option<Piece>; 64],
    colors: [Bitboard; 2],
    kinds: [[Bitboard; 6]; 2],
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for Position {
    fn default() -> Self { Position::startpos() }
}

impl Position {
    /// Empty board, White to move, no rights. Not a valid game state until kings are placed.
    pub(crate) fn empty() -> Self {
        Self {
            pieces: [None; 64],
            colors: [Bitboard::EMPTY; 2],
            kinds: [[Bitboard::EMPTY; 6]; 2],
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn startpos() -> Self {
        let mut pos = Position::empty();
        let back = [PieceKind::Rook, PieceKind::Knight, PieceKind::Bishop, PieceKind::Queen, PieceKind::King, PieceKind::Bishop, PieceKind::Knight, PieceKind::Rook];
        for (file, kind) in back.iter().enumerate() {
            let f = file as i32;
            for (color, row, pawn_row) in [(Color::White, 0, 1), (Color::Black, 7, 6)] {
                if let Some(sq) = Square::from_coords(f, row) { pos.set_piece(sq, Some(Piece::new(color, *kind))); }
                if let Some(sq) = Square::from_coords(f, pawn_row) { pos.set_piece(sq, Some(Piece::new(color, PieceKind::Pawn))); }
            }
        }
        pos.castling = CastlingRights::ALL;
        pos
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> { self.pieces[sq.index()] }

    #[inline]
    pub fn side_to_move(&self) -> Color { self.side_to_move }

    #[inline]
    pub fn castling(&self) -> CastlingRights { self.castling }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> { self.en_passant }

    pub fn halfmove_clock(&self) -> u32 { self.halfmove_clock }

    pub fn fullmove_number(&self) -> u32 { self.fullmove_number }

    #[inline]
    pub fn occupancy(&self) -> Bitboard { self.colors[0] | self.colors[1] }

    #[inline]
    pub fn color_bb(&self, color: Color) -> Bitboard { self.colors[color.idx()] }

    #[inline]
    pub fn pieces(&self, color: Color, kind: PieceKind) -> Bitboard { self.kinds[color.idx()][kind.idx()] }

    pub fn king_square(&self, color: Color) -> Option<Square> { self.pieces(color, PieceKind::King).first_set_index() }

    pub(crate) fn set_side_to_move(&mut self, color: Color) { self.side_to_move = color; }
    pub(crate) fn set_castling(&mut self, rights: CastlingRights) { self.castling = rights; }
    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) { self.en_passant = sq; }
    pub(crate) fn set_clocks(&mut self, halfmove: u32, fullmove: u32) {
        self.halfmove_clock = halfmove;
        self.fullmove_number = fullmove;
    }

    /// Keeps the piece array and bitboards in agreement.
    pub(crate) fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        if let Some(old) = self.pieces[sq.index()] {
            self.colors[old.color.idx()].set_bit_in_place(sq, false);
            self.kinds[old.color.idx()][old.kind.idx()].set_bit_in_place(sq, false);
        }
        if let Some(new) = piece {
            self.colors[new.color.idx()].set_bit_in_place(sq, true);
            self.kinds[new.color.idx()][new.kind.idx()].set_bit_in_place(sq, true);
        }
        self.pieces[sq.index()] = piece;
    }

    /// Union of every square attacked by `by`, seeing through the opposing king.
    pub fn attacked_squares(&self, by: Color) -> Bitboard {
        let mut out = Bitboard::EMPTY;
        for sq in self.color_bb(by) {
            if let Some(piece) = self.piece_at(sq) {
                out |= movegen::generate(self, sq, piece, None).attacks;
            }
        }
        out
    }

    /// Whether any piece of `by` attacks `sq`, probing outward from `sq`.
    /// Rays stop at the first occupied square, the opposing king included.
    pub fn is_attacked(&self, sq: Square, by: Color) -> bool {
        let pawns = self.pieces(by, PieceKind::Pawn);
        for df in [-1, 1] {
            if let Some(s) = sq.offset(df, -by.forward()) {
                if pawns.contains(s) { return true; }
            }
        }
        let knights = self.pieces(by, PieceKind::Knight);
        for &(df, dr) in movegen::knight_offsets() {
            if let Some(s) = sq.offset(df, dr) { if knights.contains(s) { return true; } }
        }
        let kings = self.pieces(by, PieceKind::King);
        for &(df, dr) in movegen::king_offsets() {
            if let Some(s) = sq.offset(df, dr) { if kings.contains(s) { return true; } }
        }
        let queens = self.pieces(by, PieceKind::Queen);
        let rooks = self.pieces(by, PieceKind::Rook) | queens;
        let bishops = self.pieces(by, PieceKind::Bishop) | queens;
        self.ray_hits(sq, &ORTHOGONAL, rooks) || self.ray_hits(sq, &DIAGONAL, bishops)
    }

    fn ray_hits(&self, sq: Square, dirs: &[(i32, i32)], attackers: Bitboard) -> bool {
        let occ = self.occupancy();
        for &(df, dr) in dirs {
            let mut cur = sq.offset(df, dr);
            while let Some(s) = cur {
                if occ.contains(s) {
                    if attackers.contains(s) { return true; }
                    break;
                }
                cur = s.offset(df, dr);
            }
        }
        false
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_square(color).map_or(false, |k| self.is_attacked(k, color.other()))
    }

    /// Pseudo-legal moves for the side to move.
    pub fn pseudo_legal_moves(&self) -> Vec<Move> {
        let us = self.side_to_move;
        let danger = if self.castling.any() { Some(self.attacked_squares(us.other())) } else { None };
        let mut out = Vec::with_capacity(48);
        for from in self.color_bb(us) {
            if let Some(piece) = self.piece_at(from) {
                let r = movegen::generate(self, from, piece, danger);
                movegen::expand(from, &r, &mut out);
            }
        }
        out
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(48);
        self.collect_legal(self.color_bb(self.side_to_move), &mut out, false);
        out
    }

    /// Legal moves of the piece on `from`; empty if it is not the side to move's piece.
    pub fn legal_moves_from(&self, from: Square) -> Vec<Move> {
        let mut out = Vec::new();
        if self.color_bb(self.side_to_move).contains(from) {
            self.collect_legal(Bitboard::from_square(from), &mut out, false);
        }
        out
    }

    pub fn has_legal_move(&self) -> bool {
        let mut out = Vec::new();
        self.collect_legal(self.color_bb(self.side_to_move), &mut out, true);
        !out.is_empty()
    }

    fn collect_legal(&self, origins: Bitboard, out: &mut Vec<Move>, stop_at_first: bool) {
        let us = self.side_to_move;
        let them = us.other();
        let danger = self.attacked_squares(them);
        let mut scratch = Vec::with_capacity(32);
        for from in origins {
            let Some(piece) = self.piece_at(from) else { continue };
            let r = movegen::generate(self, from, piece, Some(danger));
            scratch.clear();
            movegen::expand(from, &r, &mut scratch);
            for mv in scratch.iter_mut() {
                if piece.kind == PieceKind::King && danger.contains(mv.to) { continue; }
                let child = self.apply(mv);
                if child.is_in_check(us) { continue; }
                mv.is_check = child.is_in_check(them);
                out.push(*mv);
                if stop_at_first { return; }
            }
        }
    }

    /// State implied by an already generated legal-move list for this position.
    pub fn classify(&self, legal: &[Move]) -> GameState {
        if !legal.is_empty() { return GameState::Playing; }
        if self.is_in_check(self.side_to_move) {
            GameState::win_for(self.side_to_move.other())
        } else {
            GameState::Draw
        }
    }

    pub fn game_state(&self) -> GameState {
        if self.has_legal_move() { GameState::Playing } else { self.classify(&[]) }
    }

    /// Successor position. `mv` must come from this position's move generator;
    /// a pawn reaching the last row without a promotion kind panics.
    pub fn apply(&self, mv: &Move) -> Position {
        let Some(piece) = self.piece_at(mv.from) else {
            panic!("no piece on {} for move {}", mv.from, mv);
        };
        let us = piece.color;
        let mut next = self.clone();
        let captured = self.piece_at(mv.to).is_some() || mv.is_en_passant;

        if mv.is_en_passant {
            if let Some(behind) = mv.to.offset(0, -us.forward()) { next.set_piece(behind, None); }
        }

        let placed = match mv.promotion {
            Some(kind) => Piece::new(us, kind),
            None => {
                if piece.kind == PieceKind::Pawn && mv.to.row() == us.last_row() {
                    panic!("{}", ChessError::MissingPromotion(mv.to_string()));
                }
                piece
            }
        };
        next.set_piece(mv.from, None);
        next.set_piece(mv.to, Some(placed));

        let back = us.back_row();
        let rook_hop = match mv.special {
            SpecialMove::KingSideCastle => Some((7, 5)),
            SpecialMove::QueenSideCastle => Some((0, 3)),
            _ => None,
        };
        if let Some((rf, rt)) = rook_hop {
            if let (Some(a), Some(b)) = (Square::from_coords(rf, back), Square::from_coords(rt, back)) {
                let rook = next.piece_at(a);
                next.set_piece(a, None);
                next.set_piece(b, rook);
            }
        }

        if piece.kind == PieceKind::King { next.castling.clear(us); }
        next.castling.clear_corner(mv.from);
        next.castling.clear_corner(mv.to);

        next.en_passant = match mv.special {
            SpecialMove::DoublePawnPush => mv.from.offset(0, us.forward()),
            _ => None,
        };
        next.halfmove_clock = if piece.kind == PieceKind::Pawn || captured { 0 } else { self.halfmove_clock + 1 };
        if us == Color::Black { next.fullmove_number = self.fullmove_number + 1; }
        next.side_to_move = us.other();
        next
    }

    /// Applies a caller-built move after matching it against the legal moves
    /// by origin, destination and promotion kind.
    pub fn try_apply(&self, mv: &Move) -> Result<Position, ChessError> {
        let legal = self.legal_moves_from(mv.from);
        if let Some(found) = legal.iter().find(|m| m.to == mv.to && m.promotion == mv.promotion) {
            return Ok(self.apply(found));
        }
        if mv.promotion.is_none() && legal.iter().any(|m| m.to == mv.to && m.promotion.is_some()) {
            return Err(ChessError::MissingPromotion(mv.to_string()));
        }
        Err(ChessError::IllegalMove(mv.to_string()))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            write!(f, "{} ", row + 1)?;
            for file in 0..8 {
                let c = Square::from_coords(file, row).and_then(|s| self.piece_at(s)).map_or('.', |p| p.fen_char());
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")?;
        write!(f, "{} to move", self.side_to_move)
    }
}
