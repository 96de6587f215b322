//! Per-piece pseudo-legal target generation.
//!
//! Each piece yields a [`MoveResult`]: parallel bitboards describing where it
//! may move and which squares it attacks. Legality against own-king safety
//! is decided by [`Position`](crate::board::Position).

use crate::board::{Bitboard, Color, Move, Piece, PieceKind, Position, SpecialMove, Square};

const KNIGHT_OFFSETS: [(i32, i32); 8] = [(1, 2), (2, 1), (2, -1), (1, -2), (-1, -2), (-2, -1), (-2, 1), (-1, 2)];
const KING_OFFSETS: [(i32, i32); 8] = [(1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (-1, -1), (0, -1), (1, -1)];
pub(crate) const ORTHOGONAL: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
pub(crate) const DIAGONAL: [(i32, i32); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveResult {
    pub move_targets: Bitboard,
    pub captures: Bitboard,
    pub promotions: Bitboard,
    pub en_passant: Bitboard,
    pub double_pushes: Bitboard,
    pub king_side_castles: Bitboard,
    pub queen_side_castles: Bitboard,
    /// Squares this piece attacks, including defended friendly pieces and
    /// squares behind the enemy king on a slider's ray.
    pub attacks: Bitboard,
}

impl MoveResult {
    fn target(&mut self, sq: Square) { self.move_targets.set_bit_in_place(sq, true); }
    fn capture(&mut self, sq: Square) {
        self.move_targets.set_bit_in_place(sq, true);
        self.captures.set_bit_in_place(sq, true);
    }
    fn attack(&mut self, sq: Square) { self.attacks.set_bit_in_place(sq, true); }
}

/// Pseudo-legal targets of the piece on `from`, castling included.
/// Empty when the square is empty.
pub fn pseudo_legal(pos: &Position, from: Square) -> MoveResult {
    let Some(piece) = pos.piece_at(from) else { return MoveResult::default(); };
    let danger = if piece.kind == PieceKind::King && pos.castling().any() {
        Some(pos.attacked_squares(piece.color.other()))
    } else {
        None
    };
    generate(pos, from, piece, danger)
}

/// `danger` is the opponent attack map; castling is only considered when it is given.
pub(crate) fn generate(pos: &Position, from: Square, piece: Piece, danger: Option<Bitboard>) -> MoveResult {
    match piece.kind {
        PieceKind::Pawn => pawn(pos, from, piece.color),
        PieceKind::Knight => stepper(pos, from, piece.color, &KNIGHT_OFFSETS),
        PieceKind::Bishop => slider(pos, from, piece.color, &DIAGONAL),
        PieceKind::Rook => slider(pos, from, piece.color, &ORTHOGONAL),
        PieceKind::Queen => {
            let mut r = slider(pos, from, piece.color, &ORTHOGONAL);
            let d = slider(pos, from, piece.color, &DIAGONAL);
            r.move_targets |= d.move_targets;
            r.captures |= d.captures;
            r.attacks |= d.attacks;
            r
        }
        PieceKind::King => {
            let mut r = stepper(pos, from, piece.color, &KING_OFFSETS);
            if let Some(danger) = danger { castles(pos, from, piece.color, danger, &mut r); }
            r
        }
    }
}

fn pawn(pos: &Position, from: Square, color: Color) -> MoveResult {
    let mut r = MoveResult::default();
    let fwd = color.forward();
    let last = color.last_row();

    if let Some(one) = from.offset(0, fwd) {
        if pos.piece_at(one).is_none() {
            r.target(one);
            if from.row() == color.pawn_home_row() {
                if let Some(two) = one.offset(0, fwd) {
                    if pos.piece_at(two).is_none() {
                        r.target(two);
                        r.double_pushes.set_bit_in_place(two, true);
                    }
                }
            }
        }
    }

    for df in [-1, 1] {
        let Some(diag) = from.offset(df, fwd) else { continue };
        r.attack(diag);
        match pos.piece_at(diag) {
            Some(p) if p.color != color => r.capture(diag),
            None if pos.en_passant() == Some(diag) && pos.side_to_move() == color => {
                r.capture(diag);
                r.en_passant.set_bit_in_place(diag, true);
            }
            _ => {}
        }
    }

    r.promotions = r.move_targets & Bitboard::rank(last);
    r
}

fn stepper(pos: &Position, from: Square, color: Color, offsets: &[(i32, i32)]) -> MoveResult {
    let mut r = MoveResult::default();
    for &(df, dr) in offsets {
        let Some(to) = from.offset(df, dr) else { continue };
        r.attack(to);
        match pos.piece_at(to) {
            None => r.target(to),
            Some(p) if p.color != color => r.capture(to),
            Some(_) => {}
        }
    }
    r
}

fn slider(pos: &Position, from: Square, color: Color, dirs: &[(i32, i32)]) -> MoveResult {
    let mut r = MoveResult::default();
    for &(df, dr) in dirs {
        let mut cur = from.offset(df, dr);
        let mut through_king = false;
        while let Some(to) = cur {
            r.attack(to);
            let occupant = pos.piece_at(to);
            if through_king {
                if occupant.is_some() { break; }
                cur = to.offset(df, dr);
                continue;
            }
            match occupant {
                None => r.target(to),
                Some(p) if p.color != color => {
                    r.capture(to);
                    if p.kind != PieceKind::King { break; }
                    through_king = true;
                }
                Some(_) => break,
            }
            cur = to.offset(df, dr);
        }
    }
    r
}

fn castles(pos: &Position, from: Square, color: Color, danger: Bitboard, r: &mut MoveResult) {
    let back = color.back_row();
    if Square::from_coords(4, back) != Some(from) || danger.contains(from) { return; }
    let rook = Some(Piece::new(color, PieceKind::Rook));
    let sq = |file: i32| Square::from_coords(file, back);
    let empty = |file: i32| sq(file).map_or(false, |s| pos.piece_at(s).is_none());
    let safe = |file: i32| sq(file).map_or(false, |s| !danger.contains(s));

    if pos.castling().king_side(color)
        && sq(7).and_then(|s| pos.piece_at(s)) == rook
        && empty(5) && empty(6)
        && safe(5) && safe(6)
    {
        if let Some(g) = sq(6) {
            r.target(g);
            r.king_side_castles.set_bit_in_place(g, true);
        }
    }

    if pos.castling().queen_side(color)
        && sq(0).and_then(|s| pos.piece_at(s)) == rook
        && empty(1) && empty(2) && empty(3)
        && safe(2) && safe(3)
    {
        if let Some(c) = sq(2) {
            r.target(c);
            r.queen_side_castles.set_bit_in_place(c, true);
        }
    }
}

/// Turn one piece's targets into moves, four per promotion square.
pub(crate) fn expand(from: Square, r: &MoveResult, out: &mut Vec<Move>) {
    for to in r.move_targets {
        let special = if r.double_pushes.contains(to) {
            SpecialMove::DoublePawnPush
        } else if r.king_side_castles.contains(to) {
            SpecialMove::KingSideCastle
        } else if r.queen_side_castles.contains(to) {
            SpecialMove::QueenSideCastle
        } else {
            SpecialMove::None
        };
        let base = Move {
            from,
            to,
            promotion: None,
            is_capture: r.captures.contains(to),
            is_en_passant: r.en_passant.contains(to),
            special,
            is_check: false,
        };
        if r.promotions.contains(to) {
            for kind in PieceKind::PROMOTIONS { out.push(Move { promotion: Some(kind), ..base }); }
        } else {
            out.push(base);
        }
    }
}

pub(crate) fn knight_offsets() -> &'static [(i32, i32)] { &KNIGHT_OFFSETS }
pub(crate) fn king_offsets() -> &'static [(i32, i32)] { &KING_OFFSETS }
