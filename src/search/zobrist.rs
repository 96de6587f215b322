use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

use crate::board::{Color, Move, Piece, PieceKind, Position, SpecialMove, Square};

pub const DEFAULT_SEED: u64 = 0xF00D_F00D_DEAD_BEEF;

fn piece_index(piece: Piece) -> usize { piece.color.idx() * 6 + piece.kind.idx() }

/// Random keys for position fingerprints: one per (square, piece) plus a
/// black-to-move key. Built once per seed and shared read-only.
#[derive(Clone, Debug)]
pub struct ZobristKeys {
    pieces: Vec<[u32; 12]>,
    black_to_move: u32,
}

impl Default for ZobristKeys {
    fn default() -> Self { ZobristKeys::from_seed(DEFAULT_SEED) }
}

impl ZobristKeys {
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut pieces = vec![[0u32; 12]; 64];
        for sq in pieces.iter_mut() {
            for k in sq.iter_mut() { *k = rng.gen(); }
        }
        Self { pieces, black_to_move: rng.gen() }
    }

    pub fn shared(seed: u64) -> Arc<Self> { Arc::new(ZobristKeys::from_seed(seed)) }

    #[inline]
    pub fn piece_key(&self, sq: Square, piece: Piece) -> u32 { self.pieces[sq.index()][piece_index(piece)] }

    pub fn black_to_move_key(&self) -> u32 { self.black_to_move }

    pub fn hash(&self, pos: &Position) -> u32 {
        let mut key = 0u32;
        for sq in pos.occupancy() {
            if let Some(p) = pos.piece_at(sq) { key ^= self.piece_key(sq, p); }
        }
        if pos.side_to_move() == Color::Black { key ^= self.black_to_move; }
        key
    }

    /// Hash of `pos.apply(mv)` derived from `hash`, the hash of `pos`.
    pub fn update(&self, hash: u32, pos: &Position, mv: &Move) -> u32 {
        let Some(piece) = pos.piece_at(mv.from) else { return hash; };
        let us = piece.color;
        let mut key = hash ^ self.black_to_move ^ self.piece_key(mv.from, piece);

        if let Some(victim) = pos.piece_at(mv.to) { key ^= self.piece_key(mv.to, victim); }
        if mv.is_en_passant {
            if let Some(behind) = mv.to.offset(0, -us.forward()) {
                key ^= self.piece_key(behind, Piece::new(us.other(), PieceKind::Pawn));
            }
        }

        let placed = mv.promotion.map_or(piece, |k| Piece::new(us, k));
        key ^= self.piece_key(mv.to, placed);

        let rook_hop = match mv.special {
            SpecialMove::KingSideCastle => Some((7, 5)),
            SpecialMove::QueenSideCastle => Some((0, 3)),
            _ => None,
        };
        if let Some((rf, rt)) = rook_hop {
            let back = us.back_row();
            let rook = Piece::new(us, PieceKind::Rook);
            if let (Some(a), Some(b)) = (Square::from_coords(rf, back), Square::from_coords(rt, back)) {
                key ^= self.piece_key(a, rook) ^ self.piece_key(b, rook);
            }
        }
        key
    }
}
