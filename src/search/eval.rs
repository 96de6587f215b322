use crate::board::{Color, PieceKind, Position};

pub const PAWN: i32 = 100;
pub const KNIGHT: i32 = 300;
pub const BISHOP: i32 = 320;
pub const ROOK: i32 = 500;
pub const QUEEN: i32 = 900;

// Mate scoring helpers
pub const MATE_SCORE: i32 = 1_000_000;
pub const DRAW_SCORE: i32 = 0;

pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => PAWN,
        PieceKind::Knight => KNIGHT,
        PieceKind::Bishop => BISHOP,
        PieceKind::Rook => ROOK,
        PieceKind::Queen => QUEEN,
        PieceKind::King => 0,
    }
}

// Side-agnostic material in centipawns: positive means White has more material.
pub fn material_eval(pos: &Position) -> i32 {
    PieceKind::ALL.iter().map(|&kind| {
        let w = pos.pieces(Color::White, kind).count() as i32;
        let b = pos.pieces(Color::Black, kind).count() as i32;
        (w - b) * piece_value(kind)
    }).sum()
}

/// Score of a checkmate by `winner` found `ply` plies below the root; shorter mates score further from zero.
pub fn mate_score(winner: Color, ply: u32) -> i32 {
    let s = MATE_SCORE - ply as i32;
    if winner == Color::White { s } else { -s }
}

pub fn is_mate_score(score: i32) -> bool { score.abs() > MATE_SCORE - 1_000 }
