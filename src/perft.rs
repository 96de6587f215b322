use rayon::prelude::*;

use crate::board::{Move, Position};

/// Leaf count of the legal move tree `depth` plies deep.
pub fn perft(pos: &Position, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let moves = pos.legal_moves();
    if depth == 1 { return moves.len() as u64; }
    moves.iter().map(|mv| perft(&pos.apply(mv), depth - 1)).sum()
}

/// Per-root-move leaf counts, in generation order.
pub fn perft_divide(pos: &Position, depth: u32) -> Vec<(Move, u64)> {
    if depth == 0 { return Vec::new(); }
    pos.legal_moves().into_iter().map(|mv| (mv, perft(&pos.apply(&mv), depth - 1))).collect()
}

/// Root-split perft on the current rayon pool.
pub fn perft_parallel(pos: &Position, depth: u32) -> u64 {
    if depth <= 1 { return perft(pos, depth); }
    let moves = pos.legal_moves();
    moves.par_iter().map(|mv| perft(&pos.apply(mv), depth - 1)).sum()
}
