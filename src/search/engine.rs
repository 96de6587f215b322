use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::board::{Move, Position};

/// A chosen move and, when the engine searched for it, its evaluation.
/// Evaluations are in centipawns, positive favouring White.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvaluatedMove {
    pub mv: Move,
    pub eval: Option<i32>,
}

pub trait ChessEngine: Send {
    fn name(&self) -> &str;

    /// Searches `pos` and returns a legal move, or `None` when there is none.
    /// `on_progress` receives the best move so far at the engine's update
    /// points; `is_cancelled` is polled at the same boundaries and stops the
    /// search early with the best move found.
    fn make_move_with(
        &mut self,
        pos: &Position,
        on_progress: &mut dyn FnMut(&EvaluatedMove),
        is_cancelled: &dyn Fn() -> bool,
    ) -> Option<EvaluatedMove>;

    fn make_move(&mut self, pos: &Position) -> Option<Move> {
        self.make_move_with(pos, &mut |_| {}, &|| false).map(|e| e.mv)
    }

    /// Human-readable summary of the last search, if the engine keeps one.
    fn statistics(&self) -> Option<String> { None }
}

/// Root moves with the trivial cases split off.
pub(crate) enum RootMoves {
    NoMoves,
    Forced(Move),
    Choice(Vec<Move>),
}

pub(crate) fn root_moves(pos: &Position) -> RootMoves {
    let mut moves = pos.legal_moves();
    match moves.len() {
        0 => RootMoves::NoMoves,
        1 => RootMoves::Forced(moves.remove(0)),
        _ => RootMoves::Choice(moves),
    }
}

/// Cancellation predicate backed by a shared flag.
pub fn cancel_on(flag: Arc<AtomicBool>) -> impl Fn() -> bool {
    move || flag.load(Ordering::Relaxed)
}
