use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::Position;
use crate::search::engine::{ChessEngine, EvaluatedMove};

/// Plays a uniformly random legal move.
pub struct RandomEngine {
    rng: SmallRng,
}

impl RandomEngine {
    pub fn new(seed: u64) -> Self { Self { rng: SmallRng::seed_from_u64(seed) } }
}

impl ChessEngine for RandomEngine {
    fn name(&self) -> &str { "random" }

    fn make_move_with(
        &mut self,
        pos: &Position,
        on_progress: &mut dyn FnMut(&EvaluatedMove),
        _is_cancelled: &dyn Fn() -> bool,
    ) -> Option<EvaluatedMove> {
        let moves = pos.legal_moves();
        let mv = *moves.choose(&mut self.rng)?;
        let result = EvaluatedMove { mv, eval: None };
        on_progress(&result);
        Some(result)
    }
}
