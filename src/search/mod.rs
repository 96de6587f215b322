pub mod engine;
pub mod eval;
pub mod mcts;
pub mod minimax;
pub mod random;
pub mod tt;
pub mod zobrist;

pub use engine::{ChessEngine, EvaluatedMove};
pub use mcts::MonteCarloEngine;
pub use minimax::MinimaxEngine;
pub use random::RandomEngine;
