// Bitboard chess rules with minimax and Monte Carlo tree search players
pub mod board;
pub mod config;
pub mod error;
pub mod perft;
pub mod search;

pub use board::{Move, Position};
pub use error::{ChessError, FenError};
pub use search::{ChessEngine, EvaluatedMove};
