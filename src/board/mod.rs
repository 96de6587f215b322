pub mod bitboard;
pub mod fen;
pub mod lookup;
pub mod movegen;
pub mod position;
pub mod square;
pub mod types;

pub use bitboard::Bitboard;
pub use fen::{Fen, STARTPOS_FEN};
pub use lookup::MoveQuery;
pub use movegen::MoveResult;
pub use position::Position;
pub use square::Square;
pub use types::{CastlingRights, Color, GameState, Move, Piece, PieceKind, SpecialMove};
