use thiserror::Error;

use crate::board::Square;

/// What went wrong while reading a FEN string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenErrorKind {
    Empty,
    FieldCount(usize),
    UnknownPiece(char),
    SquareCount,
    MisplacedSlash,
    RankCount,
    SideToMove,
    Castling,
    EnPassant,
    HalfMoveClock,
    FullMoveNumber,
    KingCount,
    OpponentInCheck,
}

impl std::fmt::Display for FenErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FenErrorKind::Empty => write!(f, "empty FEN"),
            FenErrorKind::FieldCount(n) => write!(f, "expected 6 fields, found {n}"),
            FenErrorKind::UnknownPiece(c) => write!(f, "unknown piece letter '{c}'"),
            FenErrorKind::SquareCount => write!(f, "rank does not describe exactly 8 squares"),
            FenErrorKind::MisplacedSlash => write!(f, "rank separator in the wrong place"),
            FenErrorKind::RankCount => write!(f, "expected 8 ranks"),
            FenErrorKind::SideToMove => write!(f, "side to move must be 'w' or 'b'"),
            FenErrorKind::Castling => write!(f, "invalid castling field"),
            FenErrorKind::EnPassant => write!(f, "invalid en passant field"),
            FenErrorKind::HalfMoveClock => write!(f, "invalid half-move clock"),
            FenErrorKind::FullMoveNumber => write!(f, "invalid full-move number"),
            FenErrorKind::KingCount => write!(f, "each side needs exactly one king"),
            FenErrorKind::OpponentInCheck => write!(f, "the side not to move is in check"),
        }
    }
}

/// Malformed FEN, with the byte offset where parsing stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid FEN at position {position}: {kind}")]
pub struct FenError {
    pub kind: FenErrorKind,
    pub position: usize,
}

impl FenError {
    pub fn new(kind: FenErrorKind, position: usize) -> Self { Self { kind, position } }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("invalid square: {0}")]
    InvalidSquare(String),
    #[error("no rank, file or diagonal runs through {0} and {1}")]
    NoLineBetween(Square, Square),
    #[error("illegal move: {0}")]
    IllegalMove(String),
    #[error("move {0} reaches the last rank without a promotion piece")]
    MissingPromotion(String),
    #[error(transparent)]
    Fen(#[from] FenError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io { path: String, source: std::io::Error },
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}
