use std::fmt;
use std::hash::{Hash, Hasher};

use crate::board::Square;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline]
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Row pawns start on.
    pub fn pawn_home_row(self) -> i32 { if self == Color::White { 1 } else { 6 } }

    /// Row a pawn promotes on.
    pub fn last_row(self) -> i32 { if self == Color::White { 7 } else { 0 } }

    /// Direction pawns advance in, as a row delta.
    pub fn forward(self) -> i32 { if self == Color::White { 1 } else { -1 } }

    /// Row the king and rooks start on.
    pub fn back_row(self) -> i32 { if self == Color::White { 0 } else { 7 } }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { Color::White => "white", Color::Black => "black" })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [PieceKind::Pawn, PieceKind::Knight, PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen, PieceKind::King];
    pub const PROMOTIONS: [PieceKind; 4] = [PieceKind::Queen, PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight];

    #[inline]
    pub fn idx(self) -> usize { self as usize }

    /// Lowercase letter used by FEN and coordinate notation.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Case-insensitive.
    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self { Self { color, kind } }

    /// Uppercase for White, lowercase for Black.
    pub fn fen_char(self) -> char {
        let c = self.kind.letter();
        if self.color == Color::White { c.to_ascii_uppercase() } else { c }
    }

    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_letter(c)?;
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        Some(Piece { color, kind })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SpecialMove {
    #[default]
    None,
    DoublePawnPush,
    KingSideCastle,
    QueenSideCastle,
}

#[derive(Clone, Copy, Debug)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
    pub is_capture: bool,
    pub is_en_passant: bool,
    pub special: SpecialMove,
    /// Set by legal move generation when the move attacks the enemy king.
    pub is_check: bool,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to, promotion: None, is_capture: false, is_en_passant: false, special: SpecialMove::None, is_check: false }
    }

    pub fn is_castle(&self) -> bool {
        matches!(self.special, SpecialMove::KingSideCastle | SpecialMove::QueenSideCastle)
    }

    /// Coordinate notation, e.g. `e2e4` or `e7e8q`.
    pub fn uci(&self) -> String { self.to_string() }
}

// `is_check` is an annotation; two moves are the same move regardless of it.
impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.promotion == other.promotion
            && self.is_capture == other.is_capture
            && self.is_en_passant == other.is_en_passant
            && self.special == other.special
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
        self.promotion.hash(state);
        self.is_capture.hash(state);
        self.is_en_passant.hash(state);
        self.special.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(p) = self.promotion { write!(f, "{}", p.letter())?; }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white_king_side: bool,
    pub white_queen_side: bool,
    pub black_king_side: bool,
    pub black_queen_side: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights { white_king_side: true, white_queen_side: true, black_king_side: true, black_queen_side: true };
    pub const NONE: CastlingRights = CastlingRights { white_king_side: false, white_queen_side: false, black_king_side: false, black_queen_side: false };

    pub fn king_side(&self, color: Color) -> bool {
        match color { Color::White => self.white_king_side, Color::Black => self.black_king_side }
    }

    pub fn queen_side(&self, color: Color) -> bool {
        match color { Color::White => self.white_queen_side, Color::Black => self.black_queen_side }
    }

    pub fn clear(&mut self, color: Color) {
        match color {
            Color::White => { self.white_king_side = false; self.white_queen_side = false; }
            Color::Black => { self.black_king_side = false; self.black_queen_side = false; }
        }
    }

    /// Drop whichever right depends on a rook standing on `sq`.
    pub fn clear_corner(&mut self, sq: Square) {
        match sq {
            Square::A1 => self.white_queen_side = false,
            Square::H1 => self.white_king_side = false,
            Square::A8 => self.black_queen_side = false,
            Square::H8 => self.black_king_side = false,
            _ => {}
        }
    }

    pub fn any(&self) -> bool {
        self.white_king_side || self.white_queen_side || self.black_king_side || self.black_queen_side
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameState {
    Playing,
    WhiteWin,
    BlackWin,
    Draw,
}

impl GameState {
    pub fn is_over(self) -> bool { self != GameState::Playing }

    pub fn win_for(color: Color) -> GameState {
        match color { Color::White => GameState::WhiteWin, Color::Black => GameState::BlackWin }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameState::Playing => "playing",
            GameState::WhiteWin => "1-0",
            GameState::BlackWin => "0-1",
            GameState::Draw => "1/2-1/2",
        })
    }
}
