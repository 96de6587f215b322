//! Resolving notation back to generated moves.
//!
//! Notation front ends (coordinate input, algebraic readers) describe a move by
//! what they know of it; [`MoveQuery`] narrows the legal moves down to it.

use crate::board::{Move, PieceKind, Position, Square};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveQuery {
    pub to: Square,
    pub from: Option<Square>,
    pub piece: Option<PieceKind>,
    pub from_file: Option<i32>,
    pub from_row: Option<i32>,
    /// Promotion letter, case-insensitive (`q`, `r`, `b`, `n`).
    pub promotion: Option<char>,
}

impl MoveQuery {
    pub fn to(to: Square) -> Self {
        Self { to, from: None, piece: None, from_file: None, from_row: None, promotion: None }
    }

    pub fn from_square(mut self, from: Square) -> Self { self.from = Some(from); self }
    pub fn piece(mut self, kind: PieceKind) -> Self { self.piece = Some(kind); self }
    pub fn file(mut self, file: i32) -> Self { self.from_file = Some(file); self }
    pub fn row(mut self, row: i32) -> Self { self.from_row = Some(row); self }
    pub fn promote(mut self, letter: char) -> Self { self.promotion = Some(letter); self }

    fn matches(&self, pos: &Position, mv: &Move) -> bool {
        if mv.to != self.to { return false; }
        if self.from.map_or(false, |f| f != mv.from) { return false; }
        if self.from_file.map_or(false, |f| f != mv.from.file()) { return false; }
        if self.from_row.map_or(false, |r| r != mv.from.row()) { return false; }
        if let Some(kind) = self.piece {
            if pos.piece_at(mv.from).map(|p| p.kind) != Some(kind) { return false; }
        }
        match self.promotion {
            Some(c) => PieceKind::from_letter(c).map_or(false, |k| mv.promotion == Some(k)),
            None => mv.promotion.is_none(),
        }
    }
}

impl Position {
    /// The single legal move matching `query`; `None` when nothing or more than one matches.
    pub fn find_move(&self, query: &MoveQuery) -> Option<Move> {
        let moves = match query.from {
            Some(from) => self.legal_moves_from(from),
            None => self.legal_moves(),
        };
        let mut hits = moves.into_iter().filter(|m| query.matches(self, m));
        let first = hits.next()?;
        if hits.next().is_some() { return None; }
        Some(first)
    }

    /// Coordinate notation such as `e2e4` or `e7e8q`.
    pub fn find_uci(&self, uci: &str) -> Option<Move> {
        let uci = uci.trim();
        if !(4..=5).contains(&uci.len()) || !uci.is_ascii() { return None; }
        let from: Square = uci[0..2].parse().ok()?;
        let to: Square = uci[2..4].parse().ok()?;
        let mut query = MoveQuery::to(to).from_square(from);
        if let Some(c) = uci[4..].chars().next() { query = query.promote(c); }
        self.find_move(&query)
    }
}
