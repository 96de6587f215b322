use std::cmp::Reverse;
use std::sync::Arc;

use crate::board::{Color, GameState, Move, PieceKind, Position};
use crate::config::MinimaxConfig;
use crate::search::engine::{root_moves, ChessEngine, EvaluatedMove, RootMoves};
use crate::search::eval::{mate_score, material_eval, piece_value, DRAW_SCORE};
use crate::search::tt::TranspositionTable;
use crate::search::zobrist::ZobristKeys;

/// Fixed-depth alpha-beta minimax over material. White maximises.
pub struct MinimaxEngine {
    depth: u32,
    order_moves: bool,
    keys: Arc<ZobristKeys>,
    tt: TranspositionTable,
    /// Times each (from, to) was the best move of a node; kept across searches.
    history: Box<[[u32; 64]; 64]>,
    nodes: u64,
}

impl Default for MinimaxEngine {
    fn default() -> Self { MinimaxEngine::with_config(&MinimaxConfig::default()) }
}

impl MinimaxEngine {
    pub fn new(depth: u32) -> Self { MinimaxEngine::with_config(&MinimaxConfig { depth, ..MinimaxConfig::default() }) }

    pub fn with_config(cfg: &MinimaxConfig) -> Self {
        Self {
            depth: cfg.depth,
            order_moves: cfg.order_moves,
            keys: ZobristKeys::shared(cfg.zobrist_seed),
            tt: TranspositionTable::with_capacity_bytes(cfg.tt_bytes),
            history: Box::new([[0; 64]; 64]),
            nodes: 0,
        }
    }

    /// Share an existing key set instead of the one generated from the config seed.
    pub fn with_keys(mut self, keys: Arc<ZobristKeys>) -> Self {
        self.keys = keys;
        self
    }

    pub fn depth(&self) -> u32 { self.depth }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 { self.nodes }

    pub fn history_score(&self, mv: &Move) -> u32 { self.history[mv.from.index()][mv.to.index()] }

    /// Score of `pos` searched `depth` plies deep, without the root shortcuts.
    pub fn evaluate(&mut self, pos: &Position, depth: u32) -> i32 {
        self.tt.clear();
        self.nodes = 0;
        let hash = self.keys.hash(pos);
        self.search(pos, hash, depth, 0, i32::MIN, i32::MAX)
    }

    fn search(&mut self, pos: &Position, hash: u32, depth: u32, ply: u32, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            // the hash ignores castling and en passant, so only material is cached
            if !pos.has_legal_move() { return terminal_score(pos.classify(&[]), ply); }
            if let Some(v) = self.tt.get(hash) { return v; }
            let v = material_eval(pos);
            self.tt.put(hash, v);
            return v;
        }

        let mut moves = pos.legal_moves();
        let state = pos.classify(&moves);
        if state.is_over() { return terminal_score(state, ply); }
        if self.order_moves { order_moves(pos, &mut moves, &self.history); }

        let maximizing = pos.side_to_move() == Color::White;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = moves[0];
        for mv in &moves {
            let child = pos.apply(mv);
            let child_hash = self.keys.update(hash, pos, mv);
            let score = self.search(&child, child_hash, depth - 1, ply + 1, alpha, beta);
            if (maximizing && score > best) || (!maximizing && score < best) {
                best = score;
                best_move = *mv;
            }
            if maximizing { alpha = alpha.max(best); } else { beta = beta.min(best); }
            if beta <= alpha { break; }
        }
        let h = &mut self.history[best_move.from.index()][best_move.to.index()];
        *h = h.saturating_add(1);
        best
    }
}

fn terminal_score(state: GameState, ply: u32) -> i32 {
    match state {
        GameState::WhiteWin => mate_score(Color::White, ply),
        GameState::BlackWin => mate_score(Color::Black, ply),
        GameState::Draw => DRAW_SCORE,
        GameState::Playing => unreachable!("terminal_score called on a position still in play"),
    }
}

/// Captures (most valuable victim first), then promotions, then checks, then
/// moves with the higher history count. Stable otherwise.
pub(crate) fn order_moves(pos: &Position, moves: &mut [Move], history: &[[u32; 64]; 64]) {
    moves.sort_by_key(|m| {
        let victim = if m.is_en_passant {
            piece_value(PieceKind::Pawn)
        } else {
            pos.piece_at(m.to).map_or(0, |p| piece_value(p.kind))
        };
        let promo = m.promotion.map_or(0, piece_value);
        (!m.is_capture, -victim, m.promotion.is_none(), -promo, !m.is_check, Reverse(history[m.from.index()][m.to.index()]))
    });
}

impl ChessEngine for MinimaxEngine {
    fn name(&self) -> &str { "minimax" }

    fn statistics(&self) -> Option<String> { Some(format!("depth: {} nodes: {}", self.depth, self.nodes)) }

    fn make_move_with(
        &mut self,
        pos: &Position,
        on_progress: &mut dyn FnMut(&EvaluatedMove),
        is_cancelled: &dyn Fn() -> bool,
    ) -> Option<EvaluatedMove> {
        let mut moves = match root_moves(pos) {
            RootMoves::NoMoves => return None,
            RootMoves::Forced(mv) => return Some(EvaluatedMove { mv, eval: None }),
            RootMoves::Choice(moves) => moves,
        };
        if self.order_moves { order_moves(pos, &mut moves, &self.history); }

        self.tt.clear();
        self.nodes = 0;
        let hash = self.keys.hash(pos);
        let maximizing = pos.side_to_move() == Color::White;
        let (mut alpha, mut beta) = (i32::MIN, i32::MAX);
        let mut best_idx = 0;
        let mut best_score: Option<i32> = None;

        for (i, mv) in moves.iter().enumerate() {
            if is_cancelled() {
                log::debug!("minimax cancelled after {i} of {} root moves", moves.len());
                break;
            }
            let child = pos.apply(mv);
            let child_hash = self.keys.update(hash, pos, mv);
            let score = self.search(&child, child_hash, self.depth, 1, alpha, beta);
            log::debug!("{mv} --> {score}");

            let better = match best_score {
                None => true,
                Some(b) => if maximizing { score > b } else { score < b },
            };
            if better {
                best_idx = i;
                best_score = Some(score);
            }
            if maximizing { alpha = alpha.max(score); } else { beta = beta.min(score); }
            on_progress(&EvaluatedMove { mv: moves[best_idx], eval: best_score });
        }

        let result = EvaluatedMove { mv: moves[best_idx], eval: best_score };
        log::info!("minimax depth {} best {} eval {:?} nodes {}", self.depth, result.mv, result.eval, self.nodes);
        Some(result)
    }
}
