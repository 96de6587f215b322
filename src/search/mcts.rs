use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::board::{Color, GameState, Move, Position};
use crate::config::MonteCarloConfig;
use crate::search::engine::{root_moves, ChessEngine, EvaluatedMove, RootMoves};

/// Cycles between progress reports.
const CYCLES_BETWEEN_UPDATES: u32 = 10;

type NodeId = usize;

struct TreeNode {
    position: Position,
    mv: Option<Move>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    expanded: bool,
    visits: u32,
    wins: u32,
    draws: u32,
}

impl TreeNode {
    fn new(position: Position, mv: Option<Move>, parent: Option<NodeId>) -> Self {
        Self { position, mv, parent, children: Vec::new(), expanded: false, visits: 0, wins: 0, draws: 0 }
    }

    /// Draws count half.
    fn score_rate(&self) -> f64 {
        if self.visits == 0 { return 0.0; }
        (self.wins as f64 + 0.5 * self.draws as f64) / self.visits as f64
    }
}

/// UCB1; unvisited children are always tried first.
fn ucb1(node: &TreeNode, parent_visits: u32, exploration: f64) -> f64 {
    if node.visits == 0 { return f64::INFINITY; }
    node.score_rate() + exploration * ((parent_visits as f64).ln() / node.visits as f64).sqrt()
}

/// Search tree for one move decision. Nodes live in an arena and refer to
/// their parent by index.
struct Tree {
    nodes: Vec<TreeNode>,
}

impl Tree {
    fn new(root: Position) -> Self { Self { nodes: vec![TreeNode::new(root, None, None)] } }

    fn select(&self, exploration: f64) -> NodeId {
        let mut id = 0;
        while !self.nodes[id].children.is_empty() {
            let parent_visits = self.nodes[id].visits;
            let mut best = self.nodes[id].children[0];
            let mut best_ucb = f64::NEG_INFINITY;
            for &c in &self.nodes[id].children {
                let u = ucb1(&self.nodes[c], parent_visits, exploration);
                if u > best_ucb {
                    best_ucb = u;
                    best = c;
                }
            }
            id = best;
        }
        id
    }

    fn expand(&mut self, id: NodeId) {
        if self.nodes[id].expanded { return; }
        self.nodes[id].expanded = true;
        let parent_pos = self.nodes[id].position.clone();
        for mv in parent_pos.legal_moves() {
            let child = TreeNode::new(parent_pos.apply(&mv), Some(mv), Some(id));
            let child_id = self.nodes.len();
            self.nodes.push(child);
            self.nodes[id].children.push(child_id);
        }
    }

    fn backpropagate(&mut self, from: NodeId, visits: u32, wins: u32, draws: u32) {
        let mut cur = Some(from);
        while let Some(id) = cur {
            let n = &mut self.nodes[id];
            n.visits += visits;
            n.wins += wins;
            n.draws += draws;
            cur = n.parent;
        }
    }

    /// Root child with the most visits; first one wins ties.
    fn most_visited(&self) -> Option<&TreeNode> {
        let mut best: Option<&TreeNode> = None;
        for &c in &self.nodes[0].children {
            let n = &self.nodes[c];
            if best.map_or(true, |b| n.visits > b.visits) { best = Some(n); }
        }
        best
    }
}

/// One playout with uniformly random legal moves. Playouts still going after
/// `max_plies` are scored as draws.
pub fn rollout(start: &Position, rng: &mut SmallRng, max_plies: u32) -> GameState {
    let mut pos = start.clone();
    for _ in 0..max_plies {
        let moves = pos.legal_moves();
        let state = pos.classify(&moves);
        if state.is_over() { return state; }
        let Some(mv) = moves.choose(rng) else {
            panic!("position in play has no legal moves: {}", pos.to_fen());
        };
        pos = pos.apply(mv);
    }
    match pos.game_state() {
        GameState::Playing => GameState::Draw,
        s => s,
    }
}

fn rollout_seed(seed: u64, cycle: u32, index: u32) -> u64 {
    (seed ^ ((cycle as u64) << 32 | index as u64)).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Evaluation in White-positive centipawn-like units from a win rate for `side`.
fn report_eval(rate: f64, side: Color) -> i32 {
    let v = ((rate * 2.0 - 1.0).powi(3) * 1000.0).round() as i32;
    if side == Color::White { v } else { -v }
}

/// Monte Carlo tree search with parallel random playouts.
pub struct MonteCarloEngine {
    cfg: MonteCarloConfig,
    pool: Option<rayon::ThreadPool>,
    last_stats: Vec<(Move, u32, u32, u32)>,
}

impl Default for MonteCarloEngine {
    fn default() -> Self { MonteCarloEngine::with_config(&MonteCarloConfig::default()) }
}

impl MonteCarloEngine {
    pub fn new(seed: u64, exploration: f64, simulations: u32, cycles: u32) -> Self {
        MonteCarloEngine::with_config(&MonteCarloConfig { seed, exploration, simulations, cycles, ..MonteCarloConfig::default() })
    }

    pub fn with_config(cfg: &MonteCarloConfig) -> Self {
        let pool = if cfg.threads > 0 {
            match rayon::ThreadPoolBuilder::new().num_threads(cfg.threads).build() {
                Ok(p) => Some(p),
                Err(e) => {
                    log::warn!("could not build a {}-thread rollout pool, using the global pool: {e}", cfg.threads);
                    None
                }
            }
        } else {
            None
        };
        Self { cfg: *cfg, pool, last_stats: Vec::new() }
    }

    pub fn config(&self) -> &MonteCarloConfig { &self.cfg }

    /// `simulations` playouts from `pos`, returning (wins, draws) for `side`.
    fn simulate(&self, pos: &Position, side: Color, cycle: u32) -> (u32, u32) {
        let wins = AtomicU32::new(0);
        let draws = AtomicU32::new(0);
        let seed = self.cfg.seed;
        let max_plies = self.cfg.max_rollout_plies;
        let run = || {
            (0..self.cfg.simulations).into_par_iter().for_each(|i| {
                let mut rng = SmallRng::seed_from_u64(rollout_seed(seed, cycle, i));
                match rollout(pos, &mut rng, max_plies) {
                    GameState::Draw => { draws.fetch_add(1, Ordering::Relaxed); }
                    s if s == GameState::win_for(side) => { wins.fetch_add(1, Ordering::Relaxed); }
                    _ => {}
                }
            })
        };
        match &self.pool {
            Some(p) => p.install(run),
            None => run(),
        }
        (wins.into_inner(), draws.into_inner())
    }

    /// Root children of the last search, most visited first, as a table.
    pub fn statistics_string(&self) -> String {
        let mut s = String::from("|   move   |  visits  |   wins   |  draws   |   rate   |\n");
        let mut rows = self.last_stats.clone();
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        for (mv, n, w, d) in rows.iter().take(10) {
            let rate = if *n == 0 { 0.0 } else { (*w as f64 + 0.5 * *d as f64) / *n as f64 };
            s.push_str(&format!("|{:^10}|{:^10}|{:^10}|{:^10}|{:^10.4}|\n", mv.to_string(), n, w, d, rate));
        }
        s
    }
}

impl ChessEngine for MonteCarloEngine {
    fn name(&self) -> &str { "monte_carlo" }

    fn statistics(&self) -> Option<String> {
        if self.last_stats.is_empty() { None } else { Some(self.statistics_string()) }
    }

    fn make_move_with(
        &mut self,
        pos: &Position,
        on_progress: &mut dyn FnMut(&EvaluatedMove),
        is_cancelled: &dyn Fn() -> bool,
    ) -> Option<EvaluatedMove> {
        self.last_stats.clear();
        match root_moves(pos) {
            RootMoves::NoMoves => return None,
            RootMoves::Forced(mv) => return Some(EvaluatedMove { mv, eval: None }),
            RootMoves::Choice(_) => {}
        }

        let side = pos.side_to_move();
        let mut tree = Tree::new(pos.clone());
        tree.expand(0);

        let summarize = |tree: &Tree| {
            tree.most_visited().and_then(|n| {
                let eval = (n.visits > 0).then(|| report_eval(n.score_rate(), side));
                n.mv.map(|mv| EvaluatedMove { mv, eval })
            })
        };

        for cycle in 0..self.cfg.cycles {
            if is_cancelled() {
                log::debug!("mcts cancelled after {cycle} cycles");
                break;
            }
            let leaf = tree.select(self.cfg.exploration);
            tree.expand(leaf);
            let (wins, draws) = self.simulate(&tree.nodes[leaf].position, side, cycle);
            tree.backpropagate(leaf, self.cfg.simulations, wins, draws);

            if (cycle + 1) % CYCLES_BETWEEN_UPDATES == 0 {
                if let Some(best) = summarize(&tree) {
                    log::debug!("mcts cycle {} best {} eval {:?} tree {}", cycle + 1, best.mv, best.eval, tree.nodes.len());
                    on_progress(&best);
                }
            }
        }

        self.last_stats = tree.nodes[0].children.iter()
            .filter_map(|&c| { let n = &tree.nodes[c]; n.mv.map(|mv| (mv, n.visits, n.wins, n.draws)) })
            .collect();

        let result = summarize(&tree)?;
        log::info!("mcts best {} eval {:?} after {} root visits", result.mv, result.eval, tree.nodes[0].visits);
        Some(result)
    }
}
