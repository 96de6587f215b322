//! Engine settings, loadable from JSON.
//!
//! ```json
//! { "engine": "monte_carlo", "seed": 7, "simulations": 64, "cycles": 400 }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::search::engine::ChessEngine;
use crate::search::mcts::MonteCarloEngine;
use crate::search::minimax::MinimaxEngine;
use crate::search::random::RandomEngine;
use crate::search::tt;
use crate::search::zobrist;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimaxConfig {
    /// Plies searched below each root move.
    pub depth: u32,
    pub tt_bytes: usize,
    /// Search captures, promotions and checks first.
    pub order_moves: bool,
    pub zobrist_seed: u64,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self { depth: 3, tt_bytes: tt::DEFAULT_BYTES, order_moves: true, zobrist_seed: zobrist::DEFAULT_SEED }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonteCarloConfig {
    pub seed: u64,
    /// UCB1 exploration constant.
    pub exploration: f64,
    /// Random playouts per cycle.
    pub simulations: u32,
    /// Select/expand/simulate/backpropagate cycles per move.
    pub cycles: u32,
    /// Playouts still running after this many plies count as draws.
    pub max_rollout_plies: u32,
    /// Rollout threads; 0 uses the global rayon pool.
    pub threads: usize,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self { seed: 0, exploration: std::f64::consts::SQRT_2, simulations: 50, cycles: 200, max_rollout_plies: 200, threads: 0 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    pub seed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "engine", rename_all = "snake_case")]
pub enum EngineConfig {
    Minimax(MinimaxConfig),
    MonteCarlo(MonteCarloConfig),
    Random(RandomConfig),
}

impl Default for EngineConfig {
    fn default() -> Self { EngineConfig::Minimax(MinimaxConfig::default()) }
}

impl EngineConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> { Ok(serde_json::from_str(s)?) }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
        EngineConfig::from_json_str(&text)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub fn build(&self) -> Box<dyn ChessEngine> {
        match self {
            EngineConfig::Minimax(c) => Box::new(MinimaxEngine::with_config(c)),
            EngineConfig::MonteCarlo(c) => Box::new(MonteCarloEngine::with_config(c)),
            EngineConfig::Random(c) => Box::new(RandomEngine::new(c.seed)),
        }
    }
}
