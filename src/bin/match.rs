use anyhow::{Context, Result};
use chessai::board::{GameState, Position};
use chessai::config::{EngineConfig, MinimaxConfig, MonteCarloConfig, RandomConfig};
use chessai::ChessEngine;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "match", about = "Play a series of games between two engines, alternating colors")]
struct Args {
    /// Number of games to play
    #[arg(long, default_value_t = 10)]
    games: usize,

    /// First engine: minimax, mcts, random or a path to a JSON config
    #[arg(long, default_value = "minimax")]
    a: String,

    /// Second engine: minimax, mcts, random or a path to a JSON config
    #[arg(long, default_value = "random")]
    b: String,

    /// Max plies before declaring a draw
    #[arg(long, default_value_t = 200)]
    max_plies: u32,

    /// Starting FEN position
    #[arg(long)]
    fen: Option<String>,

    /// Base seed; game i uses seed + i for randomised engines
    #[arg(long, default_value_t = 1u64)]
    seed: u64,

    /// Optional: write summary JSON to this path
    #[arg(long)]
    json_out: Option<PathBuf>,
}

fn resolve(name: &str, seed: u64) -> Result<EngineConfig> {
    Ok(match name {
        "minimax" => EngineConfig::Minimax(MinimaxConfig { depth: 2, ..MinimaxConfig::default() }),
        "mcts" => EngineConfig::MonteCarlo(MonteCarloConfig { seed, simulations: 16, cycles: 100, ..MonteCarloConfig::default() }),
        "random" => EngineConfig::Random(RandomConfig { seed }),
        path => EngineConfig::from_path(path).with_context(|| format!("engine '{path}'"))?,
    })
}

#[derive(Debug, Default, Serialize)]
struct Summary {
    games: usize,
    engine_a: String,
    engine_b: String,
    a_wins: u32,
    b_wins: u32,
    draws: u32,
    unfinished: u32,
    plies: u64,
    elapsed_s: f64,
    results: Vec<String>,
}

/// Plays one game; returns the final state (Playing if the ply cap was hit) and plies played.
fn play_game(white: &mut dyn ChessEngine, black: &mut dyn ChessEngine, start: &Position, max_plies: u32) -> (GameState, u32) {
    let mut pos = start.clone();
    for ply in 0..max_plies {
        let mover: &mut dyn ChessEngine = if ply % 2 == 0 { &mut *white } else { &mut *black };
        let Some(mv) = mover.make_move(&pos) else { return (pos.game_state(), ply); };
        pos = pos.apply(&mv);
        let state = pos.game_state();
        if state.is_over() { return (state, ply + 1); }
    }
    (GameState::Playing, max_plies)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = match &args.fen {
        Some(fen) => Position::from_fen(fen).with_context(|| format!("Invalid FEN string: {fen}"))?,
        None => Position::startpos(),
    };
    if start.side_to_move() != chessai::board::Color::White {
        anyhow::bail!("match games must start with White to move");
    }

    let pb = ProgressBar::new(args.games as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games {msg}")?);

    let mut summary = Summary { games: args.games, engine_a: args.a.clone(), engine_b: args.b.clone(), ..Summary::default() };
    let t0 = Instant::now();
    for g in 0..args.games {
        let seed = args.seed + g as u64;
        let mut a = resolve(&args.a, seed)?.build();
        let mut b = resolve(&args.b, seed.wrapping_add(0x5EED))?.build();
        let a_is_white = g % 2 == 0;
        let (state, plies) = if a_is_white {
            play_game(a.as_mut(), b.as_mut(), &start, args.max_plies)
        } else {
            play_game(b.as_mut(), a.as_mut(), &start, args.max_plies)
        };
        summary.plies += plies as u64;
        match (state, a_is_white) {
            (GameState::WhiteWin, true) | (GameState::BlackWin, false) => summary.a_wins += 1,
            (GameState::WhiteWin, false) | (GameState::BlackWin, true) => summary.b_wins += 1,
            (GameState::Draw, _) => summary.draws += 1,
            (GameState::Playing, _) => summary.unfinished += 1,
        }
        summary.results.push(format!("{} {} ({} plies)", if a_is_white { "a-b" } else { "b-a" }, state, plies));
        log::debug!("game {} finished: {} after {} plies", g + 1, state, plies);
        pb.set_message(format!("a {} b {} draws {}", summary.a_wins, summary.b_wins, summary.draws + summary.unfinished));
        pb.inc(1);
    }
    pb.finish();
    summary.elapsed_s = t0.elapsed().as_secs_f64();

    println!("summary: games={} a={} b={} a_wins={} b_wins={} draws={} unfinished={}",
        summary.games, summary.engine_a, summary.engine_b, summary.a_wins, summary.b_wins, summary.draws, summary.unfinished);

    if let Some(path) = &args.json_out {
        let payload = serde_json::to_string_pretty(&summary)?;
        if let Err(e) = std::fs::write(path, payload) {
            eprintln!("warn: failed to write json_out: {}", e);
        }
    }
    Ok(())
}
