use anyhow::{Context, Result};
use chessai::board::{Color, GameState, Move, Position};
use chessai::config::{EngineConfig, MinimaxConfig, MonteCarloConfig, RandomConfig};
use chessai::search::engine::cancel_on;
use chessai::ChessEngine;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play chess against the minimax or Monte Carlo engine", long_about = None)]
struct Args {
    /// Engine: minimax, mcts or random
    #[arg(long, default_value = "minimax")]
    engine: String,

    /// JSON engine config; overrides --engine and the tuning flags below
    #[arg(long)]
    config: Option<PathBuf>,

    /// Operation mode: 'b' for best move, 's' for self play, 'h' for human
    #[arg(long, default_value = "h")]
    mode: String,

    /// Your color: 'w' for white, 'b' for black
    #[arg(long, default_value = "w")]
    color: String,

    /// Minimax depth
    #[arg(long, default_value_t = 3)]
    depth: u32,

    /// Random playouts per MCTS cycle
    #[arg(long, default_value_t = 50)]
    simulations: u32,

    /// MCTS cycles per move
    #[arg(long, default_value_t = 200)]
    cycles: u32,

    /// Rollout threads (0 = all cores)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Seed for MCTS and the random engine
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Stop each search after this many milliseconds
    #[arg(long)]
    movetime_ms: Option<u64>,

    /// Stop self play after this many plies
    #[arg(long, default_value_t = 300)]
    max_plies: u32,

    /// Print search statistics
    #[arg(long)]
    verbose: bool,

    /// Starting FEN position
    #[arg(long)]
    fen: Option<String>,
}

fn engine_config(args: &Args) -> Result<EngineConfig> {
    if let Some(path) = &args.config {
        return EngineConfig::from_path(path).with_context(|| format!("loading {}", path.display()));
    }
    Ok(match args.engine.to_lowercase().as_str() {
        "minimax" => EngineConfig::Minimax(MinimaxConfig { depth: args.depth, ..MinimaxConfig::default() }),
        "mcts" | "monte_carlo" => EngineConfig::MonteCarlo(MonteCarloConfig {
            seed: args.seed,
            simulations: args.simulations,
            cycles: args.cycles,
            threads: args.threads,
            ..MonteCarloConfig::default()
        }),
        "random" => EngineConfig::Random(RandomConfig { seed: args.seed }),
        other => anyhow::bail!("Unknown engine '{other}': use minimax, mcts or random"),
    })
}

fn parse_color(color_str: &str) -> Result<Color> {
    match color_str.to_lowercase().as_str() {
        "w" | "white" => Ok(Color::White),
        "b" | "black" => Ok(Color::Black),
        _ => anyhow::bail!("Invalid color: use 'w' or 'b'"),
    }
}

fn get_human_move(pos: &Position) -> Result<Move> {
    loop {
        print!("Enter your move (e.g., e2e4): ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 { anyhow::bail!("stdin closed"); }
        match pos.find_uci(input.trim()) {
            Some(mv) => return Ok(mv),
            None => println!("Illegal or malformed move! Use format like 'e2e4' or 'e7e8q'"),
        }
    }
}

fn engine_move(engine: &mut dyn ChessEngine, pos: &Position, args: &Args) -> Option<Move> {
    let stop = Arc::new(AtomicBool::new(false));
    if let Some(ms) = args.movetime_ms {
        let flag = stop.clone();
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(ms));
            flag.store(true, Ordering::Relaxed);
        });
    }
    let verbose = args.verbose;
    let start = Instant::now();
    let result = engine.make_move_with(
        pos,
        &mut |best| { if verbose { println!("  ... {} eval {:?}", best.mv, best.eval); } },
        &cancel_on(stop.clone()),
    );
    stop.store(true, Ordering::Relaxed);
    if verbose {
        if let Some(stats) = engine.statistics() { println!("{stats}"); }
        println!("elapsed: {:.2}s", start.elapsed().as_secs_f32());
    }
    result.map(|r| r.mv)
}

fn announce(state: GameState) {
    match state {
        GameState::WhiteWin => println!("\nCheckmate! White wins!"),
        GameState::BlackWin => println!("\nCheckmate! Black wins!"),
        GameState::Draw => println!("\nGame is a stalemate!"),
        GameState::Playing => {}
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mode = args.mode.chars().next().unwrap_or('h');
    let human_color = parse_color(&args.color)?;
    let config = engine_config(&args)?;
    let mut engine = config.build();
    log::info!("engine config: {}", config.to_json());

    let mut pos = match &args.fen {
        Some(fen) => Position::from_fen(fen).with_context(|| format!("Invalid FEN string: {fen}"))?,
        None => Position::startpos(),
    };

    if mode == 'b' {
        match engine_move(engine.as_mut(), &pos, &args) {
            Some(mv) => println!("bestmove {mv}"),
            None => println!("bestmove (none)"),
        }
        return Ok(());
    }

    let mut plies = 0;
    loop {
        let state = pos.game_state();
        if state.is_over() {
            announce(state);
            break;
        }
        if mode == 's' && plies >= args.max_plies {
            println!("\nStopped after {plies} plies");
            break;
        }

        println!("\n{pos}");
        println!("{}", pos.fen());

        let mv = if mode == 'h' && pos.side_to_move() == human_color {
            get_human_move(&pos)?
        } else {
            if args.verbose { println!("Thinking..."); }
            match engine_move(engine.as_mut(), &pos, &args) {
                Some(mv) => {
                    println!("Computer plays: {mv}");
                    mv
                }
                None => {
                    println!("No legal moves available!");
                    break;
                }
            }
        };
        pos = pos.apply(&mv);
        plies += 1;
    }

    Ok(())
}
