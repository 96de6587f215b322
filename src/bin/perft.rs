use anyhow::{Context, Result};
use chessai::board::Position;
use chessai::perft::{perft, perft_divide, perft_parallel};

#[derive(clap::Parser, Debug)]
#[command(name = "perft", about = "Perft driver for the chessai move generator")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// FEN string or "startpos"
    #[arg(value_name = "FEN", default_value = "startpos")]
    fen: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
    /// Print the node count below each root move
    #[arg(long, default_value_t = false)]
    divide: bool,
}

fn main() -> Result<()> {
    use clap::Parser;
    use std::time::Instant;

    env_logger::init();
    let args = Args::parse();
    let depth = args.depth;

    let base = if args.fen == "startpos" {
        Position::startpos()
    } else {
        Position::from_fen(&args.fen).context("Invalid FEN")?
    };

    if args.divide {
        let mut total = 0;
        for (mv, n) in perft_divide(&base, depth) {
            println!("{mv}: {n}");
            total += n;
        }
        println!("\nnodes: {total}");
        return Ok(());
    }

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build().context("thread pool")?;
    let (nodes, dt) = pool.install(|| {
        let t0 = Instant::now();
        let nodes = if args.threads <= 1 { perft(&base, depth) } else { perft_parallel(&base, depth) };
        (nodes, t0.elapsed().as_secs_f64())
    });

    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}
