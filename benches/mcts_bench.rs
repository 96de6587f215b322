use chessai::board::Position;
use chessai::config::MonteCarloConfig;
use chessai::search::mcts::rollout;
use chessai::search::{ChessEngine, MonteCarloEngine};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn bench_mcts(c: &mut Criterion) {
    let start = Position::startpos();
    c.bench_function("rollout_200_startpos", |ben| {
        let mut rng = SmallRng::seed_from_u64(1);
        ben.iter(|| black_box(rollout(black_box(&start), &mut rng, 200)))
    });

    let cfg = MonteCarloConfig { simulations: 16, cycles: 20, max_rollout_plies: 60, ..MonteCarloConfig::default() };
    c.bench_function("mcts_20_cycles_startpos", |ben| {
        ben.iter(|| {
            let mut engine = MonteCarloEngine::with_config(&cfg);
            black_box(engine.make_move(black_box(&start)))
        })
    });
}

criterion_group!(benches, bench_mcts);
criterion_main!(benches);
