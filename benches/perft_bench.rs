use chessai::board::Position;
use chessai::perft::{perft, perft_parallel};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_perft(c: &mut Criterion) {
    let start = Position::startpos();
    c.bench_function("perft_3_startpos", |ben| ben.iter(|| black_box(perft(black_box(&start), 3))));
    c.bench_function("perft_parallel_4_startpos", |ben| ben.iter(|| black_box(perft_parallel(black_box(&start), 4))));
    c.bench_function("legal_moves_startpos", |ben| ben.iter(|| black_box(black_box(&start).legal_moves())));
}

criterion_group!(benches, bench_perft);
criterion_main!(benches);
