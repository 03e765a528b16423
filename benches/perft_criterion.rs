use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use quince_chess::game_state::chess_types::GameState;
use quince_chess::move_generation::perft::perft;

const STARTPOS_EXPECTED: [u64; 3] = [20, 400, 8_902];

fn perft_benchmark(c: &mut Criterion) {
    // Sanity-check the generator once before timing anything.
    let mut state = GameState::new_game();
    for (i, expected) in STARTPOS_EXPECTED.iter().enumerate() {
        let depth = (i + 1) as u8;
        assert_eq!(
            perft(&mut state, depth).nodes,
            *expected,
            "perft({depth}) mismatch"
        );
    }

    let mut group = c.benchmark_group("perft_startpos");
    for (i, expected) in STARTPOS_EXPECTED.iter().enumerate() {
        let depth = (i + 1) as u8;
        group.throughput(Throughput::Elements(*expected));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut state = GameState::new_game();
                black_box(perft(&mut state, depth).nodes)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, perft_benchmark);
criterion_main!(benches);
