//! Criterion micro-benchmarks for signal-field computation and reads.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use waft_bench::labyrinth;
use waft_field::SignalField;

/// Benchmark: full multi-source BFS compute on a 100x100 labyrinth.
fn bench_compute_100x100(c: &mut Criterion) {
    let layout = labyrinth(100, 100);

    c.bench_function("field_compute_100x100", |b| {
        b.iter(|| {
            let field = SignalField::new(black_box(&layout));
            black_box(field.read(50, 50));
        });
    });
}

/// Benchmark: gradient probes over all 10K cells of a precomputed field.
fn bench_gradient_sweep_100x100(c: &mut Criterion) {
    let layout = labyrinth(100, 100);
    let field = SignalField::new(&layout);

    c.bench_function("gradient_sweep_100x100", |b| {
        b.iter(|| {
            for r in 0..100u32 {
                for col in 0..100u32 {
                    let probes = field.gradient(r, col);
                    black_box(&probes);
                }
            }
        });
    });
}

criterion_group!(benches, bench_compute_100x100, bench_gradient_sweep_100x100);
criterion_main!(benches);
