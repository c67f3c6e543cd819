//! Benchmarks for advancing the ring.

#![expect(missing_docs)]

use bubble_ring::{Perturbation, SimulationConfig, SimulationController};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("ticks");
    group.sample_size(20);

    for num_points in [200, 2_000, 20_000] {
        let config = SimulationConfig::default()
            .with_num_points(num_points)
            .with_perturbation(Perturbation::random());

        let Ok(mut sim) = SimulationController::new(config, Some(42)) else {
            continue;
        };
        sim.toggle();

        group.bench_function(BenchmarkId::new("tick", num_points), |b| b.iter(|| sim.tick().len()));
        group.bench_function(BenchmarkId::new("par_tick", num_points), |b| b.iter(|| sim.par_tick().len()));
    }

    group.finish();
}

criterion_group!(benches, ticks);
criterion_main!(benches);
