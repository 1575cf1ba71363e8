//! Criterion benchmarks for cell computation.
//!
//! Runs a full container traversal (grid fill + one cell compute per
//! particle) on random point clouds of varying density to capture how
//! the worklist search scales with the number of neighbor candidates.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use vorocell::ContainerConfig;
use vorocell::Container;

fn random_container(n: usize, seed: u64) -> Container {
    let mut rng = StdRng::seed_from_u64(seed);
    let boxes_per_axis = ((n as f64).cbrt().ceil() as usize).max(1);
    let cfg = ContainerConfig::new(0.0, 10.0, 0.0, 10.0, 0.0, 10.0, boxes_per_axis, boxes_per_axis, boxes_per_axis)
        .with_periodicity(true, true, true);
    let mut container = Container::new(cfg);
    for id in 0..n as i64 {
        let x = rng.gen_range(0.0..10.0);
        let y = rng.gen_range(0.0..10.0);
        let z = rng.gen_range(0.0..10.0);
        container.put(id, x, y, z, None).unwrap();
    }
    container
}

fn bench_container_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("cell_compute_traversal");
    for &n in &[64usize, 256, 1024, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || random_container(n, 7 + n as u64),
                |container| {
                    for cell in container.iter_cells() {
                        let _ = black_box(cell.unwrap());
                    }
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_container_traversal);
criterion_main!(benches);
