use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mindiff_core::{generator::generate_weights, solve, ReachabilityTable, SolverOptions, WeightList};

fn bench_solve(c: &mut Criterion) {
    let opts = SolverOptions::default();
    let mut group = c.benchmark_group("solve_uniform_weights");
    for &n in &[16usize, 32, 64] {
        // Deterministic weights, stable across runs.
        let weights = WeightList::new(generate_weights(n, 100, 2024)).expect("even n");
        let cells = (n + 1) as u64 * (n as u64 / 2 + 1) * (weights.target() + 1);
        group.throughput(Throughput::Elements(cells));

        group.bench_function(BenchmarkId::new("table_only", n), |b| {
            b.iter(|| ReachabilityTable::build(black_box(&weights), &opts).expect("fits"));
        });

        group.bench_function(BenchmarkId::new("full_solve", n), |b| {
            b.iter(|| solve(black_box(&weights), &opts).expect("solvable"));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
