use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use segment_savings::{max_savings, SegmentTable};

fn random_values(len: usize, distinct: i64, rng: &mut StdRng) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(1..=distinct)).collect()
}

fn bench_max_savings(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_savings");
    let mut rng = StdRng::seed_from_u64(42);

    for &len in &[16, 64, 128, 256] {
        let values = random_values(len, 4, &mut rng);
        group.bench_with_input(BenchmarkId::new("few_distinct", len), &values, |b, v| {
            b.iter(|| max_savings(black_box(v)))
        });

        let runs = vec![7_i64; len];
        group.bench_with_input(BenchmarkId::new("single_run", len), &runs, |b, v| {
            b.iter(|| max_savings(black_box(v)))
        });
    }

    group.finish();
}

fn bench_best_coloring(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let values = random_values(128, 3, &mut rng);
    let table = SegmentTable::build(&values);

    c.bench_function("best_coloring_128", |b| {
        b.iter(|| black_box(&table).best_coloring())
    });
}

criterion_group!(benches, bench_max_savings, bench_best_coloring);
criterion_main!(benches);
