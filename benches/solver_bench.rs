use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stamp_dispenser::StampDispenser;

const HIGH_VALUES: &[i64] = &[
    1_000_000, 500_000, 100_000, 50_000, 10_000, 9000, 8000, 7000, 5000, 3000, 1000, 700, 500,
    260, 100, 50, 12, 10, 2, 1,
];

fn bench_single_request(c: &mut Criterion) {
    let dispenser = StampDispenser::from_values(HIGH_VALUES).unwrap();
    let mut group = c.benchmark_group("min_units_for");

    for request in [1_740_i64, 77_787, 487_647] {
        group.bench_with_input(BenchmarkId::from_parameter(request), &request, |b, &request| {
            b.iter(|| dispenser.min_units_for(black_box(request)).unwrap())
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let requests: Vec<i64> = (0..64).map(|i| 10_000 + i * 1_337).collect();
    let mut group = c.benchmark_group("min_units_for_each");

    for workers in [1_usize, 4] {
        let dispenser = StampDispenser::from_values(HIGH_VALUES)
            .unwrap()
            .with_worker_threads(workers);
        group.bench_with_input(BenchmarkId::from_parameter(workers), &requests, |b, requests| {
            b.iter(|| dispenser.min_units_for_each(black_box(requests)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_request, bench_batch);
criterion_main!(benches);
