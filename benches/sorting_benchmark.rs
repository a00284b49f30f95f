use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use graal::prelude::*;
use rand::Rng;
use std::hint::black_box;

fn bench_integers(c: &mut Criterion) {
    let mut group = c.benchmark_group("Integer Sort");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let count = 10_000;
    let values: Vec<i64> = (0..count).map(|_| rng.random()).collect();

    group.bench_function("graal::sort", |b| {
        b.iter_batched(
            || values.clone(),
            |mut data| sort(black_box(&mut data), |a, b| a < b),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || values.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_strided(c: &mut Criterion) {
    let mut group = c.benchmark_group("Strided Records");
    group.sample_size(10);

    // 16-byte records keyed by their leading big-endian u32.
    let mut rng = rand::rng();
    let count = 10_000;
    let mut raw = vec![0u8; count * 16];
    rng.fill(&mut raw[..]);

    group.bench_function("graal::sort (16-byte stride)", |b| {
        b.iter_batched(
            || raw.clone(),
            |mut bytes| {
                let mut view = StrideSliceMut::new(&mut bytes, 16).unwrap();
                sort(black_box(&mut view), |a, b| a[..4] < b[..4]);
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("graal::unique (16-byte stride)", |b| {
        b.iter_batched(
            || raw[..1_000 * 16].to_vec(),
            |mut bytes| {
                let mut view = StrideSliceMut::new(&mut bytes, 16).unwrap();
                unique(black_box(&mut view), |a, b| a[0] == b[0])
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_integers, bench_strided);
criterion_main!(benches);
