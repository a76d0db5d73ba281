//! Benchmarks for oprs range generation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use oprs_range::{eratosthenes, is_prime, must_upto, uptoch, RangeArgs};

fn bench_upto_eager(c: &mut Criterion) {
    c.bench_function("upto_eager_10k", |b| {
        b.iter(|| black_box(must_upto(black_box(&[0i64, 10_000, 1]))))
    });
}

fn bench_upto_iter(c: &mut Criterion) {
    let args = RangeArgs::new(0i64, 10_000, 1);

    c.bench_function("upto_iter_sum_10k", |b| {
        b.iter(|| black_box(args).iter().sum::<i64>())
    });
}

fn bench_uptoch_lazy(c: &mut Criterion) {
    let sizes = [100i64, 1_000];

    let mut group = c.benchmark_group("uptoch_lazy");

    for size in sizes {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let sum: i64 = uptoch(&[size]).unwrap().sum();
                black_box(sum)
            })
        });
    }

    group.finish();
}

fn bench_eratosthenes(c: &mut Criterion) {
    let limits = [1_000u64, 100_000];

    let mut group = c.benchmark_group("eratosthenes");

    for limit in limits {
        group.bench_with_input(BenchmarkId::from_parameter(limit), &limit, |b, &limit| {
            b.iter(|| black_box(eratosthenes(black_box(limit))))
        });
    }

    group.finish();
}

fn bench_is_prime(c: &mut Criterion) {
    c.bench_function("is_prime_7919", |b| b.iter(|| is_prime(black_box(7919u64))));
}

criterion_group!(
    benches,
    bench_upto_eager,
    bench_upto_iter,
    bench_uptoch_lazy,
    bench_eratosthenes,
    bench_is_prime,
);
criterion_main!(benches);
