//! Benchmarks for oprs bounded transfer

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use oprs_memory::{capy, capy_within, drain_into, move_slice, BoundedSeq};

fn bench_capy_sizes(c: &mut Criterion) {
    let sizes = [64usize, 1024, 16384];

    let mut group = c.benchmark_group("capy_by_size");

    for size in sizes {
        let src: Vec<u64> = (0..size as u64).collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &src, |b, src| {
            b.iter(|| {
                let mut dst = BoundedSeq::new(src.len());
                black_box(capy(&mut dst, black_box(src)));
                dst
            })
        });
    }

    group.finish();
}

fn bench_move_slice_chunks(c: &mut Criterion) {
    let src: Vec<u64> = (0..4096).collect();

    c.bench_function("move_slice_4096_by_64", |b| {
        b.iter(|| {
            let mut rest: &[u64] = &src;
            let mut moved = 0;
            while !rest.is_empty() {
                let mut dst = BoundedSeq::new(64);
                moved += move_slice(&mut dst, &mut rest);
                black_box(&dst);
            }
            moved
        })
    });
}

fn bench_drain_into(c: &mut Criterion) {
    c.bench_function("drain_into_1024", |b| {
        b.iter_batched(
            || (0..1024u64).collect::<Vec<_>>(),
            |mut src| {
                let mut dst = BoundedSeq::new(512);
                black_box(drain_into(&mut dst, &mut src));
                (dst, src)
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_capy_within(c: &mut Criterion) {
    c.bench_function("capy_within_1024", |b| {
        b.iter_batched(
            || {
                let mut seq = BoundedSeq::new(2048);
                capy(&mut seq, &(0..1024u64).collect::<Vec<_>>());
                seq
            },
            |mut seq| {
                black_box(capy_within(&mut seq, ..));
                seq
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_capy_sizes,
    bench_move_slice_chunks,
    bench_drain_into,
    bench_capy_within,
);
criterion_main!(benches);
