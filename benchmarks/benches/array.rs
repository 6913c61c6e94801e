// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

use construct_array::Array;

// Fast mode: FAST_BENCH=1 cargo bench -p benchmarks --bench array
fn is_fast_mode() -> bool {
    std::env::var("FAST_BENCH")
        .map(|v| v == "1")
        .unwrap_or(false)
}

fn configure_group(group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>) {
    if is_fast_mode() {
        group.measurement_time(std::time::Duration::from_millis(500));
        group.sample_size(10);
    } else {
        group.measurement_time(std::time::Duration::from_secs(3));
        group.sample_size(50);
    }
}

// =============================================================================
// Vec vs Array
// =============================================================================

fn bench_push_from_empty(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_from_empty");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..s {
                    vec.push(i as u32);
                }
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("Array", size), &size, |b, &s| {
            b.iter(|| {
                let mut array = Array::new(0);
                for i in 0..s {
                    array.push(i as u32);
                }
                black_box(array)
            });
        });

        group.bench_with_input(BenchmarkId::new("Array::push_checked", size), &size, |b, &s| {
            b.iter(|| {
                let mut array = Array::new(0);
                for i in 0..s {
                    if array.push_checked(i as u32).is_err() {
                        break;
                    }
                }
                black_box(array)
            });
        });
    }

    group.finish();
}

fn bench_push_after_clear(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_after_clear");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            let mut vec = Vec::with_capacity(s);
            b.iter(|| {
                vec.clear();
                for i in 0..s {
                    vec.push(i as u32);
                }
                black_box(&vec);
            });
        });

        group.bench_with_input(BenchmarkId::new("Array", size), &size, |b, &s| {
            let mut array = Array::new(s);
            b.iter(|| {
                array.clear();
                for i in 0..s {
                    array.push(i as u32);
                }
                black_box(&array);
            });
        });
    }

    group.finish();
}

fn bench_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter_batched(
                || (0..s as u32).collect::<Vec<_>>(),
                |mut vec| {
                    vec.reverse();
                    black_box(vec)
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("Array", size), &size, |b, &s| {
            b.iter_batched(
                || (0..s as u32).collect::<Array<_>>(),
                |mut array| {
                    array.reverse();
                    black_box(array)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_push_from_empty,
    bench_push_after_clear,
    bench_reverse
);
criterion_main!(benches);
