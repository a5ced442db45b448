//! Cache lookup benchmarks.

use std::hint::black_box;

use ady_cache::{DEFAULT_IDLE, IdleCache};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

fn lookup_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for count in [16u32, 256, 4096] {
        group.throughput(Throughput::Elements(u64::from(count)));

        group.bench_with_input(BenchmarkId::new("hit", count), &count, |b, &count| {
            let cache = IdleCache::<u32, u64>::new("bench", DEFAULT_IDLE);
            for k in 0..count {
                cache.get_or_insert_with(&k, || u64::from(k));
            }
            b.iter(|| {
                for k in 0..count {
                    black_box(cache.get_or_insert_with(&k, || unreachable!()));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("miss", count), &count, |b, &count| {
            b.iter(|| {
                let cache = IdleCache::<u32, u64>::new("bench", DEFAULT_IDLE);
                for k in 0..count {
                    black_box(cache.get_or_insert_with(&k, || u64::from(k)));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, lookup_benchmarks);
criterion_main!(benches);
