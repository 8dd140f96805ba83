// Copyright 2025 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `stencil_timing`.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use stencil_timing::{Debounce, Throttle};

fn bench_throttle_storm(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing/throttle_submit");

    // One submission per millisecond; only one in sixteen is released.
    for len in [1_000_u64, 10_000, 100_000] {
        group.throughput(Throughput::Elements(len));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter(|| {
                let mut throttle = Throttle::new(16);
                let mut released = 0_u64;
                for now in 0..len {
                    if throttle.submit(now, now).is_some() || throttle.poll(now).is_some() {
                        released += 1;
                    }
                }
                black_box(released)
            });
        });
    }

    group.finish();
}

fn bench_debounce_reschedule(c: &mut Criterion) {
    c.bench_function("timing/debounce_reschedule_10k", |b| {
        b.iter(|| {
            let mut debounce = Debounce::new(600);
            let mut fired = 0_u32;
            for now in (0..10_000_u64).step_by(12) {
                if debounce.poll(now) {
                    fired += 1;
                }
                debounce.schedule(now);
            }
            black_box(fired)
        });
    });
}

criterion_group!(benches, bench_throttle_storm, bench_debounce_reschedule);
criterion_main!(benches);
