// Copyright 2025 the Stencil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `stencil_viewport`: input storms and commits.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use stencil_engine::RecordingEngine;
use stencil_viewport::{Container, StagedTransform, ViewportConfig, ViewportController};

/// Container that keeps only the latest staged transform.
struct Wrapper {
    size: Size,
    shown: StagedTransform,
}

impl Container for Wrapper {
    fn client_size(&self) -> Size {
        self.size
    }

    fn present(&mut self, staged: &StagedTransform) {
        self.shown = *staged;
    }
}

fn controller() -> ViewportController<RecordingEngine, Wrapper> {
    let natural = Size::new(1080.0, 1920.0);
    let mut viewport = ViewportController::new(ViewportConfig::default());
    viewport.attach(
        RecordingEngine::new(natural),
        Wrapper {
            size: Size::new(800.0, 600.0),
            shown: StagedTransform::IDENTITY,
        },
        natural,
    );
    viewport.fit_to_wrapper();
    viewport
}

fn bench_pan_storm(c: &mut Criterion) {
    c.bench_function("viewport/pan_storm_1k", |b| {
        b.iter_batched(
            controller,
            |mut viewport| {
                viewport.on_pointer_down(Point::new(400.0, 300.0));
                for i in 0..1_000_u32 {
                    let now = u64::from(i);
                    let x = 400.0 + f64::from(i % 200) - 100.0;
                    viewport.on_pointer_move(Point::new(x, 300.0), true, now);
                    viewport.poll(now);
                }
                viewport.on_pointer_up();
                black_box(viewport.staged())
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_wheel_then_commit(c: &mut Criterion) {
    c.bench_function("viewport/wheel_200_then_commit", |b| {
        b.iter_batched(
            controller,
            |mut viewport| {
                let at = Point::new(400.0, 300.0);
                for i in 0..200_u64 {
                    viewport.on_wheel(at, if i % 2 == 0 { -4.0 } else { 3.0 }, i * 4);
                    viewport.poll(i * 4);
                }
                while let Some(deadline) = viewport.next_deadline() {
                    viewport.poll(deadline);
                }
                black_box(viewport.zoom())
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_zoom_to(c: &mut Criterion) {
    c.bench_function("viewport/zoom_to_commit", |b| {
        b.iter_batched(
            controller,
            |mut viewport| {
                for step in 1..=20_u32 {
                    viewport.zoom_to(0.1 * f64::from(step), Point::new(400.0, 300.0));
                }
                black_box(viewport.zoom())
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_pan_storm, bench_wheel_then_commit, bench_zoom_to);
criterion_main!(benches);
