// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for carousel layout and stepping.
//!
//! Measures the performance of:
//! - Snap computation for large thumbnail strips
//! - Nearest-snap lookup after a drag
//! - Stepping through a main carousel with a listener attached

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_gallery::carousel::{
    Align, CarouselEvents, ContainScroll, Engine, EngineEvent, Options, SlideMetrics, SnapLayout,
};
use std::hint::black_box;

const VIEWPORT: f32 = 1024.0;
const THUMB: f32 = 96.0;
const GAP: f32 = 8.0;

/// Benchmark snap computation for every alignment and containment mode.
fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("snap_layout");

    for count in [10_usize, 100, 1_000] {
        let metrics = SlideMetrics::uniform(count, THUMB, GAP, VIEWPORT);

        for align in [Align::Start, Align::Center, Align::End] {
            for contain in [ContainScroll::None, ContainScroll::TrimSnaps] {
                let id = BenchmarkId::new(format!("compute_{align:?}_{contain:?}"), count);
                group.bench_with_input(id, &metrics, |b, metrics| {
                    b.iter(|| black_box(SnapLayout::compute(metrics, align, contain)));
                });
            }
        }
    }

    group.finish();
}

/// Benchmark the lookup performed when a drag is released.
fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("snap_layout");

    let metrics = SlideMetrics::uniform(1_000, THUMB, GAP, VIEWPORT);
    let layout = SnapLayout::compute(&metrics, Align::Start, ContainScroll::TrimSnaps);
    let midpoint = layout.max_scroll() / 2.0 + THUMB / 3.0;

    group.bench_function("nearest_1000", |b| {
        b.iter(|| black_box(layout.nearest(black_box(midpoint))));
    });

    group.finish();
}

/// Benchmark stepping forward through a full-width main carousel.
fn bench_stepping(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");

    let metrics = SlideMetrics::uniform(50, VIEWPORT, 0.0, VIEWPORT);

    group.bench_function("scroll_next_50", |b| {
        b.iter(|| {
            let mut engine: Engine<u8> = Engine::new(Options::main());
            engine.reinit(&metrics);
            engine.on(EngineEvent::Select, 0);
            for _ in 0..50 {
                engine.scroll_next();
            }
            black_box(engine.take_events().len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_compute, bench_nearest, bench_stepping);
criterion_main!(benches);
