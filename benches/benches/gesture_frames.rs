// Copyright 2025 the Wallview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Size, Vec2};
use wallview::{
    EdgeClamp, NeverBlocked, NoopObserver, ScrollSurface, TouchPoint, ViewTransform,
    ViewportMetrics, ZoomConfig, ZoomEngine, compute_min_scale,
};

#[derive(Default)]
struct NullSurface {
    scroll: Vec2,
}

impl ScrollSurface for NullSurface {
    fn scroll_position(&self) -> Vec2 {
        self.scroll
    }
    fn lock_native_scroll(&mut self) {
        self.scroll = Vec2::ZERO;
    }
    fn unlock_native_scroll(&mut self, position: Vec2) {
        self.scroll = position;
    }
    fn apply_transform(&mut self, transform: &ViewTransform) {
        black_box(transform);
    }
    fn clear_transform(&mut self) {}
}

fn bench_clamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("clamp");
    let viewport = Size::new(800.0, 600.0);
    let content = Size::new(4000.0, 3000.0);
    let config = ZoomConfig::default();
    let metrics = ViewportMetrics::new(viewport, content).unwrap();
    let clamp = EdgeClamp::new(
        &metrics,
        compute_min_scale(viewport, content, config.edge_padding),
        &config,
    );

    let candidates: Vec<(Vec2, f64)> = (0..1_024_i32)
        .map(|i| {
            let t = f64::from(i) / 1_024.0;
            let scale = clamp.min_scale() + (1.0 - clamp.min_scale()) * t;
            (Vec2::new(-4000.0 * t + 50.0, 200.0 - 3000.0 * t), scale)
        })
        .collect();
    group.throughput(Throughput::Elements(candidates.len() as u64));
    group.bench_function("per_frame", |b| {
        b.iter(|| {
            for (candidate, scale) in &candidates {
                black_box(clamp.clamp(black_box(*candidate), *scale));
            }
        });
    });
    group.finish();
}

fn bench_pinch_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("pinch");

    // A full pinch-out from native resolution to the minimum scale and back.
    for frames in [60_usize, 240, 960] {
        let sequence: Vec<[TouchPoint; 2]> = (0..=frames)
            .map(|i| {
                let t = i as f64 / frames as f64;
                let spread = 40.0 + 360.0 * (1.0 - (2.0 * t - 1.0).abs());
                let cx = 400.0 + 50.0 * t;
                [
                    TouchPoint::new(0, cx - spread / 2.0, 300.0),
                    TouchPoint::new(1, cx + spread / 2.0, 300.0),
                ]
            })
            .collect();
        group.throughput(Throughput::Elements(frames as u64));
        group.bench_with_input(BenchmarkId::new("sequence", frames), &sequence, |b, seq| {
            b.iter(|| {
                let mut engine = ZoomEngine::new(
                    ZoomConfig::default(),
                    NullSurface {
                        scroll: Vec2::new(1200.0, 900.0),
                    },
                    NeverBlocked,
                    NoopObserver,
                );
                engine
                    .set_metrics(Size::new(800.0, 600.0), Size::new(4000.0, 3000.0))
                    .unwrap();
                engine.on_touch_start(&seq[0]);
                for touches in &seq[1..] {
                    engine.on_touch_move(touches);
                }
                engine.on_touch_end(&[]);
                black_box(*engine.state());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_clamp, bench_pinch_frames);
criterion_main!(benches);
