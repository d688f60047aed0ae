//! Criterion benchmarks for [`compute`].
//!
//! Front ends recompute on every keystroke, so a single call should stay far
//! below a frame budget.
//!
//! Run with:
//! ```bash
//! cargo bench --package canvas-sizer-core --bench calculator_bench
//! ```

use canvas_sizer_core::{
    compute, preview_box, PreferredCanvasWidth, ScreenInput, ViewingDistance, PREVIEW_MAX_WIDTH,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// ── Fixtures ──────────────────────────────────────────────────────────────────

fn phone() -> ScreenInput {
    ScreenInput {
        pixel_width: 2796,
        pixel_height: 1290,
        diagonal_size: 6.1,
        viewing_distance: ViewingDistance::Close,
        preferred_canvas_width: PreferredCanvasWidth::W750,
    }
}

fn monitor() -> ScreenInput {
    ScreenInput {
        pixel_width: 1920,
        pixel_height: 1080,
        diagonal_size: 27.0,
        viewing_distance: ViewingDistance::Medium,
        preferred_canvas_width: PreferredCanvasWidth::W375,
    }
}

fn tv() -> ScreenInput {
    ScreenInput {
        pixel_width: 3840,
        pixel_height: 2160,
        diagonal_size: 55.0,
        viewing_distance: ViewingDistance::Far,
        preferred_canvas_width: PreferredCanvasWidth::W1125,
    }
}

// ── Benchmarks ────────────────────────────────────────────────────────────────

/// Benchmarks [`compute`] for a few representative devices.
fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");

    for (name, input) in [("phone", phone()), ("monitor", monitor()), ("tv", tv())] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, input| {
            b.iter(|| compute(black_box(input)))
        });
    }

    group.finish();
}

/// Benchmarks the rejection path (empty form field).
fn bench_compute_rejected(c: &mut Criterion) {
    let input = ScreenInput {
        pixel_width: 0,
        ..monitor()
    };
    c.bench_function("compute_rejected", |b| b.iter(|| compute(black_box(&input))));
}

/// Benchmarks [`preview_box`] for landscape and portrait canvases.
fn bench_preview_box(c: &mut Criterion) {
    let mut group = c.benchmark_group("preview_box");
    group.bench_function("landscape", |b| {
        b.iter(|| preview_box(black_box(1920), black_box(1080), PREVIEW_MAX_WIDTH))
    });
    group.bench_function("portrait", |b| {
        b.iter(|| preview_box(black_box(1080), black_box(1920), PREVIEW_MAX_WIDTH))
    });
    group.finish();
}

criterion_group!(benches, bench_compute, bench_compute_rejected, bench_preview_box);
criterion_main!(benches);
