#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmarks for the rasterization algorithms.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rasterkit::prelude::*;
use rasterkit::render::rasterize_line;
use std::hint::black_box;

fn thick_line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("thick_line");

    let mut fb = Framebuffer::new(1024, 1024).expect("framebuffer creation should succeed");
    for thickness in [1u32, 3, 9, 21] {
        let segment = Segment::new(Point::new(0, 0), Point::new(1023, 767), thickness)
            .expect("valid thickness");

        group.bench_with_input(BenchmarkId::from_parameter(thickness), &thickness, |b, _| {
            b.iter(|| {
                let mut canvas = fb.canvas();
                draw_line(&mut canvas, black_box(&segment), Rgba::BLACK);
            });
        });
    }

    group.finish();
}

fn line_points_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_points");

    for length in [100i32, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, &length| {
            b.iter(|| {
                rasterize_line(
                    black_box(Point::new(0, 0)),
                    black_box(Point::new(length, length / 3)),
                    3,
                )
                .expect("valid thickness")
            });
        });
    }

    group.finish();
}

fn circle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle");

    let mut fb = Framebuffer::new(1024, 1024).expect("framebuffer creation should succeed");
    for radius in [10i32, 50, 200, 450] {
        let ring = Circle::new(Point::new(512, 512), radius, 4).expect("valid thickness");
        let disk = Circle::new(Point::new(512, 512), radius, 1).expect("valid thickness");

        group.bench_with_input(BenchmarkId::new("ring", radius), &radius, |b, _| {
            b.iter(|| {
                let mut canvas = fb.canvas();
                draw_circle(&mut canvas, black_box(&ring), Rgba::RED);
            });
        });
        group.bench_with_input(BenchmarkId::new("disk", radius), &radius, |b, _| {
            b.iter(|| {
                let mut canvas = fb.canvas();
                draw_filled_circle(&mut canvas, black_box(&disk), Rgba::RED);
            });
        });
    }

    group.finish();
}

fn antialiased_stroke_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("antialiased_stroke");

    let mut fb = Framebuffer::new(1024, 1024).expect("framebuffer creation should succeed");
    for thickness in [1u32, 2, 5, 11] {
        let segment = Segment::new(Point::new(10, 10), Point::new(1000, 400), thickness)
            .expect("valid thickness");

        group.bench_with_input(BenchmarkId::from_parameter(thickness), &thickness, |b, _| {
            b.iter(|| {
                let mut canvas = fb.canvas();
                draw_stroke(&mut canvas, black_box(&segment), Rgba::BLUE);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    thick_line_benchmark,
    line_points_benchmark,
    circle_benchmark,
    antialiased_stroke_benchmark
);
criterion_main!(benches);
