//! Benchmarks for spline sampling, stroking and drawing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use curvum::canvas::{RasterCanvas, RecordingCanvas};
use curvum::curves::{CatmullRom2, CatmullRomSegment};
use curvum::polygon::stroke_quads;
use curvum::{Color, Point2, Spline};

/// Generates a random walk of control points with steps of up to 40 units.
fn generate_random_walk(count: usize, seed: u64) -> Vec<Point2<f64>> {
    let mut points = Vec::with_capacity(count);
    let mut state = seed;
    let mut next = || {
        // xorshift for deterministic random
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state as f64 / u64::MAX as f64
    };

    let mut current = Point2::new(500.0, 500.0);
    for _ in 0..count {
        points.push(current);
        current = Point2::new(
            current.x + (next() - 0.5) * 80.0,
            current.y + (next() - 0.5) * 80.0,
        );
    }

    points
}

fn bench_segment_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("catmull_rom_segment_eval");

    let segment = CatmullRomSegment::new(
        Point2::new(0.0, 0.0),
        Point2::new(10.0, 0.0),
        Point2::new(10.0, 10.0),
        Point2::new(0.0, 10.0),
        0.5,
        1.0,
    );

    group.bench_function("single", |b| b.iter(|| segment.eval(black_box(0.5))));
    group.bench_function("samples", |b| {
        b.iter(|| black_box(&segment).samples().count())
    });

    group.finish();
}

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("catmull_rom_sample");

    for count in [10, 100, 1000] {
        let points = generate_random_walk(count, 12345);
        group.throughput(Throughput::Elements(count as u64));

        for (name, alpha) in [("uniform", 0.0), ("centripetal", 0.5), ("chordal", 1.0)] {
            let spline = CatmullRom2::new(points.clone(), true).with_alpha(alpha);
            group.bench_with_input(BenchmarkId::new(name, count), &spline, |b, spline| {
                b.iter(|| spline.sample())
            });
        }
    }

    group.finish();
}

fn bench_stroke_quads(c: &mut Criterion) {
    let mut group = c.benchmark_group("stroke_quads");

    for count in [10, 100, 1000] {
        let path = CatmullRom2::new(generate_random_walk(count, 777), false)
            .sample()
            .unwrap_or_default();
        group.throughput(Throughput::Elements(path.len() as u64));

        for width in [2.0, 8.0] {
            group.bench_with_input(
                BenchmarkId::new(format!("width_{width}"), count),
                &path,
                |b, path| b.iter(|| stroke_quads(path, black_box(width), true)),
            );
        }
    }

    group.finish();
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("spline_draw");

    let mut spline = Spline::closed();
    spline.extend_points(generate_random_walk(50, 4242));
    spline.set_background_color(Color::rgb(255, 255, 0));
    spline.set_stroke_color(Color::rgb(255, 0, 0));

    for width in [1, 3, 9] {
        spline.set_stroke_width(width);

        group.bench_with_input(BenchmarkId::new("recording", width), &spline, |b, spline| {
            b.iter(|| {
                let mut canvas = RecordingCanvas::new();
                spline.draw(&mut canvas)
            })
        });

        group.bench_with_input(BenchmarkId::new("raster", width), &spline, |b, spline| {
            b.iter(|| {
                let mut canvas = RasterCanvas::new(1000, 1000);
                spline.draw(&mut canvas)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_segment_eval,
    bench_sample,
    bench_stroke_quads,
    bench_draw
);
criterion_main!(benches);
