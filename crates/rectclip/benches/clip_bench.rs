//! Criterion benchmarks for segment and polygon clipping.
//! Focus sizes: polygon vertex counts n in {3, 10, 100, 1000}.
//! Results: by default under target/criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rectclip::prelude::*;

fn random_segments(m: usize, seed: u64) -> Vec<(Point, Point)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..m)
        .map(|_| {
            let a = Point::new(rng.gen_range(-30.0..30.0), rng.gen_range(-30.0..30.0));
            let b = Point::new(rng.gen_range(-30.0..30.0), rng.gen_range(-30.0..30.0));
            (a, b)
        })
        .collect()
}

fn bench_segments(c: &mut Criterion) {
    let w = Window::new(-10.0, -10.0, 10.0, 10.0).unwrap();
    let segs = random_segments(1024, 43);
    c.bench_function("clip_segment_1024", |b| {
        b.iter(|| {
            let mut kept = 0usize;
            for &(p, q) in &segs {
                if clip_segment(black_box(&w), p, q).is_some() {
                    kept += 1;
                }
            }
            kept
        })
    });
}

fn bench_polygons(c: &mut Criterion) {
    let w = Window::new(-10.0, -10.0, 10.0, 10.0).unwrap();
    let mut group = c.benchmark_group("clip_polygon");
    for &n in &[3usize, 10, 100, 1000] {
        let cfg = SampleCfg {
            vertex_count: VertexCount::Fixed(n),
            ..SampleCfg::default()
        };
        let poly = draw_polygon(cfg, ReplayToken { seed: 44, index: 0 });
        group.bench_with_input(BenchmarkId::from_parameter(n), &poly, |b, poly| {
            b.iter(|| clip_polygon(black_box(&w), poly))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_segments, bench_polygons);
criterion_main!(benches);
