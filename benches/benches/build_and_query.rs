// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use thicket_geom::{Aabb, Point, Shape};
use thicket_index::{LinearScan, RTree};

fn gen_grid_points(n: usize, cell: f64) -> Vec<(Point, u64)> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let p = Point::new(vec![x as f64 * cell, y as f64 * cell]);
            out.push((p, (y * n + x) as u64));
        }
    }
    out
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_rects(count: usize, extent: f64, max_side: f64) -> Vec<(Aabb, u64, u64)> {
    let mut rng = Rng::new(0x7e1c_4e75);
    (0..count)
        .map(|i| {
            let x = rng.next_f64() * extent;
            let y = rng.next_f64() * extent;
            let w = rng.next_f64() * max_side;
            let h = rng.next_f64() * max_side;
            let aabb = Aabb::new(
                Point::new(vec![x, y]),
                Point::new(vec![x + w, y + h]),
            );
            (aabb, i as u64, 1)
        })
        .collect()
}

fn bench_bulk_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_build");
    for &n in &[64usize, 128] {
        let points = gen_grid_points(n, 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("points_n{}", n * n), |b| {
            b.iter_batched(
                || points.clone(),
                |entries| {
                    let tree = RTree::bulk_load_points(entries, 16);
                    black_box(tree.height());
                },
                BatchSize::SmallInput,
            )
        });
    }
    for &count in &[4096usize, 16384] {
        let rects = gen_random_rects(count, 1000.0, 8.0);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("rects_n{count}"), |b| {
            b.iter_batched(
                || rects.clone(),
                |entries| {
                    let tree = RTree::bulk_load_rects(entries, 16);
                    black_box(tree.height());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");
    let n = 128usize;
    let points = gen_grid_points(n, 10.0);
    let tree = RTree::bulk_load_points(points.clone(), 16);
    let scan = LinearScan::from_points(points);
    let query = Aabb::new(
        Point::new(vec![100.0, 100.0]),
        Point::new(vec![500.0, 500.0]),
    );
    let origin = Shape::Point(Point::new(vec![640.0, 640.0]));
    let probe = Point::new(vec![333.0, 333.0]);

    group.bench_function("tree_query_rect", |b| {
        b.iter(|| black_box(tree.query_rect(&query).len()))
    });
    group.bench_function("scan_query_rect", |b| {
        b.iter(|| black_box(scan.query_rect(&query).len()))
    });
    group.bench_function("tree_query_circle", |b| {
        b.iter(|| black_box(tree.query_circle(&origin, 200.0).len()))
    });
    group.bench_function("tree_nearest_k10", |b| {
        b.iter(|| black_box(tree.nearest(&probe, 10, false).len()))
    });
    group.bench_function("scan_nearest_k10", |b| {
        b.iter(|| black_box(scan.nearest(&probe, 10, false).len()))
    });
    group.finish();
}

criterion_group!(benches, bench_bulk_build, bench_queries);
criterion_main!(benches);
