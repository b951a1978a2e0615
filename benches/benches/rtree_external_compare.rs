// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use thicket_geom::{Aabb, Point};
use thicket_index::RTree;

use rstar::primitives::Rectangle;
use rstar::{AABB, RTree as RStarTree};

fn gen_grid_rects(n: usize, cell: f64) -> Vec<(Aabb, u64, u64)> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            let aabb = Aabb::new(
                Point::new(vec![x0, y0]),
                Point::new(vec![x0 + cell, y0 + cell]),
            );
            out.push((aabb, (y * n + x) as u64, 1));
        }
    }
    out
}

fn to_rstar_rects(v: &[(Aabb, u64, u64)]) -> Vec<Rectangle<[f64; 2]>> {
    v.iter()
        .map(|(r, _, _)| {
            Rectangle::from_corners(
                [r.low().get(0), r.low().get(1)],
                [r.high().get(0), r.high().get(1)],
            )
        })
        .collect()
}

fn bench_rtree_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_external_compare");
    for &n in &[64usize, 128] {
        let rects = gen_grid_rects(n, 10.0);
        let query = Aabb::new(
            Point::new(vec![100.0, 100.0]),
            Point::new(vec![500.0, 500.0]),
        );
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("thicket_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || rects.clone(),
                |entries| {
                    let tree = RTree::bulk_load_rects(entries, 16);
                    let hits: usize = tree.query_rect(&query).len();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_rects(&rects),
                |rectangles| {
                    let tree = RStarTree::bulk_load(rectangles);
                    let aabb = AABB::from_corners([100.0, 100.0], [500.0, 500.0]);
                    let hits: usize = tree.locate_in_envelope_intersecting(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        let thicket = RTree::bulk_load_rects(rects.clone(), 16);
        let reference = RStarTree::bulk_load(to_rstar_rects(&rects));
        let probe = Point::new(vec![333.0, 333.0]);

        group.bench_function(format!("thicket_nearest_n{}", n), |b| {
            b.iter(|| {
                black_box(
                    thicket
                        .nearest_by(&probe, |p, a| a.min_dist_point(p), 1, false)
                        .len(),
                )
            })
        });

        group.bench_function(format!("rstar_nearest_n{}", n), |b| {
            b.iter(|| black_box(reference.nearest_neighbor(&[333.0, 333.0]).is_some()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rtree_external_compare);
criterion_main!(benches);
