// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index basics.
//!
//! Pack a handful of points, then run each query family once.
//!
//! Run:
//! - `cargo run -p thicket_demos --example index_basics`

use thicket_geom::{Aabb, Point, Shape};
use thicket_index::RTree;

fn main() {
    // Pack a small diagonal of points with fanout 2.
    let entries = vec![
        (Point::new(vec![0.0, 0.0]), 1_u64),
        (Point::new(vec![1.0, 1.0]), 2),
        (Point::new(vec![2.0, 2.0]), 3),
        (Point::new(vec![3.0, 3.0]), 4),
    ];
    let tree = RTree::bulk_load_points(entries, 2);
    println!("packed: {tree:?} height={}", tree.height());

    // Rectangular range query.
    let q = Aabb::new(Point::new(vec![0.5, 0.5]), Point::new(vec![2.5, 2.5]));
    let hits = tree.query_rect(&q);
    println!("range hits: {:?}", hits.iter().map(|(_, id)| id).collect::<Vec<_>>());
    assert_eq!(hits.len(), 2);

    // Radius query around the origin.
    let origin = Shape::Point(Point::new(vec![0.0, 0.0]));
    let hits = tree.query_circle(&origin, 1.5);
    println!("circle hits: {:?}", hits.iter().map(|(_, id)| id).collect::<Vec<_>>());
    assert_eq!(hits.len(), 2);

    // Entries inside both circles at once.
    let hits = tree.query_circle_all(&[
        (Point::new(vec![0.0, 0.0]), 1.5),
        (Point::new(vec![2.0, 2.0]), 1.5),
    ]);
    println!("conjunction hits: {:?}", hits.iter().map(|(_, id)| id).collect::<Vec<_>>());
    assert_eq!(hits.len(), 1);

    // Two nearest entries, closest first.
    let near = tree.nearest(&Point::new(vec![0.0, 0.0]), 2, false);
    let ids: Vec<u64> = near.iter().map(|(_, id)| *id).collect();
    println!("nearest ids: {ids:?}");
    assert_eq!(ids, vec![1, 2]);
}
