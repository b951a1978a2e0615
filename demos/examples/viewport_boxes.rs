// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport boxes.
//!
//! Index a grid of kurbo screen rectangles (via the `kurbo` feature of
//! `thicket_geom`), compute a visible set for a viewport, and find the box
//! nearest to the pointer.
//!
//! Run:
//! - `cargo run -p thicket_demos --example viewport_boxes`

use kurbo::Rect;
use thicket_geom::{Aabb, Point};
use thicket_index::RTree;

fn main() {
    // Lay out rows of 40x20 boxes with a small gutter.
    let mut entries: Vec<(Aabb, u64, u64)> = Vec::new();
    for row in 0..50u64 {
        for col in 0..10u64 {
            let x = col as f64 * 44.0;
            let y = row as f64 * 24.0;
            let rect = Rect::new(x, y, x + 40.0, y + 20.0);
            entries.push((rect.into(), row * 10 + col, 1));
        }
    }
    let tree = RTree::bulk_load_rects(entries, 8);
    println!("indexed {} boxes: {tree:?}", tree.len());

    // Everything intersecting a 440x120 viewport scrolled to y=300.
    let viewport: Aabb = Rect::new(0.0, 300.0, 440.0, 420.0).into();
    let visible = tree.query_rect(&viewport);
    println!("visible boxes: {}", visible.len());
    assert!(visible.len() >= 50, "five rows of ten should be visible");

    // The box closest to the pointer, by minimum distance.
    let pointer = Point::new(vec![222.0, 333.0]);
    let near = tree.nearest_by(&pointer, |p, a| a.min_dist_point(p), 1, false);
    println!("box under/near pointer: id {}", near[0].1);
}
