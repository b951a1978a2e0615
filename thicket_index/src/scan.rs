// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exhaustive-scan baseline with the same query surface as the tree.
//!
//! Small and obviously correct; good for tiny sets and as the oracle in
//! randomized tests.

use alloc::vec::Vec;

use thicket_geom::{Aabb, Point, Shape};

/// A flat list of entries answering the same queries as
/// [`RTree`](crate::RTree) by linear scan.
pub struct LinearScan<P> {
    items: Vec<(Shape, P, u64)>,
}

impl<P: Copy> LinearScan<P> {
    /// Wrap point entries. Each carries an implicit count of 1.
    pub fn from_points(entries: Vec<(Point, P)>) -> Self {
        Self {
            items: entries
                .into_iter()
                .map(|(p, payload)| (Shape::Point(p), payload, 1))
                .collect(),
        }
    }

    /// Wrap box entries with their aggregate counts.
    pub fn from_rects(entries: Vec<(Aabb, P, u64)>) -> Self {
        Self {
            items: entries
                .into_iter()
                .map(|(a, payload, count)| (Shape::Rect(a), payload, count))
                .collect(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// See [`RTree::query_rect`](crate::RTree::query_rect).
    pub fn query_rect(&self, query: &Aabb) -> Vec<(Shape, P)> {
        self.items
            .iter()
            .filter(|(shape, _, _)| match shape {
                Shape::Point(p) => query.contains(p),
                Shape::Rect(a) => query.intersects(a),
            })
            .map(|(shape, payload, _)| (shape.clone(), *payload))
            .collect()
    }

    /// See [`RTree::query_circle`](crate::RTree::query_circle).
    pub fn query_circle(&self, origin: &Shape, radius: f64) -> Vec<(Shape, P)> {
        self.items
            .iter()
            .filter(|(shape, _, _)| origin.min_dist(shape) <= radius)
            .map(|(shape, payload, _)| (shape.clone(), *payload))
            .collect()
    }

    /// See [`RTree::query_circle_all`](crate::RTree::query_circle_all).
    pub fn query_circle_all(&self, circles: &[(Point, f64)]) -> Vec<(Shape, P)> {
        self.items
            .iter()
            .filter(|(shape, _, _)| circles.iter().all(|(c, r)| shape.min_dist_point(c) <= *r))
            .map(|(shape, payload, _)| (shape.clone(), *payload))
            .collect()
    }

    /// See [`RTree::nearest`](crate::RTree::nearest).
    pub fn nearest(&self, query: &Point, k: usize, keep_ties: bool) -> Vec<(Shape, P)> {
        self.nearest_inner(k, keep_ties, false, |shape| shape.min_dist_point(query))
    }

    /// See [`RTree::nearest_by`](crate::RTree::nearest_by).
    pub fn nearest_by<F>(&self, query: &Point, dist: F, k: usize, keep_ties: bool) -> Vec<(Aabb, P)>
    where
        F: Fn(&Point, &Aabb) -> f64,
    {
        self.nearest_inner(k, keep_ties, true, |shape| match shape {
            Shape::Rect(a) => dist(query, a),
            Shape::Point(_) => panic!("point-entry scan: use `nearest`"),
        })
        .into_iter()
        .map(|(shape, payload)| match shape {
            Shape::Rect(a) => (a, payload),
            Shape::Point(_) => unreachable!(),
        })
        .collect()
    }

    /// See [`RTree::nearest_rect_by`](crate::RTree::nearest_rect_by).
    pub fn nearest_rect_by<F>(
        &self,
        query: &Aabb,
        dist: F,
        k: usize,
        keep_ties: bool,
    ) -> Vec<(Aabb, P)>
    where
        F: Fn(&Aabb, &Aabb) -> f64,
    {
        self.nearest_inner(k, keep_ties, true, |shape| match shape {
            Shape::Rect(a) => dist(query, a),
            Shape::Point(_) => panic!("point-entry scan: use `nearest`"),
        })
        .into_iter()
        .map(|(shape, payload)| match shape {
            Shape::Rect(a) => (a, payload),
            Shape::Point(_) => unreachable!(),
        })
        .collect()
    }

    fn nearest_inner<F>(&self, k: usize, keep_ties: bool, weighted: bool, key: F) -> Vec<(Shape, P)>
    where
        F: Fn(&Shape) -> f64,
    {
        let mut out = Vec::new();
        if k == 0 {
            return out;
        }
        let mut ranked: Vec<(f64, &(Shape, P, u64))> =
            self.items.iter().map(|item| (key(&item.0), item)).collect();
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut reported: u64 = 0;
        let mut last_reported = f64::NEG_INFINITY;
        for (dist, (shape, payload, count)) in ranked {
            if reported >= k as u64 && (!keep_ties || dist > last_reported) {
                break;
            }
            out.push((shape.clone(), *payload));
            reported += if weighted { *count } else { 1 };
            last_reported = dist;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    fn pt(coords: &[f64]) -> Point {
        Point::new(coords.to_vec())
    }

    #[test]
    fn scan_answers_basic_queries() {
        let scan = LinearScan::from_points(vec![
            (pt(&[0.0, 0.0]), 1_u64),
            (pt(&[5.0, 5.0]), 2),
            (pt(&[9.0, 9.0]), 3),
        ]);
        assert_eq!(scan.len(), 3);

        let q = Aabb::new(pt(&[4.0, 4.0]), pt(&[10.0, 10.0]));
        let ids: Vec<u64> = scan.query_rect(&q).iter().map(|(_, p)| *p).collect();
        assert_eq!(ids, vec![2, 3]);

        let near = scan.nearest(&pt(&[6.0, 6.0]), 1, false);
        assert_eq!(near.len(), 1);
        assert_eq!(near[0].1, 2);
    }

    #[test]
    fn scan_nearest_keeps_ties() {
        let scan = LinearScan::from_points(vec![
            (pt(&[1.0, 0.0]), 1_u64),
            (pt(&[0.0, 1.0]), 2),
            (pt(&[0.0, -1.0]), 3),
            (pt(&[5.0, 5.0]), 4),
        ]);
        let hits = scan.nearest(&pt(&[0.0, 0.0]), 1, true);
        assert_eq!(hits.len(), 3, "all unit-distance entries are tied");
    }
}
