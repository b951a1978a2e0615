// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The packed tree and its query engine.

use alloc::collections::BinaryHeap;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

use thicket_geom::{Aabb, Point, Shape};

use crate::builder;
use crate::node::{Kind, Node, PointEntry, RectEntry};

/// A static, bulk-loaded R-tree over points or boxes.
///
/// Built once with [`RTree::bulk_load_points`] or [`RTree::bulk_load_rects`]
/// and immutable afterwards; concurrent reads are safe. Every query returns
/// owned `(geometry, payload)` pairs.
pub struct RTree<P> {
    root: Node<P>,
    max_children: usize,
    dims: usize,
    len: usize,
}

impl<P: Copy> RTree<P> {
    /// Pack point entries into a tree with the given fanout.
    ///
    /// Panics on empty input, `max_children < 2`, or mixed dimensions.
    pub fn bulk_load_points(entries: Vec<(Point, P)>, max_children: usize) -> Self {
        let len = entries.len();
        let dims = entries.first().map_or(0, |(p, _)| p.dim());
        let root = builder::pack_points(entries, max_children);
        Self {
            root,
            max_children,
            dims,
            len,
        }
    }

    /// Pack box entries into a tree with the given fanout. The third tuple
    /// field is the aggregate count carried into weighted nearest-neighbor
    /// accounting.
    ///
    /// Panics on empty input, `max_children < 2`, or mixed dimensions.
    pub fn bulk_load_rects(entries: Vec<(Aabb, P, u64)>, max_children: usize) -> Self {
        let len = entries.len();
        let dims = entries.first().map_or(0, |(a, _, _)| a.dim());
        let root = builder::pack_rects(entries, max_children);
        Self {
            root,
            max_children,
            dims,
            len,
        }
    }

    /// Number of entries in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: a tree cannot be built over zero entries.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The dimension shared by all entries.
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// The fanout ceiling the tree was packed with.
    pub fn max_children(&self) -> usize {
        self.max_children
    }

    /// Number of levels, counting leaves.
    pub fn height(&self) -> usize {
        let mut h = 1;
        let mut node = &self.root;
        while let Kind::Internal(children) = &node.kind {
            h += 1;
            node = &children[0];
        }
        h
    }

    /// The root node, for structure inspection.
    pub fn root(&self) -> &Node<P> {
        &self.root
    }

    /// All entries whose geometry intersects `query`.
    ///
    /// Point entries must lie inside `query` (boundary included); box entries
    /// match when they touch or overlap it. Result order is unspecified.
    pub fn query_rect(&self, query: &Aabb) -> Vec<(Shape, P)> {
        debug_assert_eq!(query.dim(), self.dims, "query dimension mismatch");
        let mut out = Vec::new();
        if !self.root.aabb.intersects(query) {
            return out;
        }
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match &node.kind {
                Kind::Internal(children) => {
                    for child in children {
                        if child.aabb.intersects(query) {
                            stack.push(child);
                        }
                    }
                }
                Kind::PointLeaf(entries) => {
                    for e in entries {
                        if query.contains(&e.point) {
                            out.push((Shape::Point(e.point.clone()), e.payload));
                        }
                    }
                }
                Kind::RectLeaf(entries) => {
                    for e in entries {
                        if query.intersects(&e.aabb) {
                            out.push((Shape::Rect(e.aabb.clone()), e.payload));
                        }
                    }
                }
            }
        }
        out
    }

    /// All entries within `radius` of `origin` (minimum distance, so a box
    /// origin matches everything a point anywhere inside it would).
    pub fn query_circle(&self, origin: &Shape, radius: f64) -> Vec<(Shape, P)> {
        debug_assert_eq!(origin.dim(), self.dims, "query dimension mismatch");
        let mut out = Vec::new();
        if origin.min_dist_rect(&self.root.aabb) > radius {
            return out;
        }
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match &node.kind {
                Kind::Internal(children) => {
                    for child in children {
                        if origin.min_dist_rect(&child.aabb) <= radius {
                            stack.push(child);
                        }
                    }
                }
                Kind::PointLeaf(entries) => {
                    for e in entries {
                        if origin.min_dist_point(&e.point) <= radius {
                            out.push((Shape::Point(e.point.clone()), e.payload));
                        }
                    }
                }
                Kind::RectLeaf(entries) => {
                    for e in entries {
                        if origin.min_dist_rect(&e.aabb) <= radius {
                            out.push((Shape::Rect(e.aabb.clone()), e.payload));
                        }
                    }
                }
            }
        }
        out
    }

    /// All entries simultaneously within every `(center, radius)` circle.
    ///
    /// Subtrees are pruned as soon as one circle rejects them, so the cost is
    /// close to the most selective circle's.
    pub fn query_circle_all(&self, circles: &[(Point, f64)]) -> Vec<(Shape, P)> {
        let within_all_rect =
            |aabb: &Aabb| circles.iter().all(|(c, r)| aabb.min_dist_point(c) <= *r);
        let within_all_point = |p: &Point| circles.iter().all(|(c, r)| p.dist(c) <= *r);

        let mut out = Vec::new();
        if !within_all_rect(&self.root.aabb) {
            return out;
        }
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match &node.kind {
                Kind::Internal(children) => {
                    for child in children {
                        if within_all_rect(&child.aabb) {
                            stack.push(child);
                        }
                    }
                }
                Kind::PointLeaf(entries) => {
                    for e in entries {
                        if within_all_point(&e.point) {
                            out.push((Shape::Point(e.point.clone()), e.payload));
                        }
                    }
                }
                Kind::RectLeaf(entries) => {
                    for e in entries {
                        if within_all_rect(&e.aabb) {
                            out.push((Shape::Rect(e.aabb.clone()), e.payload));
                        }
                    }
                }
            }
        }
        out
    }

    /// The `k` entries nearest to `query` by Euclidean minimum distance, in
    /// non-decreasing distance order.
    ///
    /// With `keep_ties`, every entry tied with the k-th reported distance is
    /// included as well, so the result may exceed `k`.
    pub fn nearest(&self, query: &Point, k: usize, keep_ties: bool) -> Vec<(Shape, P)> {
        debug_assert_eq!(query.dim(), self.dims, "query dimension mismatch");
        self.best_first(
            k,
            keep_ties,
            &|aabb| aabb.min_dist_point(query),
            Some(&|p| p.dist(query)),
            false,
        )
    }

    /// Nearest boxes to a point under a caller-supplied distance, where each
    /// reported box consumes its aggregate count from the `k` budget.
    ///
    /// The same `dist` keys both subtree boxes and entry boxes, so it must be
    /// monotone under box inclusion for the search order to hold (a minimum
    /// distance is; a center distance is the common pragmatic choice).
    ///
    /// Panics if the tree was built from point entries.
    pub fn nearest_by<F>(&self, query: &Point, dist: F, k: usize, keep_ties: bool) -> Vec<(Aabb, P)>
    where
        F: Fn(&Point, &Aabb) -> f64,
    {
        debug_assert_eq!(query.dim(), self.dims, "query dimension mismatch");
        rects_only(self.best_first(k, keep_ties, &|aabb| dist(query, aabb), None, true))
    }

    /// Nearest boxes to a box under a caller-supplied distance; otherwise
    /// identical to [`RTree::nearest_by`].
    ///
    /// Panics if the tree was built from point entries.
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
        debug_assert_eq!(query.dim(), self.dims, "query dimension mismatch");
        rects_only(self.best_first(k, keep_ties, &|aabb| dist(query, aabb), None, true))
    }

    /// Shared best-first walk. Nodes and leaf entries share one min-ordered
    /// heap keyed by `rect_key` (and `point_key` for point entries); a leaf
    /// entry is reported on its own dequeue, which keeps reports globally
    /// ordered by distance. The loop guard stops once the budget is spent and,
    /// without `keep_ties`, the next key strictly exceeds the last reported
    /// distance.
    fn best_first(
        &self,
        k: usize,
        keep_ties: bool,
        rect_key: &dyn Fn(&Aabb) -> f64,
        point_key: Option<&dyn Fn(&Point) -> f64>,
        weighted: bool,
    ) -> Vec<(Shape, P)> {
        let mut out = Vec::new();
        if k == 0 {
            return out;
        }
        let mut heap = BinaryHeap::new();
        heap.push(Queued {
            dist: 0.0,
            item: Item::Node(&self.root),
        });
        let mut reported: u64 = 0;
        let mut last_reported = f64::NEG_INFINITY;

        while let Some(Queued { dist, item }) = heap.pop() {
            if reported >= k as u64 && (!keep_ties || dist > last_reported) {
                break;
            }
            match item {
                Item::Node(node) => match &node.kind {
                    Kind::Internal(children) => {
                        for child in children {
                            heap.push(Queued {
                                dist: rect_key(&child.aabb),
                                item: Item::Node(child),
                            });
                        }
                    }
                    Kind::PointLeaf(entries) => {
                        let point_key = point_key
                            .expect("point-entry tree: use `nearest` for the Euclidean search");
                        for e in entries {
                            heap.push(Queued {
                                dist: point_key(&e.point),
                                item: Item::PointHit(e),
                            });
                        }
                    }
                    Kind::RectLeaf(entries) => {
                        for e in entries {
                            heap.push(Queued {
                                dist: rect_key(&e.aabb),
                                item: Item::RectHit(e),
                            });
                        }
                    }
                },
                Item::PointHit(e) => {
                    out.push((Shape::Point(e.point.clone()), e.payload));
                    reported += 1;
                    last_reported = dist;
                }
                Item::RectHit(e) => {
                    out.push((Shape::Rect(e.aabb.clone()), e.payload));
                    reported += if weighted { e.count } else { 1 };
                    last_reported = dist;
                }
            }
        }
        out
    }
}

fn rects_only<P>(hits: Vec<(Shape, P)>) -> Vec<(Aabb, P)> {
    hits.into_iter()
        .map(|(shape, payload)| match shape {
            Shape::Rect(aabb) => (aabb, payload),
            Shape::Point(_) => unreachable!("box distance search never reports points"),
        })
        .collect()
}

impl<P> core::fmt::Debug for RTree<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RTree")
            .field("len", &self.len)
            .field("dims", &self.dims)
            .field("max_children", &self.max_children)
            .finish_non_exhaustive()
    }
}

/// What the nearest-neighbor heap holds: a whole subtree or a single leaf
/// entry surfaced for reporting.
enum Item<'a, P> {
    Node(&'a Node<P>),
    PointHit(&'a PointEntry<P>),
    RectHit(&'a RectEntry<P>),
}

struct Queued<'a, P> {
    dist: f64,
    item: Item<'a, P>,
}

impl<P> PartialEq for Queued<'_, P> {
    fn eq(&self, other: &Self) -> bool {
        self.dist.total_cmp(&other.dist) == Ordering::Equal
    }
}

impl<P> Eq for Queued<'_, P> {}

impl<P> PartialOrd for Queued<'_, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P> Ord for Queued<'_, P> {
    // Reversed so the max-heap pops the smallest distance first.
    fn cmp(&self, other: &Self) -> Ordering {
        other.dist.total_cmp(&self.dist)
    }
}
