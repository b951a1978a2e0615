// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=thicket_index --heading-base-level=0

//! Thicket Index: a static, bulk-loaded, multi-dimensional R-tree.
//!
//! The tree is packed once from a fixed collection of entries with
//! Sort-Tile-Recursive and never changes afterwards: there is no insert,
//! remove, or rebalance path, which keeps nodes tight, queries cheap, and
//! concurrent reads trivially safe.
//!
//! - Build from `(Point, payload)` entries or from `(Aabb, payload, count)`
//!   entries, where `count` says how many underlying items a box aggregates.
//! - Query by rectangle ([`RTree::query_rect`]), by radius around any shape
//!   ([`RTree::query_circle`]), or by the conjunction of several circles
//!   ([`RTree::query_circle_all`]).
//! - Walk out the k nearest entries ([`RTree::nearest`]), optionally under a
//!   caller-supplied box distance with weighted counting
//!   ([`RTree::nearest_by`], [`RTree::nearest_rect_by`]).
//!
//! Geometry comes from [`thicket_geom`]; the index itself only relies on the
//! distance and intersection predicates of [`Point`](thicket_geom::Point),
//! [`Aabb`](thicket_geom::Aabb), and [`Shape`](thicket_geom::Shape).
//!
//! # Example
//!
//! ```
//! use thicket_geom::{Aabb, Point, Shape};
//! use thicket_index::RTree;
//!
//! let entries = vec![
//!     (Point::new(vec![0.0, 0.0]), 1_u64),
//!     (Point::new(vec![1.0, 1.0]), 2),
//!     (Point::new(vec![2.0, 2.0]), 3),
//!     (Point::new(vec![3.0, 3.0]), 4),
//! ];
//! let tree = RTree::bulk_load_points(entries, 2);
//!
//! // Rectangular range query.
//! let q = Aabb::new(Point::new(vec![0.5, 0.5]), Point::new(vec![2.5, 2.5]));
//! assert_eq!(tree.query_rect(&q).len(), 2);
//!
//! // Radius query around the origin.
//! let origin = Shape::Point(Point::new(vec![0.0, 0.0]));
//! assert_eq!(tree.query_circle(&origin, 1.5).len(), 2);
//!
//! // Two nearest entries, closest first.
//! let near = tree.nearest(&Point::new(vec![0.0, 0.0]), 2, false);
//! let ids: Vec<u64> = near.iter().map(|(_, id)| *id).collect();
//! assert_eq!(ids, vec![1, 2]);
//! ```
//!
//! ## Fanout and the root
//!
//! Every node below the root holds at most `max_children` children; the root
//! wraps whatever the last packing level left over and is the one node
//! allowed to exceed that bound. Building from `N <= max_children` entries
//! yields a single leaf as the root.
//!
//! ## Float semantics
//!
//! Coordinates and distances are finite `f64`s; NaNs are the caller's bug.
//! Distance comparisons use `total_cmp`, so equal distances behave
//! deterministically in nearest-neighbor tie handling.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod builder;

pub mod node;
pub mod scan;
pub mod tree;

pub use node::Node;
pub use scan::LinearScan;
pub use tree::RTree;
