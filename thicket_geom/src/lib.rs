// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=thicket_geom --heading-base-level=0

//! Thicket Geom: minimal D-dimensional geometry primitives.
//!
//! This crate is the geometry contract consumed by [`thicket_index`]: points,
//! axis-aligned boxes, and the closed [`Shape`] union over both, together with
//! the distance and intersection predicates the index prunes with.
//!
//! - [`Point`]: a coordinate vector of arbitrary dimension.
//! - [`Aabb`]: an axis-aligned box given by two corner points.
//! - [`Shape`]: either of the above, with pairwise `min_dist`/`intersects`.
//!
//! All distances are Euclidean and non-negative; a distance of zero means the
//! operands touch or overlap. Coordinates are `f64` and assumed finite (no
//! NaNs). Mixing dimensionalities within one computation is a programming
//! error; debug builds assert.
//!
//! # Example
//!
//! ```
//! use thicket_geom::{Aabb, Point};
//!
//! let p = Point::new(vec![3.0, 0.0]);
//! let b = Aabb::new(Point::new(vec![0.0, 0.0]), Point::new(vec![1.0, 1.0]));
//! assert_eq!(b.min_dist_point(&p), 2.0);
//! assert!(b.contains(&Point::new(vec![0.5, 1.0])));
//! ```
//!
//! This crate is `no_std` and uses `alloc`. The optional `kurbo` feature adds
//! `From` conversions for 2-D callers working with `kurbo::Point` and
//! `kurbo::Rect`.
//!
//! [`thicket_index`]: https://docs.rs/thicket_index/

#![no_std]

extern crate alloc;

mod point;
mod rect;
mod shape;

#[cfg(feature = "kurbo")]
mod interop;

pub use point::Point;
pub use rect::Aabb;
pub use shape::Shape;
