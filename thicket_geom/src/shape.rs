// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed union over points and boxes.

use crate::point::Point;
use crate::rect::Aabb;

/// Either a point or an axis-aligned box.
///
/// Query origins and query results are shapes: a tree built from points
/// reports points, a tree built from boxes reports boxes, and radius queries
/// accept either as the origin.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// A single point.
    Point(Point),
    /// An axis-aligned box.
    Rect(Aabb),
}

impl Shape {
    /// The dimension of this shape.
    pub fn dim(&self) -> usize {
        match self {
            Shape::Point(p) => p.dim(),
            Shape::Rect(r) => r.dim(),
        }
    }

    /// The point, if this shape is one.
    pub fn as_point(&self) -> Option<&Point> {
        match self {
            Shape::Point(p) => Some(p),
            Shape::Rect(_) => None,
        }
    }

    /// The box, if this shape is one.
    pub fn as_rect(&self) -> Option<&Aabb> {
        match self {
            Shape::Point(_) => None,
            Shape::Rect(r) => Some(r),
        }
    }

    /// Minimum Euclidean distance from this shape to a point.
    pub fn min_dist_point(&self, p: &Point) -> f64 {
        match self {
            Shape::Point(q) => q.dist(p),
            Shape::Rect(r) => r.min_dist_point(p),
        }
    }

    /// Minimum Euclidean distance from this shape to a box.
    pub fn min_dist_rect(&self, rect: &Aabb) -> f64 {
        match self {
            Shape::Point(q) => rect.min_dist_point(q),
            Shape::Rect(r) => r.min_dist_rect(rect),
        }
    }

    /// Minimum Euclidean distance between two shapes. Zero when they touch.
    pub fn min_dist(&self, other: &Shape) -> f64 {
        match other {
            Shape::Point(p) => self.min_dist_point(p),
            Shape::Rect(r) => self.min_dist_rect(r),
        }
    }

    /// Whether two shapes touch or overlap.
    pub fn intersects(&self, other: &Shape) -> bool {
        match (self, other) {
            (Shape::Point(a), Shape::Point(b)) => a == b,
            (Shape::Point(p), Shape::Rect(r)) | (Shape::Rect(r), Shape::Point(p)) => r.contains(p),
            (Shape::Rect(a), Shape::Rect(b)) => a.intersects(b),
        }
    }
}

impl From<Point> for Shape {
    fn from(p: Point) -> Self {
        Shape::Point(p)
    }
}

impl From<Aabb> for Shape {
    fn from(r: Aabb) -> Self {
        Shape::Rect(r)
    }
}
