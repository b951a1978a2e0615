// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions from kurbo's 2-D types, behind the `kurbo` feature.

use alloc::vec;

use crate::point::Point;
use crate::rect::Aabb;

impl From<kurbo::Point> for Point {
    fn from(p: kurbo::Point) -> Self {
        Point::new(vec![p.x, p.y])
    }
}

impl From<kurbo::Rect> for Aabb {
    fn from(r: kurbo::Rect) -> Self {
        let r = r.abs();
        Aabb::new(Point::new(vec![r.x0, r.y0]), Point::new(vec![r.x1, r.y1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_conversion_normalizes() {
        let a: Aabb = kurbo::Rect::new(10.0, 10.0, 0.0, 0.0).into();
        assert_eq!(a.low().coords(), &[0.0, 0.0]);
        assert_eq!(a.high().coords(), &[10.0, 10.0]);
    }

    #[test]
    fn point_conversion() {
        let p: Point = kurbo::Point::new(1.0, 2.0).into();
        assert_eq!(p.coords(), &[1.0, 2.0]);
    }
}
