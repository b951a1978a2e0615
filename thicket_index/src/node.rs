// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node and entry model for the packed tree.

use alloc::vec::Vec;

use thicket_geom::{Aabb, Point};

/// A leaf entry holding a point and its payload.
#[derive(Clone, Debug)]
pub(crate) struct PointEntry<P> {
    pub(crate) point: Point,
    pub(crate) payload: P,
}

/// A leaf entry holding a box, its payload, and the number of underlying
/// items the box aggregates.
///
/// The aggregate count feeds the weighted nearest-neighbor variants, where
/// one reported box stands in for `count` original items.
#[derive(Clone, Debug)]
pub(crate) struct RectEntry<P> {
    pub(crate) aabb: Aabb,
    pub(crate) payload: P,
    pub(crate) count: u64,
}

/// The three node shapes. Leaves hold entries of a single kind; internal
/// nodes own their subtrees outright.
pub(crate) enum Kind<P> {
    PointLeaf(Vec<PointEntry<P>>),
    RectLeaf(Vec<RectEntry<P>>),
    Internal(Vec<Node<P>>),
}

/// A tree node: a covering box plus a child array.
pub struct Node<P> {
    pub(crate) aabb: Aabb,
    pub(crate) kind: Kind<P>,
}

impl<P> Node<P> {
    /// The tight box covering everything below this node.
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// True when the children are entries rather than subtrees.
    pub fn is_leaf(&self) -> bool {
        !matches!(self.kind, Kind::Internal(_))
    }

    /// Number of direct children (entries or subtrees).
    pub fn child_count(&self) -> usize {
        match &self.kind {
            Kind::PointLeaf(entries) => entries.len(),
            Kind::RectLeaf(entries) => entries.len(),
            Kind::Internal(children) => children.len(),
        }
    }
}
