// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sort-Tile-Recursive bulk loading.
//!
//! STR note
//! --------
//! Each level packs `n` items into `ceil(n / max_children)` nodes. A slab
//! count per axis is derived from the recurrence
//!
//! `s[i] = ceil(remaining^(1 / (dims - i)))`, `remaining /= s[i]`
//!
//! starting from `remaining = n / max_children`, so the product of the slab
//! counts approximates the node target while spreading the cuts across all
//! axes. Items are then sorted along axis 0, cut into `s[0]` contiguous
//! slabs, each slab sorted along axis 1 and cut into `s[1]` slabs, and so on;
//! the chunks left after the last axis are the node groups. Upper levels
//! repeat the procedure on the freshly built nodes (ordered by box centers)
//! until every slab count reaches 1, and whatever remains is wrapped in the
//! root. The root alone may exceed `max_children`.

use alloc::vec::Vec;

use thicket_geom::{Aabb, Point};

use crate::node::{Kind, Node, PointEntry, RectEntry};

pub(crate) fn pack_points<P>(entries: Vec<(Point, P)>, max_children: usize) -> Node<P> {
    assert!(max_children >= 2, "max_children must be at least 2");
    assert!(!entries.is_empty(), "cannot build an index over zero entries");
    let dims = entries[0].0.dim();
    let entries: Vec<PointEntry<P>> = entries
        .into_iter()
        .map(|(point, payload)| {
            assert_eq!(point.dim(), dims, "mixed entry dimensions");
            PointEntry { point, payload }
        })
        .collect();

    let slabs = slab_counts(entries.len(), max_children, dims);
    let mut groups = Vec::new();
    slice_groups(
        entries,
        &slabs,
        0,
        &|e: &PointEntry<P>, axis| e.point.get(axis),
        &mut groups,
    );
    let leaves: Vec<Node<P>> = groups.into_iter().map(point_leaf).collect();
    pack_upper(leaves, max_children, dims)
}

pub(crate) fn pack_rects<P>(entries: Vec<(Aabb, P, u64)>, max_children: usize) -> Node<P> {
    assert!(max_children >= 2, "max_children must be at least 2");
    assert!(!entries.is_empty(), "cannot build an index over zero entries");
    let dims = entries[0].0.dim();
    let entries: Vec<RectEntry<P>> = entries
        .into_iter()
        .map(|(aabb, payload, count)| {
            assert_eq!(aabb.dim(), dims, "mixed entry dimensions");
            RectEntry {
                aabb,
                payload,
                count,
            }
        })
        .collect();

    let slabs = slab_counts(entries.len(), max_children, dims);
    let mut groups = Vec::new();
    slice_groups(
        entries,
        &slabs,
        0,
        &|e: &RectEntry<P>, axis| e.aabb.center(axis),
        &mut groups,
    );
    let leaves: Vec<Node<P>> = groups.into_iter().map(rect_leaf).collect();
    pack_upper(leaves, max_children, dims)
}

/// Repeat the packing procedure on whole nodes until a level fits in one
/// parent, then wrap it. A lone remaining node becomes the root as-is.
fn pack_upper<P>(mut nodes: Vec<Node<P>>, max_children: usize, dims: usize) -> Node<P> {
    loop {
        let slabs = slab_counts(nodes.len(), max_children, dims);
        if slabs.iter().all(|&s| s == 1) {
            break;
        }
        let mut groups = Vec::new();
        slice_groups(
            nodes,
            &slabs,
            0,
            &|n: &Node<P>, axis| n.aabb.center(axis),
            &mut groups,
        );
        nodes = groups.into_iter().map(internal_node).collect();
    }
    if nodes.len() == 1 {
        nodes.pop().expect("level cannot be empty")
    } else {
        internal_node(nodes)
    }
}

/// Per-axis slab counts whose product approximates `len / max_children`.
fn slab_counts(len: usize, max_children: usize, dims: usize) -> Vec<usize> {
    let mut remaining = len as f64 / max_children as f64;
    let mut slabs = Vec::with_capacity(dims);
    for axis in 0..dims {
        let root = 1.0 / (dims - axis) as f64;
        let s = libm::ceil(libm::pow(remaining, root)).max(1.0) as usize;
        slabs.push(s);
        remaining /= s as f64;
    }
    slabs
}

/// Sort along `axis`, cut into `slabs[axis]` contiguous chunks, and recurse
/// per chunk into the next axis. Chunks surviving the last axis are emitted.
fn slice_groups<T>(
    mut items: Vec<T>,
    slabs: &[usize],
    axis: usize,
    key: &impl Fn(&T, usize) -> f64,
    out: &mut Vec<Vec<T>>,
) {
    if items.is_empty() {
        return;
    }
    items.sort_by(|a, b| key(a, axis).total_cmp(&key(b, axis)));
    let per_slab = items.len().div_ceil(slabs[axis]);
    let mut it = items.into_iter();
    loop {
        let chunk: Vec<T> = it.by_ref().take(per_slab).collect();
        if chunk.is_empty() {
            break;
        }
        if axis + 1 == slabs.len() {
            out.push(chunk);
        } else {
            slice_groups(chunk, slabs, axis + 1, key, out);
        }
    }
}

fn point_leaf<P>(entries: Vec<PointEntry<P>>) -> Node<P> {
    let mut aabb = Aabb::from_point(&entries[0].point);
    for e in &entries[1..] {
        aabb = aabb.union(&Aabb::from_point(&e.point));
    }
    Node {
        aabb,
        kind: Kind::PointLeaf(entries),
    }
}

fn rect_leaf<P>(entries: Vec<RectEntry<P>>) -> Node<P> {
    let mut aabb = entries[0].aabb.clone();
    for e in &entries[1..] {
        aabb = aabb.union(&e.aabb);
    }
    Node {
        aabb,
        kind: Kind::RectLeaf(entries),
    }
}

fn internal_node<P>(children: Vec<Node<P>>) -> Node<P> {
    let mut aabb = children[0].aabb.clone();
    for c in &children[1..] {
        aabb = aabb.union(&c.aabb);
    }
    Node {
        aabb,
        kind: Kind::Internal(children),
    }
}
