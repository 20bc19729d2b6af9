// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree nodes: recursive insert/search/remove, split and merge.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::config::QuadTreeConfig;
use crate::point::Point;
use crate::rect::{Quadrant, Rectangle};

/// A node owns its boundary, its bucket, and either no children or all four.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) boundary: Rectangle,
    /// Children in `Quadrant` order (NE, NW, SE, SW).
    pub(crate) children: Option<Box<[Self; 4]>>,
    pub(crate) bucket: Vec<Point>,
    pub(crate) depth: usize,
}

impl Node {
    pub(crate) fn new(boundary: Rectangle, depth: usize) -> Self {
        Self {
            boundary,
            children: None,
            bucket: Vec::new(),
            depth,
        }
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Insert `point` below this node. Returns `false` if the boundary rejects it.
    ///
    /// While the bucket is under capacity and the depth limit allows it, the point is always
    /// pushed into a child, splitting this node first if needed. Since split buckets are
    /// emptied, insertion descends to `max_depth + 1` and buckets only fill there (or at
    /// leaves produced by a merge).
    pub(crate) fn insert(&mut self, point: Point, config: &QuadTreeConfig) -> bool {
        if !self.boundary.contains(point) {
            return false;
        }
        if self.bucket.len() < config.max_bucket_size && self.depth <= config.max_depth {
            let quadrant = self.boundary.quadrant(point);
            let children: &mut [Self; 4] = match self.children {
                Some(ref mut children) => children,
                None => self.split(config),
            };
            children[quadrant.index()].insert(point, config)
        } else {
            self.bucket.push(point);
            true
        }
    }

    /// Turn this leaf into an interior node with four empty children.
    ///
    /// Points already in the bucket are pushed down into the children so that they remain
    /// reachable by search and remove, which never look at an interior bucket.
    fn split(&mut self, config: &QuadTreeConfig) -> &mut [Self; 4] {
        debug_assert!(self.is_leaf(), "only leaves can be split");
        tracing::trace!(
            depth = self.depth,
            x = self.boundary.center.x,
            y = self.boundary.center.y,
            carried = self.bucket.len(),
            "split quadtree node"
        );
        let depth = self.depth + 1;
        let mut children =
            Box::new(Quadrant::ALL.map(|q| Self::new(self.boundary.quarter(q), depth)));
        for point in self.bucket.drain(..) {
            let child = &mut children[self.boundary.quadrant(point).index()];
            if !child.insert(point, config) {
                // The quarter's rounded edge missed a point the parent held; keep it resident.
                child.bucket.push(point);
            }
        }
        self.children.insert(children)
    }

    /// Collapse four leaf children back into this node if their buckets fit.
    ///
    /// Returns `true` if the node became a leaf.
    pub(crate) fn try_merge(&mut self, max_bucket_size: usize) -> bool {
        let Some(children) = self.children.as_deref() else {
            return false;
        };
        if !children.iter().all(Self::is_leaf) {
            return false;
        }
        let total: usize = children.iter().map(|c| c.bucket.len()).sum();
        if total > max_bucket_size {
            return false;
        }
        if let Some(children) = self.children.take() {
            self.bucket.reserve(total);
            for child in *children {
                self.bucket.extend(child.bucket);
            }
        }
        tracing::trace!(depth = self.depth, merged = total, "merged quadtree node");
        true
    }

    /// Append every point inside `range` to `out`.
    ///
    /// Only leaf buckets are scanned.
    pub(crate) fn search(&self, range: &Rectangle, out: &mut Vec<Point>) {
        if !self.boundary.overlaps(range) {
            return;
        }
        match self.children.as_deref() {
            None => out.extend(self.bucket.iter().copied().filter(|p| range.contains(*p))),
            Some(children) => {
                for child in children {
                    child.search(range, out);
                }
            }
        }
    }

    /// Erase the first stored point equal to `point`, merging on the way back up.
    pub(crate) fn remove(&mut self, point: Point, config: &QuadTreeConfig) -> bool {
        if !self.boundary.contains(point) {
            return false;
        }
        let quadrant = self.boundary.quadrant(point);
        let Some(children) = self.children.as_deref_mut() else {
            return match self.bucket.iter().position(|p| *p == point) {
                Some(i) => {
                    self.bucket.remove(i);
                    true
                }
                None => false,
            };
        };
        let removed = children[quadrant.index()].remove(point, config);
        if removed {
            // A refused merge just leaves the subtree split.
            let _ = self.try_merge(config.max_bucket_size);
        }
        removed
    }

    /// Append every point in this subtree, depth-first in child order.
    pub(crate) fn collect(&self, out: &mut Vec<Point>) {
        out.extend_from_slice(&self.bucket);
        if let Some(children) = self.children.as_deref() {
            for child in children {
                child.collect(out);
            }
        }
    }
}
