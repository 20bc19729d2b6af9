// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `QuadTree` container.

use alloc::vec::Vec;

use crate::config::QuadTreeConfig;
use crate::node::Node;
use crate::point::Point;
use crate::rect::Rectangle;

/// A mutable point quadtree over a fixed rectangular boundary.
///
/// Every operation is a recursive traversal from the root. Points outside the boundary are
/// ignored: `insert` and `remove` return `false` for them and `search` never reports them.
#[derive(Clone)]
pub struct QuadTree {
    root: Node,
    config: QuadTreeConfig,
    len: usize,
}

impl core::fmt::Debug for QuadTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("boundary", &self.root.boundary)
            .field("config", &self.config)
            .field("len", &self.len)
            .field("root_is_leaf", &self.root.is_leaf())
            .finish_non_exhaustive()
    }
}

impl QuadTree {
    /// Create a tree centered at the origin.
    pub fn new(width: f64, height: f64, max_depth: usize, max_bucket_size: usize) -> Self {
        Self::with_center(0.0, 0.0, width, height, max_depth, max_bucket_size)
    }

    /// Create a tree over the rectangle centered at `(cx, cy)`.
    pub fn with_center(
        cx: f64,
        cy: f64,
        width: f64,
        height: f64,
        max_depth: usize,
        max_bucket_size: usize,
    ) -> Self {
        Self::with_config(
            Rectangle::new(cx, cy, width, height),
            QuadTreeConfig {
                max_depth,
                max_bucket_size,
            },
        )
    }

    /// Create a tree over `boundary` with explicit limits.
    pub fn with_config(boundary: Rectangle, config: QuadTreeConfig) -> Self {
        tracing::debug!(
            x = boundary.center.x,
            y = boundary.center.y,
            width = boundary.width,
            height = boundary.height,
            max_depth = config.max_depth,
            max_bucket_size = config.max_bucket_size,
            "created quadtree"
        );
        Self {
            root: Node::new(boundary, 0),
            config,
            len: 0,
        }
    }

    /// The root boundary. It never changes, not even on [`clear`](Self::clear).
    pub fn boundary(&self) -> Rectangle {
        self.root.boundary
    }

    /// The limits this tree was built with.
    pub fn config(&self) -> QuadTreeConfig {
        self.config
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no points.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a point. Returns `false` (and stores nothing) if it lies outside the boundary.
    ///
    /// Duplicates are kept: inserting the same point twice stores it twice.
    pub fn insert(&mut self, point: Point) -> bool {
        let inserted = self.root.insert(point, &self.config);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Insert the point `(x, y)`.
    pub fn insert_xy(&mut self, x: f64, y: f64) -> bool {
        self.insert(Point::new(x, y))
    }

    /// Insert points one at a time, in order. Returns how many were stored.
    pub fn insert_all<I: IntoIterator<Item = Point>>(&mut self, points: I) -> usize {
        points.into_iter().filter(|p| self.insert(*p)).count()
    }

    /// Collect every stored point inside `range` (edges inclusive).
    ///
    /// Results come in depth-first `NE, NW, SE, SW` order, then bucket order within a leaf.
    pub fn search(&self, range: &Rectangle) -> Vec<Point> {
        let mut out = Vec::new();
        self.root.search(range, &mut out);
        out
    }

    /// Like [`search`](Self::search), but appends to a caller-provided vector.
    ///
    /// `out` is not cleared first, so one buffer can be reused across queries.
    pub fn search_into(&self, range: &Rectangle, out: &mut Vec<Point>) {
        self.root.search(range, out);
    }

    /// Remove one stored point equal to `point` (within [`EPSILON`](crate::EPSILON)).
    ///
    /// Returns `false` if nothing matched. After a removal the ancestors of the affected leaf
    /// try to merge their children back into a single bucket.
    pub fn remove(&mut self, point: Point) -> bool {
        let removed = self.root.remove(point, &self.config);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Remove the point `(x, y)`.
    pub fn remove_xy(&mut self, x: f64, y: f64) -> bool {
        self.remove(Point::new(x, y))
    }

    /// Remove points one at a time, in order. Returns how many were removed.
    pub fn remove_all<I: IntoIterator<Item = Point>>(&mut self, points: I) -> usize {
        points.into_iter().filter(|p| self.remove(*p)).count()
    }

    /// Remove every point inside `range`. Returns how many were removed.
    ///
    /// This is a [`search`](Self::search) followed by one [`remove`](Self::remove) per hit,
    /// not a single pass.
    pub fn remove_range(&mut self, range: &Rectangle) -> usize {
        let hits = self.search(range);
        self.remove_all(hits)
    }

    /// Drop every point and node, keeping the same boundary and limits.
    pub fn clear(&mut self) {
        tracing::debug!(dropped = self.len, "cleared quadtree");
        self.root = Node::new(self.root.boundary, 0);
        self.len = 0;
    }

    /// Every stored point, depth-first in `NE, NW, SE, SW` order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        let mut out = Vec::with_capacity(self.len);
        self.root.collect(&mut out);
        out.into_iter()
    }
}

impl Extend<Point> for QuadTree {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}
