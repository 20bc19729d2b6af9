// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory QuadTree: a mutable point quadtree for rectangular range queries.
//!
//! Understory QuadTree answers "which points lie in this rectangle" without scanning every point.
//!
//! - Insert points one at a time or in batches.
//! - Search an axis-aligned rectangle; all edges are inclusive.
//! - Remove points by value (with a small tolerance), in batches, or by rectangle.
//! - Clear back to an empty tree over the same boundary.
//!
//! The tree covers a fixed boundary given at construction, described by its center and full
//! width and height. Each node either is a leaf holding a bucket of points or owns exactly
//! four children (`NE`, `NW`, `SE`, `SW`). Removing a point lets the ancestors of its leaf merge
//! their children back into a single bucket when the combined bucket fits.
//!
//! # Example
//!
//! ```rust
//! use understory_quadtree::{Point, QuadTree, Rectangle};
//!
//! // A 100×100 square around the origin, split at most 4 levels, buckets of 4.
//! let mut tree = QuadTree::new(100.0, 100.0, 4, 4);
//! tree.insert_xy(-10.0, -10.0);
//! tree.insert_xy(10.0, 10.0);
//! tree.insert_xy(-10.0, 10.0);
//! tree.insert_xy(10.0, -10.0);
//!
//! // A 1×1 box around (10, 10).
//! let range = Rectangle::new(10.0, 10.0, 1.0, 1.0);
//! assert_eq!(tree.search(&range), vec![Point::new(10.0, 10.0)]);
//!
//! tree.remove_xy(10.0, 10.0);
//! assert!(tree.search(&range).is_empty());
//!
//! tree.clear();
//! assert!(tree.search(&tree.boundary()).is_empty());
//! ```
//!
//! Kurbo geometry converts directly:
//!
//! ```rust
//! use understory_quadtree::{QuadTree, Rectangle};
//!
//! let mut tree = QuadTree::new(10.0, 10.0, 3, 8);
//! tree.insert(kurbo::Point::new(1.0, 2.0).into());
//! let viewport = Rectangle::from(kurbo::Rect::new(0.0, 0.0, 5.0, 5.0));
//! assert_eq!(tree.search(&viewport).len(), 1);
//! ```
//!
//! ## Subdivision and merging
//!
//! [`QuadTreeConfig::max_depth`] bounds how deep the tree splits, and
//! [`QuadTreeConfig::max_bucket_size`] bounds how many points four sibling leaves may hold and
//! still merge into their parent.
//! Insertion descends into a child whenever the current bucket is below capacity and the depth
//! limit allows it. Freshly split nodes hold no points, so points usually settle in leaves at
//! depth `max_depth + 1`, and the bucket size mainly matters when merging.
//! When a leaf that regained points through a merge splits again, its points are pushed down into
//! the new children, so no point is ever hidden in an interior node.
//!
//! ### Float semantics
//!
//! This crate assumes finite coordinates. Results for NaN or infinite coordinates are
//! unspecified. Debug builds assert that rectangle extents are positive and their centers finite.
//! Point equality is tolerant (see [`EPSILON`]); range containment and quadrant classification
//! are exact.
//!
//! ### Logging
//!
//! Node splits and merges are reported as `tracing` events at `TRACE` level, construction and
//! clearing at `DEBUG` level. Install any `tracing` subscriber to see them.

#![no_std]

extern crate alloc;

pub mod config;
mod node;
pub mod point;
pub mod rect;
pub mod tree;

pub use config::QuadTreeConfig;
pub use point::{EPSILON, Point};
pub use rect::{Quadrant, Rectangle};
pub use tree::QuadTree;
