// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subdivision limits fixed at construction.

/// Limits controlling how a [`QuadTree`](crate::QuadTree) subdivides and collapses.
///
/// Both values are fixed for the lifetime of the tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct QuadTreeConfig {
    /// Deepest level (root = 0) that may still be split.
    ///
    /// Insertion keeps descending while a node's depth is `<= max_depth`, so points end up in
    /// leaves at depth `max_depth + 1`.
    pub max_depth: usize,
    /// Point-count threshold for a bucket.
    ///
    /// Insertion only stores a point directly in a node whose bucket already holds this many
    /// points. In practice this is reached only after a merge, which is where the threshold
    /// matters: four leaf siblings collapse into their parent only if their combined bucket
    /// size does not exceed it.
    pub max_bucket_size: usize,
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self {
            max_depth: 8,
            max_bucket_size: 16,
        }
    }
}
