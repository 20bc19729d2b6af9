// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point keys stored in the tree.

use core::cmp::Ordering;
use core::fmt;

/// Tolerance used when comparing two [`Point`]s.
///
/// Two points are equal when both `|a.x - b.x|` and `|a.y - b.y|` are strictly below this
/// value. The same tolerance is used by [`QuadTree::remove`](crate::QuadTree::remove) to find
/// the stored point to erase, so equality and removal never disagree.
pub const EPSILON: f64 = 1e-9;

/// A 2D coordinate.
///
/// ## Equality
///
/// `PartialEq` is tolerance-based (see [`EPSILON`]), not exact floating equality.
/// This relation is not transitive: `a == b` and `b == c` do not imply `a == c` when the
/// differences add up past the tolerance. For that reason `Point` implements neither `Eq`
/// nor `Hash`.
///
/// ## Ordering
///
/// `PartialOrd` is lexicographic by `x`, then `y`. Points that are equal under the tolerance
/// compare as [`Ordering::Equal`]. The order is only meant for deterministic sorting of
/// query results; the tree itself never uses it.
#[derive(Copy, Clone, Debug, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate (grows towards the top, "north").
    pub y: f64,
}

impl Point {
    /// The origin, `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite (neither NaN nor infinite).
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[inline]
fn within_epsilon(a: f64, b: f64) -> bool {
    let d = a - b;
    d < EPSILON && d > -EPSILON
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        within_epsilon(self.x, other.x) && within_epsilon(self.y, other.y)
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match self.x.partial_cmp(&other.x)? {
            Ordering::Equal => self.y.partial_cmp(&other.y),
            ord => Some(ord),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<kurbo::Point> for Point {
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for kurbo::Point {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}
