// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Center-based rectangles and quadrant classification.

use crate::point::Point;

/// One of the four sub-regions of a [`Rectangle`], split at its center.
///
/// The discriminant order (`NE`, `NW`, `SE`, `SW`) is also the order in which a node stores
/// its children and in which searches visit them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Right and top (`x >= center.x`, `y >= center.y`).
    NE = 0,
    /// Left and top.
    NW = 1,
    /// Right and bottom.
    SE = 2,
    /// Left and bottom.
    SW = 3,
}

impl Quadrant {
    /// All quadrants in child order.
    pub const ALL: [Self; 4] = [Self::NE, Self::NW, Self::SE, Self::SW];

    /// Child slot for this quadrant.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    const fn from_sides(right: bool, top: bool) -> Self {
        match (right, top) {
            (true, true) => Self::NE,
            (false, true) => Self::NW,
            (true, false) => Self::SE,
            (false, false) => Self::SW,
        }
    }
}

/// Axis-aligned rectangle described by its center and full extents.
///
/// `y` grows upwards: the "top" edge is `center.y + height / 2`.
/// Width and height must be strictly positive; debug builds assert this, and that the
/// center is finite.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rectangle {
    /// Center of the rectangle.
    pub center: Point,
    /// Full width (not a half-extent).
    pub width: f64,
    /// Full height (not a half-extent).
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle from center coordinates and full width/height.
    pub fn new(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self::from_center(Point::new(cx, cy), width, height)
    }

    /// Create a rectangle from a center point and full width/height.
    pub fn from_center(center: Point, width: f64, height: f64) -> Self {
        debug_assert!(center.is_finite(), "rectangle center must be finite");
        debug_assert!(
            width > 0.0 && height > 0.0,
            "rectangle extents must be positive, got {width}x{height}"
        );
        Self {
            center,
            width,
            height,
        }
    }

    /// Half of [`width`](Self::width).
    #[inline]
    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    /// Half of [`height`](Self::height).
    #[inline]
    pub fn half_height(&self) -> f64 {
        self.height / 2.0
    }

    /// Corner with minimum x and maximum y.
    pub fn top_left(&self) -> Point {
        Point::new(
            self.center.x - self.half_width(),
            self.center.y + self.half_height(),
        )
    }

    /// Corner with maximum x and minimum y.
    pub fn bottom_right(&self) -> Point {
        Point::new(
            self.center.x + self.half_width(),
            self.center.y - self.half_height(),
        )
    }

    /// Whether the point lies inside the rectangle. All four edges are inclusive.
    pub fn contains(&self, point: Point) -> bool {
        let (hw, hh) = (self.half_width(), self.half_height());
        point.x >= self.center.x - hw
            && point.x <= self.center.x + hw
            && point.y >= self.center.y - hh
            && point.y <= self.center.y + hh
    }

    /// Quadrant of `point` relative to this rectangle's center.
    ///
    /// Points on the vertical center line go right and points on the horizontal center line
    /// go up, so the center itself is [`Quadrant::NE`].
    pub fn quadrant(&self, point: Point) -> Quadrant {
        Quadrant::from_sides(point.x >= self.center.x, point.y >= self.center.y)
    }

    /// Quadrant of a nested rectangle, classified by its center.
    pub fn quadrant_of(&self, other: &Self) -> Quadrant {
        self.quadrant(other.center)
    }

    /// Whether the two rectangles share any area or edge.
    ///
    /// Rectangles that only touch along an edge or at a corner count as overlapping.
    pub fn overlaps(&self, other: &Self) -> bool {
        let (tl, br) = (self.top_left(), self.bottom_right());
        let (otl, obr) = (other.top_left(), other.bottom_right());
        !(otl.x > br.x || obr.x < tl.x || otl.y < br.y || obr.y > tl.y)
    }

    /// The sub-rectangle covering `quadrant`: half the extents, centered a quarter of the
    /// extents away from this center.
    pub fn quarter(&self, quadrant: Quadrant) -> Self {
        let (hw, hh) = (self.half_width(), self.half_height());
        let (qw, qh) = (hw / 2.0, hh / 2.0);
        let (dx, dy) = match quadrant {
            Quadrant::NE => (qw, qh),
            Quadrant::NW => (-qw, qh),
            Quadrant::SE => (qw, -qh),
            Quadrant::SW => (-qw, -qh),
        };
        Self::new(self.center.x + dx, self.center.y + dy, hw, hh)
    }
}

impl From<kurbo::Rect> for Rectangle {
    fn from(rect: kurbo::Rect) -> Self {
        let rect = rect.abs();
        Self::from_center(rect.center().into(), rect.width(), rect.height())
    }
}

impl From<Rectangle> for kurbo::Rect {
    fn from(rect: Rectangle) -> Self {
        Self::from_center_size(
            kurbo::Point::from(rect.center),
            (rect.width, rect.height),
        )
    }
}
