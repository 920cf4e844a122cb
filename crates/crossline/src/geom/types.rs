//! Point, rectangle and orientation types shared by the engine.

use nalgebra::Vector2;

/// Integer screen-space point (x grows right, y grows down).
pub type Point = Vector2<i64>;

/// Orientation of an ordered point triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Colinear,
    Clockwise,
    CounterClockwise,
}

/// Axis-aligned rectangle given by its top-left corner and size.
///
/// `right()`/`bottom()` are the first coordinates past the rectangle, so
/// `contains` is half-open like a pixel grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub left: i64,
    pub top: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    #[inline]
    pub fn new(left: i64, top: i64, width: i64, height: i64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Shrink by `margin` on every side.
    #[inline]
    pub fn inset(&self, margin: i64) -> Self {
        Self {
            left: self.left + margin,
            top: self.top + margin,
            width: self.width - 2 * margin,
            height: self.height - 2 * margin,
        }
    }

    #[inline]
    pub fn right(&self) -> i64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> i64 {
        self.top + self.height
    }

    /// Integer center (floor division, matching a pixel grid).
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            self.left + self.width.div_euclid(2),
            self.top + self.height.div_euclid(2),
        )
    }

    #[inline]
    pub fn min_side(&self) -> i64 {
        self.width.min(self.height)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.left <= p.x && p.x < self.right() && self.top <= p.y && p.y < self.bottom()
    }
}
