//! Real-valued geometry primitives for the widget tree
//!
//! Controls never store their own position: a [`Rect`] is threaded into
//! every dispatch and paint call, and layouts carve sub-rectangles out of
//! it. All operations here are total over `f64` inputs.

use core::ops::{Add, Sub};

// ============================================================================
// Point
// ============================================================================

/// A location in parent coordinates (cursor position, offsets)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Componentwise maximum of two points.
    pub fn max(self, other: Point) -> Point {
        Point::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Componentwise minimum of two points.
    pub fn min(self, other: Point) -> Point {
        Point::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Reinterpret the point as an extent measured from the origin.
    pub fn to_size(self) -> Size {
        Size::new(self.x, self.y)
    }

    /// Rectangle spanning from this point to `other`.
    pub fn to_rect(self, other: Point) -> Rect {
        Rect::new(self, (other - self).to_size())
    }
}

impl Add<f64> for Point {
    type Output = Point;

    fn add(self, d: f64) -> Point {
        Point::new(self.x + d, self.y + d)
    }
}

impl Sub<f64> for Point {
    type Output = Point;

    fn sub(self, d: f64) -> Point {
        Point::new(self.x - d, self.y - d)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Add<Size> for Point {
    type Output = Point;

    fn add(self, size: Size) -> Point {
        Point::new(self.x + size.width, self.y + size.height)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from(v: (f64, f64)) -> Self {
        Self::new(v.0, v.1)
    }
}

// ============================================================================
// Size
// ============================================================================

/// A width/height extent
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Componentwise maximum (wider of the widths, taller of the heights).
    pub fn max(self, other: Size) -> Size {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Componentwise minimum.
    pub fn min(self, other: Size) -> Size {
        Size::new(self.width.min(other.width), self.height.min(other.height))
    }

    pub fn to_point(self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Rectangle of this size anchored at the origin.
    pub fn to_rect(self) -> Rect {
        Rect::new(Point::ZERO, self)
    }
}

impl Add<f64> for Size {
    type Output = Size;

    fn add(self, d: f64) -> Size {
        Size::new(self.width + d, self.height + d)
    }
}

impl Sub<f64> for Size {
    type Output = Size;

    fn sub(self, d: f64) -> Size {
        Size::new(self.width - d, self.height - d)
    }
}

impl From<(f64, f64)> for Size {
    #[inline]
    fn from(v: (f64, f64)) -> Self {
        Self::new(v.0, v.1)
    }
}

// ============================================================================
// Rect
// ============================================================================

/// An axis-aligned rectangle: top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top_left: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        top_left: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(top_left: Point, size: Size) -> Self {
        Self { top_left, size }
    }

    /// Shorthand for `Rect::new(Point::new(x, y), Size::new(width, height))`.
    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    pub fn left(&self) -> f64 {
        self.top_left.x
    }

    pub fn top(&self) -> f64 {
        self.top_left.y
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    pub fn right(&self) -> f64 {
        self.left() + self.width()
    }

    pub fn bottom(&self) -> f64 {
        self.top() + self.height()
    }

    pub fn mid_x(&self) -> f64 {
        self.left() + self.width() / 2.0
    }

    pub fn mid_y(&self) -> f64 {
        self.top() + self.height() / 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.top())
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.left(), self.bottom())
    }

    pub fn bottom_right(&self) -> Point {
        self.top_left + self.size
    }

    /// Move the top-left corner in by `d` and reduce the size by `d`.
    ///
    /// Mirrors [`Rect::grow`]; callers wanting a uniform inset on every side
    /// use [`Rect::inset`].
    pub fn shrink(&self, d: f64) -> Rect {
        Rect::new(self.top_left + d, self.size - d)
    }

    /// Move the top-left corner out by `d` and enlarge the size by `d`.
    pub fn grow(&self, d: f64) -> Rect {
        Rect::new(self.top_left - d, self.size + d)
    }

    /// Shrink uniformly by `d` on all four sides.
    pub fn inset(&self, d: f64) -> Rect {
        Rect::new(self.top_left + d, self.size - 2.0 * d)
    }

    /// Smallest rectangle covering both `self` and `other`.
    pub fn merge(&self, other: &Rect) -> Rect {
        let tl = self.top_left.min(other.top_left);
        let br = self.bottom_right().max(other.bottom_right());
        tl.to_rect(br)
    }

    /// Half-open containment: the left and top edges are inside, the right
    /// and bottom edges are not.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }
}
