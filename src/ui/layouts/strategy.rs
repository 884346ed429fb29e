//! Rectangle splitting strategies
//!
//! A strategy maps `(rect, index, count)` to the sub-rectangle of child
//! `index` out of `count`. Callers never pass `count == 0`: a layout with
//! no children has nothing to place.

use crate::geometry::{Point, Rect, Size};

/// Partitions a rectangle among a layout's children.
pub type SplitStrategy = fn(Rect, usize, usize) -> Rect;

/// Side-by-side columns of equal width, left to right.
pub fn split_horizontally(rect: Rect, index: usize, count: usize) -> Rect {
    let width = rect.width() / count as f64;
    Rect::new(
        Point::new(rect.left() + width * index as f64, rect.top()),
        Size::new(width, rect.height()),
    )
}

/// Stacked rows of equal height, top to bottom.
pub fn split_vertically(rect: Rect, index: usize, count: usize) -> Rect {
    let height = rect.height() / count as f64;
    Rect::new(
        Point::new(rect.left(), rect.top() + height * index as f64),
        Size::new(rect.width(), height),
    )
}
