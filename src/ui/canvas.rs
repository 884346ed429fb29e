//! Drawing surface capability used by control painting
//!
//! Painting is expressed as `canvas -> canvas`: every paint behavior takes a
//! `&mut dyn Canvas`, draws, and hands the same reference back so the next
//! control in the traversal can continue on it. [`GraphicsCanvas`] adapts
//! any embedded-graphics `DrawTarget` to this trait.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Point as PixelPoint, Size as PixelSize};
use embedded_graphics::mono_font::ascii::{FONT_5X8, FONT_6X10, FONT_10X20};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::primitives::{
    Ellipse, Line, Primitive, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment,
};
use embedded_graphics::text::{Baseline, Text};
use log::warn;

use crate::geometry::{Point, Rect, Size};
use crate::ui::styling::Color;

// ---------------------------------------------------------------------------
// Canvas trait
// ---------------------------------------------------------------------------

/// Drawing operations the widget tree needs from a backend.
///
/// Calls arrive in paint order: a layout's background and border first,
/// then its children in index order. Implementations must not reorder them.
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke the outline of `rect`, `pen_width` wide, inside its bounds.
    fn draw_rect(&mut self, rect: Rect, color: Color, pen_width: f64);

    fn draw_line(&mut self, from: Point, to: Point, color: Color);

    /// Fill the ellipse inscribed in `bounds`.
    fn fill_ellipse(&mut self, bounds: Rect, color: Color);

    /// Size of the box `text` occupies in the current font.
    fn measure_text(&self, text: &str) -> Size;

    fn draw_text(&mut self, text: &str, top_left: Point, color: Color);

    /// Choose the font for subsequent text. Backends with a fixed font
    /// ignore this.
    fn select_font(&mut self, _name: &str, _size: u32) {}

    /// Draw `text` with its measured box centered on `rect`.
    fn draw_centered_text(&mut self, color: Color, rect: Rect, text: &str) {
        let size = self.measure_text(text);
        let origin = Point::new(
            rect.mid_x() - size.width / 2.0,
            rect.mid_y() - size.height / 2.0,
        );
        self.draw_text(text, origin, color);
    }
}

// ---------------------------------------------------------------------------
// embedded-graphics backend
// ---------------------------------------------------------------------------

/// [`Canvas`] rendering onto an embedded-graphics `DrawTarget`.
///
/// Real coordinates are truncated to whole pixels. The `Canvas` trait is
/// infallible, so the first error reported by the target is kept and
/// returned from [`GraphicsCanvas::finish`]; later draws still run.
pub struct GraphicsCanvas<'d, D>
where
    D: DrawTarget<Color = Color>,
{
    target: &'d mut D,
    font: &'static MonoFont<'static>,
    error: Option<D::Error>,
}

impl<'d, D> GraphicsCanvas<'d, D>
where
    D: DrawTarget<Color = Color>,
{
    /// Wrap `target`, starting with the medium (6x10) font.
    pub fn new(target: &'d mut D) -> Self {
        Self {
            target,
            font: &FONT_6X10,
            error: None,
        }
    }

    /// Release the target, reporting the first draw error if any occurred.
    pub fn finish(self) -> Result<(), D::Error> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn record<T>(&mut self, result: Result<T, D::Error>) {
        if let Err(e) = result
            && self.error.is_none()
        {
            warn!("Draw target rejected a primitive; further errors suppressed");
            self.error = Some(e);
        }
    }
}

/// Mono font closest to a point size.
fn font_for_size(size: u32) -> &'static MonoFont<'static> {
    match size {
        0..=9 => &FONT_5X8,
        10..=14 => &FONT_6X10,
        _ => &FONT_10X20,
    }
}

fn to_pixel(p: Point) -> PixelPoint {
    PixelPoint::new(p.x as i32, p.y as i32)
}

fn to_rectangle(rect: Rect) -> Rectangle {
    // `as u32` saturates negative extents to zero
    Rectangle::new(
        to_pixel(rect.top_left),
        PixelSize::new(rect.width() as u32, rect.height() as u32),
    )
}

impl<D> Canvas for GraphicsCanvas<'_, D>
where
    D: DrawTarget<Color = Color>,
{
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let result = to_rectangle(rect)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut *self.target);
        self.record(result);
    }

    fn draw_rect(&mut self, rect: Rect, color: Color, pen_width: f64) {
        let style = PrimitiveStyleBuilder::new()
            .stroke_color(color)
            .stroke_width((pen_width as u32).max(1))
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        let result = to_rectangle(rect)
            .into_styled(style)
            .draw(&mut *self.target);
        self.record(result);
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        let result = Line::new(to_pixel(from), to_pixel(to))
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(&mut *self.target);
        self.record(result);
    }

    fn fill_ellipse(&mut self, bounds: Rect, color: Color) {
        let bounds = to_rectangle(bounds);
        let result = Ellipse::new(bounds.top_left, bounds.size)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut *self.target);
        self.record(result);
    }

    fn measure_text(&self, text: &str) -> Size {
        let glyphs = text.chars().count() as u32;
        let advance = self.font.character_size.width + self.font.character_spacing;
        let width = (glyphs * advance).saturating_sub(self.font.character_spacing);
        Size::new(width as f64, self.font.character_size.height as f64)
    }

    fn draw_text(&mut self, text: &str, top_left: Point, color: Color) {
        let style = MonoTextStyle::new(self.font, color);
        let result = Text::with_baseline(text, to_pixel(top_left), style, Baseline::Top)
            .draw(&mut *self.target);
        self.record(result);
    }

    fn select_font(&mut self, _name: &str, size: u32) {
        self.font = font_for_size(size);
    }
}

// ---------------------------------------------------------------------------
// Test double
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod testing {
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    use super::*;

    /// Width of one glyph in the recording canvas's imaginary font.
    pub const GLYPH_WIDTH: f64 = 6.0;
    pub const GLYPH_HEIGHT: f64 = 10.0;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        FillRect(Rect, Color),
        DrawRect(Rect, Color, f64),
        Line(Point, Point, Color),
        Ellipse(Rect, Color),
        Text(String, Point, Color),
    }

    /// Canvas that records every call in order.
    #[derive(Debug, Default)]
    pub struct RecordingCanvas {
        pub ops: Vec<Op>,
    }

    impl RecordingCanvas {
        pub fn new() -> Self {
            Self::default()
        }

        /// Every text drawn, in order.
        pub fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text(s, _, _) => Some(s.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Canvas for RecordingCanvas {
        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.ops.push(Op::FillRect(rect, color));
        }

        fn draw_rect(&mut self, rect: Rect, color: Color, pen_width: f64) {
            self.ops.push(Op::DrawRect(rect, color, pen_width));
        }

        fn draw_line(&mut self, from: Point, to: Point, color: Color) {
            self.ops.push(Op::Line(from, to, color));
        }

        fn fill_ellipse(&mut self, bounds: Rect, color: Color) {
            self.ops.push(Op::Ellipse(bounds, color));
        }

        fn measure_text(&self, text: &str) -> Size {
            Size::new(text.chars().count() as f64 * GLYPH_WIDTH, GLYPH_HEIGHT)
        }

        fn draw_text(&mut self, text: &str, top_left: Point, color: Color) {
            self.ops.push(Op::Text(text.to_string(), top_left, color));
        }
    }
}
