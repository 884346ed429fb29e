//! Color definitions for widget styles
//!
//! All colors are RGB565, the native format of the embedded-graphics
//! targets the tree renders onto.
//!
//! To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::{Rgb565, Rgb888};

/// Color type used by [`Style`](super::Style) and the
/// [`Canvas`](crate::ui::canvas::Canvas) capability.
pub type Color = Rgb565;

// ============================================================================
// Named Colors
// ============================================================================

pub const BLACK: Color = Rgb565::new(0, 0, 0);

/// Pure white - maximum brightness in RGB565
pub const WHITE: Color = Rgb565::new(31, 63, 31);

pub const RED: Color = Rgb565::new(31, 0, 0);

/// Web "green" (0, 128, 0), not full-intensity lime
pub const GREEN: Color = Rgb565::new(0, 128 >> 2, 0);

pub const BLUE: Color = Rgb565::new(0, 0, 31);

/// Light gray (211, 211, 211) - default widget background
pub const LIGHT_GRAY: Color = Rgb565::new(211 >> 3, 211 >> 2, 211 >> 3);

/// Dark gray - for subtle outlines
pub const DARK_GRAY: Color = Rgb565::new(10, 20, 10);

/// Convert an 8-bit-per-channel triple into the widget color format.
pub fn from_rgb888(rgb: [u8; 3]) -> Color {
    Rgb888::new(rgb[0], rgb[1], rgb[2]).into()
}
