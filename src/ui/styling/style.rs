//! Style configuration for widgets
//!
//! Provides the immutable [`Style`] record. Every `with_*` method consumes
//! the style and returns a new one with a single field replaced; there is
//! no other way to change a style.

use super::colors::{BLACK, BLUE, Color, GREEN, LIGHT_GRAY};

/// Capacity of [`Style::font_name`] in bytes.
pub const FONT_NAME_CAPACITY: usize = 32;

/// Bounded font family name.
pub type FontName = heapless::String<FONT_NAME_CAPACITY>;

// ============================================================================
// Style
// ============================================================================

/// Flat, per-control presentation record
///
/// There is no cascade: a control paints exactly with the style it holds.
///
/// # Examples
///
/// ```ignore
/// // The stock pressed-button look: green fill, otherwise default
/// let pressed = Style::default().with_background_color(GREEN);
/// assert!(pressed.background_filled);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Foreground color: text, slider handle
    pub primary_color: Color,

    /// Accent color: slider track line
    pub secondary_color: Color,

    /// Outline color for layouts that draw a border
    pub border_color: Color,

    pub font_name: FontName,

    /// Font size in points
    pub font_size: u32,

    /// Carried for custom paint behaviors; the stock controls draw text
    /// in `primary_color` and never read this.
    pub font_color: Color,

    pub background_color: Color,

    /// Whether `background_color` is painted at all
    pub background_filled: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            primary_color: BLUE,
            secondary_color: GREEN,
            border_color: BLACK,
            font_name: font_name("Arial"),
            font_size: 12,
            font_color: BLACK,
            background_color: LIGHT_GRAY,
            background_filled: false,
        }
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_primary_color(self, color: Color) -> Self {
        Self {
            primary_color: color,
            ..self
        }
    }

    pub fn with_secondary_color(self, color: Color) -> Self {
        Self {
            secondary_color: color,
            ..self
        }
    }

    pub fn with_border_color(self, color: Color) -> Self {
        Self {
            border_color: color,
            ..self
        }
    }

    /// Sets the font family. Names longer than [`FONT_NAME_CAPACITY`] bytes
    /// are truncated at a character boundary.
    pub fn with_font_name(self, name: &str) -> Self {
        Self {
            font_name: font_name(name),
            ..self
        }
    }

    pub fn with_font_size(self, size: u32) -> Self {
        Self {
            font_size: size,
            ..self
        }
    }

    pub fn with_font_color(self, color: Color) -> Self {
        Self {
            font_color: color,
            ..self
        }
    }

    /// Sets the background color and turns background filling on.
    ///
    /// Choosing a background color is taken as asking for it to be painted;
    /// use [`Style::with_background_filled`] to switch it back off.
    pub fn with_background_color(self, color: Color) -> Self {
        Self {
            background_color: color,
            background_filled: true,
            ..self
        }
    }

    pub fn with_background_filled(self, filled: bool) -> Self {
        Self {
            background_filled: filled,
            ..self
        }
    }
}

/// Copy `name` into a bounded font name, stopping at capacity.
fn font_name(name: &str) -> FontName {
    let mut out = FontName::new();
    for c in name.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::styling::colors::{RED, WHITE};

    #[test]
    fn test_default_is_unfilled() {
        let style = Style::default();
        assert!(!style.background_filled);
        assert_eq!(style.font_name.as_str(), "Arial");
        assert_eq!(style.font_size, 12);
    }

    #[test]
    fn test_with_replaces_only_one_field() {
        let base = Style::default();
        let style = base.clone().with_border_color(RED);
        assert_eq!(style.border_color, RED);
        assert_eq!(style.primary_color, base.primary_color);
        assert_eq!(style.background_color, base.background_color);

        let style = base.clone().with_primary_color(WHITE);
        assert_eq!(style.border_color, base.border_color);
        assert_eq!(style.primary_color, WHITE);
    }

    #[test]
    fn test_background_color_enables_fill() {
        let style = Style::default().with_background_color(GREEN);
        assert!(style.background_filled);
        assert_eq!(style.background_color, GREEN);
        assert!(!style.with_background_filled(false).background_filled);
    }

    #[test]
    fn test_long_font_name_is_truncated() {
        let name = "A Font Family Name That Is Far Too Long To Fit";
        let style = Style::default().with_font_name(name);
        assert_eq!(style.font_name.len(), FONT_NAME_CAPACITY);
        assert!(name.starts_with(style.font_name.as_str()));
    }
}
