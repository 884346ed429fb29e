//! Theme passed to the tree factory
//!
//! Combines the per-control styles and layout spacing into one value that
//! is built once at startup and handed to
//! [`Factory`](crate::ui::factory::Factory). Nothing here is global.

use alloc::string::String;

use super::colors::{Color, GREEN, RED};
use super::layout::LayoutProperties;
use super::style::Style;

/// Label given to buttons created without an explicit one.
pub const DEFAULT_BUTTON_LABEL: &str = "Button";

/// Initial contents of a freshly created text edit.
pub const DEFAULT_TEXT_PROMPT: &str = "Enter text here: ";

// ============================================================================
// Theme
// ============================================================================

/// Styles and spacing for every control the factory builds
///
/// # Examples
///
/// ```ignore
/// let theme = Theme::default();
/// let factory = Factory::new(&theme);
/// let root = factory.demo();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub button: Style,

    /// Style of a button while it is held down
    pub button_pressed: Style,

    pub text_edit: Style,

    pub slider: Style,

    /// Style of a slider while its handle is being dragged
    pub slider_dragging: Style,

    pub layout: LayoutProperties,

    pub button_label: String,

    pub text_prompt: String,
}

impl Default for Theme {
    /// The stock look: a pressed button fills green, a dragged slider
    /// handle turns red.
    fn default() -> Self {
        Self::new(Style::default(), GREEN, RED, LayoutProperties::default())
    }
}

impl Theme {
    /// Derive every control style from one base style.
    ///
    /// `pressed` fills the background of a held button; `dragging` colors
    /// the handle of a dragged slider.
    pub fn new(base: Style, pressed: Color, dragging: Color, layout: LayoutProperties) -> Self {
        Self {
            button_pressed: base.clone().with_background_color(pressed),
            button: base.clone(),
            text_edit: base.clone(),
            slider_dragging: base.clone().with_primary_color(dragging),
            slider: base,
            layout,
            button_label: String::from(DEFAULT_BUTTON_LABEL),
            text_prompt: String::from(DEFAULT_TEXT_PROMPT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_variants() {
        let theme = Theme::default();
        assert!(!theme.button.background_filled);
        assert!(theme.button_pressed.background_filled);
        assert_eq!(theme.button_pressed.background_color, GREEN);
        assert_eq!(theme.slider_dragging.primary_color, RED);
        assert_eq!(theme.slider.primary_color, Style::default().primary_color);
        assert_eq!(theme.layout, LayoutProperties::default());
    }

    #[test]
    fn test_custom_accents() {
        let base = Style::default().with_font_size(20);
        let theme = Theme::new(base.clone(), RED, GREEN, LayoutProperties::new(0.0, 0.0, 0.0));
        assert_eq!(theme.button, base);
        assert_eq!(theme.text_edit.font_size, 20);
        assert_eq!(theme.button_pressed.background_color, RED);
        assert_eq!(theme.slider_dragging.primary_color, GREEN);
        assert_eq!(theme.slider_dragging.font_size, 20);
        assert_eq!(theme.button_label, DEFAULT_BUTTON_LABEL);
    }
}
