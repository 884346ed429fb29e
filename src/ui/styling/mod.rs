//! Styling system for widgets
//!
//! - [`colors`] - Color type and named constants
//! - [`layout`] - Layout container spacing (padding, margin, border)
//! - [`style`] - Flat per-control style record
//! - [`theme`] - The bundle of styles handed to the tree factory
//!
//! # Examples
//!
//! ```ignore
//! use ui::styling::*;
//!
//! let pressed = Style::new().with_background_color(GREEN);
//! let props = LayoutProperties::default().with_border(0.0);
//! ```

pub mod colors;
pub mod layout;
pub mod style;
pub mod theme;

pub use colors::{BLACK, BLUE, Color, DARK_GRAY, GREEN, LIGHT_GRAY, RED, WHITE, from_rgb888};
pub use layout::LayoutProperties;
pub use style::{FONT_NAME_CAPACITY, FontName, Style};
pub use theme::{DEFAULT_BUTTON_LABEL, DEFAULT_TEXT_PROMPT, Theme};
