//! Serialized UI configuration
//!
//! A [`UiConfig`] is a compact postcard blob describing the look of the
//! tree: font, colors as RGB888 triples, layout spacing and stock labels.
//! It borrows its strings from the input buffer. Decode it, validate it,
//! then turn it into a [`Theme`] for the factory.

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

use crate::ui::styling::{LayoutProperties, Style, Theme, from_rgb888};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config decode failed: {0}")]
    Decode(postcard::Error),
    #[error("Config encode failed: {0}")]
    Encode(postcard::Error),
    #[error("Font name is empty")]
    EmptyFontName,
    #[error("Font size is zero")]
    ZeroFontSize,
    #[error("Invalid {0}: must be finite and non-negative")]
    InvalidSpacing(&'static str),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(bound(deserialize = "'de: 'a"))]
pub struct UiConfig<'a> {
    pub font_name: &'a str,
    pub font_size: u32,

    pub primary_color: [u8; 3],
    pub secondary_color: [u8; 3],
    pub border_color: [u8; 3],
    pub font_color: [u8; 3],
    pub background_color: [u8; 3],
    pub background_filled: bool,

    /// Background of a held button
    pub pressed_color: [u8; 3],
    /// Handle color of a dragged slider
    pub dragging_color: [u8; 3],

    pub padding: f64,
    pub margin: f64,
    pub border: f64,

    pub button_label: &'a str,
    pub text_prompt: &'a str,
}

impl Default for UiConfig<'_> {
    fn default() -> Self {
        Self {
            font_name: "Arial",
            font_size: 12,
            primary_color: [0, 0, 255],
            secondary_color: [0, 128, 0],
            border_color: [0, 0, 0],
            font_color: [0, 0, 0],
            background_color: [211, 211, 211],
            background_filled: false,
            pressed_color: [0, 128, 0],
            dragging_color: [255, 0, 0],
            padding: 2.0,
            margin: 5.0,
            border: 1.0,
            button_label: "Button",
            text_prompt: "Enter text here: ",
        }
    }
}

impl<'a> UiConfig<'a> {
    /// Decode a config borrowing from `bytes`.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(ConfigError::Decode)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        postcard::to_allocvec(self).map_err(ConfigError::Encode)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.font_name.is_empty() {
            return Err(ConfigError::EmptyFontName);
        }
        if self.font_size == 0 {
            return Err(ConfigError::ZeroFontSize);
        }
        for (name, value) in [
            ("padding", self.padding),
            ("margin", self.margin),
            ("border", self.border),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidSpacing(name));
            }
        }
        Ok(())
    }

    /// Validate and build the theme this config describes.
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        self.validate()?;

        let base = Style::new()
            .with_primary_color(from_rgb888(self.primary_color))
            .with_secondary_color(from_rgb888(self.secondary_color))
            .with_border_color(from_rgb888(self.border_color))
            .with_font_name(self.font_name)
            .with_font_size(self.font_size)
            .with_font_color(from_rgb888(self.font_color))
            .with_background_color(from_rgb888(self.background_color))
            .with_background_filled(self.background_filled);
        let layout = LayoutProperties::new(self.padding, self.margin, self.border);

        let mut theme = Theme::new(
            base,
            from_rgb888(self.pressed_color),
            from_rgb888(self.dragging_color),
            layout,
        );
        theme.button_label = String::from(self.button_label);
        theme.text_prompt = String::from(self.text_prompt);
        Ok(theme)
    }
}
