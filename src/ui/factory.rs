// src/ui/factory.rs
//! Builds controls and whole trees from a [`Theme`]
//!
//! The factory borrows the theme, so every control it creates shares one
//! look without any global style state.

use alloc::vec;
use alloc::vec::Vec;
use log::debug;

use super::components::{Button, Slider, TextEdit};
use super::control::Control;
use super::layouts::Layout;
use super::styling::Theme;

/// Constructs themed controls
#[derive(Debug, Clone, Copy)]
pub struct Factory<'a> {
    theme: &'a Theme,
}

impl<'a> Factory<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    /// Released button showing `label`.
    pub fn button(&self, label: &str) -> Control {
        Button::new(
            false,
            label,
            self.theme.button.clone(),
            self.theme.button_pressed.clone(),
        )
        .into()
    }

    /// Released button with the theme's stock label.
    pub fn default_button(&self) -> Control {
        self.button(&self.theme.button_label)
    }

    /// Text edit pre-filled with the theme's prompt.
    pub fn text_edit(&self) -> Control {
        TextEdit::new(self.theme.text_edit.clone(), &self.theme.text_prompt).into()
    }

    /// Slider at the start of its track, not dragging.
    pub fn slider(&self) -> Control {
        Slider::new(
            self.theme.slider.clone(),
            self.theme.slider_dragging.clone(),
            0.0,
            false,
        )
        .into()
    }

    pub fn horizontal(&self, children: Vec<Control>) -> Control {
        Layout::horizontal(self.theme.layout, children).into()
    }

    pub fn vertical(&self, children: Vec<Control>) -> Control {
        Layout::vertical(self.theme.layout, children).into()
    }

    /// Three rows of mixed controls
    ///
    /// ```text
    /// [ Button | TextEdit | Button ]
    /// [ TextEdit  | Button | TextEdit  ]
    /// [ Slider    |        | Slider    ]
    /// [ Button    |        | Button    ]
    /// [ Button    |        | Button    ]
    /// [            Button             ]
    /// ```
    pub fn demo(&self) -> Control {
        let column = || {
            self.vertical(vec![
                self.text_edit(),
                self.slider(),
                self.default_button(),
                self.default_button(),
            ])
        };

        let root = self.vertical(vec![
            self.horizontal(vec![
                self.default_button(),
                self.text_edit(),
                self.default_button(),
            ]),
            self.horizontal(vec![
                column(),
                self.vertical(vec![self.default_button()]),
                column(),
            ]),
            self.horizontal(vec![self.default_button()]),
        ]);
        debug!("Built demo tree");
        root
    }
}
