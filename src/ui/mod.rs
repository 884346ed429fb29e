// src/ui/mod.rs
//! Frond UI - an immutable widget tree for embedded displays
//!
//! Every input event produces a new tree; controls never mutate in place.
//! The module provides:
//! - [`control`] - the widget contract and the [`Control`] tree node
//! - [`components`] - buttons, text edits and sliders
//! - [`layouts`] - containers splitting their rectangle among children
//! - [`canvas`] - the drawing surface controls paint onto
//! - [`styling`] - colors, styles and themes
//! - [`factory`] - themed construction of controls and demo trees
//! - [`driver`] - the host loop's view of the tree

pub mod canvas;
pub mod components;
pub mod control;
pub mod driver;
pub mod factory;
pub mod layouts;
pub mod styling;

// Re-export commonly used items
pub use canvas::{Canvas, GraphicsCanvas};
pub use components::{Button, Slider, TextEdit};
pub use control::{Behaviors, Control, MouseEvent, Widget};
pub use driver::Driver;
pub use factory::Factory;
pub use layouts::{Layout, SplitStrategy, split_horizontally, split_vertically};
pub use styling::{Color, LayoutProperties, Style, Theme};
