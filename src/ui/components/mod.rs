// src/ui/components/mod.rs
//! Leaf controls

pub mod button;
pub mod slider;
pub mod text_edit;

pub use button::Button;
pub use slider::{HANDLE_RADIUS, Slider};
pub use text_edit::TextEdit;
