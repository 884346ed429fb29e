// src/ui/layouts/mod.rs
//! Layout containers and the strategies that place their children

pub mod layout;
pub mod strategy;

pub use layout::{Layout, max_size};
pub use strategy::{SplitStrategy, split_horizontally, split_vertically};
