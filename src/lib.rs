//! Frond: an immutable, functionally composed widget tree
//!
//! Controls are values. Input is routed down the tree by rectangle and each
//! reaction returns a new control; subtrees that did not change are shared
//! with the previous tree. Painting goes through the [`ui::Canvas`] trait,
//! which [`ui::GraphicsCanvas`] implements for any embedded-graphics
//! `DrawTarget`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod geometry;
pub mod ui;
