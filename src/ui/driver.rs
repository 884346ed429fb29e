// src/ui/driver.rs
//! Host-side glue: feeds pointer and key input into the root control
//!
//! The driver holds the current root, the last pointer position and the
//! client area. Presses and releases act at the last reported pointer
//! position, so a host should report motion before buttons. While a
//! button is held the pointer is captured and motion is delivered as
//! [`MouseEvent::Drag`].
//!
//! Every input method returns `true` when the root was replaced, which is
//! exactly when a repaint is needed.

use log::debug;

use crate::geometry::{Point, Rect, Size};

use super::canvas::Canvas;
use super::control::{Control, MouseEvent};

#[derive(Debug, Clone)]
pub struct Driver {
    root: Control,
    pointer: Point,
    captured: bool,
    client: Size,
}

impl Driver {
    pub fn new(root: Control, client: Size) -> Self {
        Self {
            root,
            pointer: Point::ZERO,
            captured: false,
            client,
        }
    }

    pub fn root(&self) -> &Control {
        &self.root
    }

    /// Last reported pointer position.
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Whether a button is held.
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Rectangle the root occupies: the client area at the origin.
    pub fn bounds(&self) -> Rect {
        self.client.to_rect()
    }

    /// New client size. The tree is unaffected; the next paint uses it.
    pub fn resize(&mut self, client: Size) {
        debug!("Resize to {}x{}", client.width, client.height);
        self.client = client;
    }

    pub fn mouse_move(&mut self, point: Point) -> bool {
        self.pointer = point;
        let event = if self.captured {
            MouseEvent::Drag
        } else {
            MouseEvent::Move
        };
        self.mouse(event)
    }

    pub fn mouse_down(&mut self) -> bool {
        let changed = self.mouse(MouseEvent::Down);
        self.captured = true;
        changed
    }

    pub fn mouse_up(&mut self) -> bool {
        let changed = self.mouse(MouseEvent::Up);
        self.captured = false;
        changed
    }

    pub fn key_press(&mut self, key: char) -> bool {
        let next = self.root.key_press(self.pointer, self.bounds(), key);
        self.replace_root(next)
    }

    /// Paint the whole tree into the client area.
    pub fn paint<'c>(&self, canvas: &'c mut dyn Canvas) -> &'c mut dyn Canvas {
        self.root.paint(canvas, self.bounds())
    }

    fn mouse(&mut self, event: MouseEvent) -> bool {
        let next = self.root.mouse(self.pointer, self.bounds(), event);
        self.replace_root(next)
    }

    fn replace_root(&mut self, next: Control) -> bool {
        if next.ptr_eq(&self.root) {
            return false;
        }
        debug!("Root replaced at ({}, {})", self.pointer.x, self.pointer.y);
        self.root = next;
        true
    }
}
