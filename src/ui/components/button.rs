// src/ui/components/button.rs
//! Push button: a two-state (up/down) control with a centered label

use alloc::rc::Rc;
use alloc::string::String;

use crate::geometry::{Point, Rect};
use crate::ui::canvas::Canvas;
use crate::ui::control::{Behaviors, MouseEvent, Widget};
use crate::ui::styling::Style;

/// Button state
///
/// `Down` on a mouse press inside the button, `Up` on a release inside it.
/// Every other event leaves the button as it is.
#[derive(Debug, Clone)]
pub struct Button {
    pressed: bool,
    label: String,
    default_style: Style,
    pressed_style: Style,
    behaviors: Behaviors<Button>,
}

impl Button {
    /// Stock reactions: mouse and paint, no key handling.
    pub const BEHAVIORS: Behaviors<Button> = Behaviors::none()
        .with_mouse(on_mouse)
        .with_paint(on_paint);

    pub fn new(pressed: bool, label: &str, default_style: Style, pressed_style: Style) -> Self {
        Self {
            pressed,
            label: String::from(label),
            default_style,
            pressed_style,
            behaviors: Self::BEHAVIORS,
        }
    }

    /// Rebind the reactions, e.g. to give one button a custom paint.
    pub fn with_behaviors(self, behaviors: Behaviors<Button>) -> Self {
        Self { behaviors, ..self }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Style for the current state.
    pub fn style(&self) -> &Style {
        if self.pressed {
            &self.pressed_style
        } else {
            &self.default_style
        }
    }

    pub fn default_style(&self) -> &Style {
        &self.default_style
    }

    pub fn pressed_style(&self) -> &Style {
        &self.pressed_style
    }

    /// Same button in state `pressed`; shares `this` if already there.
    fn set_pressed(this: &Rc<Button>, pressed: bool) -> Rc<Button> {
        if this.pressed == pressed {
            return Rc::clone(this);
        }
        Rc::new(Button {
            pressed,
            ..(**this).clone()
        })
    }
}

impl Widget for Button {
    fn behaviors(&self) -> &Behaviors<Self> {
        &self.behaviors
    }
}

fn on_mouse(this: &Rc<Button>, _point: Point, _rect: Rect, mouse: MouseEvent) -> Rc<Button> {
    match mouse {
        MouseEvent::Down => Button::set_pressed(this, true),
        MouseEvent::Up => Button::set_pressed(this, false),
        MouseEvent::Move | MouseEvent::Drag => Rc::clone(this),
    }
}

fn on_paint<'c>(this: &Button, canvas: &'c mut dyn Canvas, rect: Rect) -> &'c mut dyn Canvas {
    let style = this.style();
    if style.background_filled {
        canvas.fill_rect(rect, style.background_color);
    }
    canvas.select_font(&style.font_name, style.font_size);
    canvas.draw_centered_text(style.primary_color, rect, &this.label);
    canvas
}
