//! Text edit: accumulates typed characters
//!
//! Deliberately minimal. Every key press inside the control appends its
//! character; there is no cursor, deletion or selection.

use alloc::rc::Rc;
use alloc::string::String;

use crate::geometry::{Point, Rect};
use crate::ui::canvas::Canvas;
use crate::ui::control::{Behaviors, Widget};
use crate::ui::styling::Style;

#[derive(Debug, Clone)]
pub struct TextEdit {
    style: Style,
    text: String,
    behaviors: Behaviors<TextEdit>,
}

impl TextEdit {
    pub const BEHAVIORS: Behaviors<TextEdit> = Behaviors::none()
        .with_key_press(on_key_press)
        .with_paint(on_paint);

    pub fn new(style: Style, text: &str) -> Self {
        Self {
            style,
            text: String::from(text),
            behaviors: Self::BEHAVIORS,
        }
    }

    pub fn with_behaviors(self, behaviors: Behaviors<TextEdit>) -> Self {
        Self { behaviors, ..self }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &Style {
        &self.style
    }
}

impl Widget for TextEdit {
    fn behaviors(&self) -> &Behaviors<Self> {
        &self.behaviors
    }
}

fn on_key_press(this: &Rc<TextEdit>, _point: Point, _rect: Rect, key: char) -> Rc<TextEdit> {
    let mut text = this.text.clone();
    text.push(key);
    Rc::new(TextEdit {
        text,
        ..(**this).clone()
    })
}

fn on_paint<'c>(this: &TextEdit, canvas: &'c mut dyn Canvas, rect: Rect) -> &'c mut dyn Canvas {
    if this.style.background_filled {
        canvas.fill_rect(rect, this.style.background_color);
    }
    canvas.select_font(&this.style.font_name, this.style.font_size);
    canvas.draw_centered_text(this.style.primary_color, rect, &this.text);
    canvas
}
