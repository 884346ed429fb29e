//! Horizontal slider with a draggable circular handle

use alloc::rc::Rc;

use crate::geometry::{Point, Rect, Size};
use crate::ui::canvas::Canvas;
use crate::ui::control::{Behaviors, MouseEvent, Widget};
use crate::ui::styling::Style;

/// Radius of the handle in pixels.
pub const HANDLE_RADIUS: f64 = 10.0;

/// Slider state: handle position along the track and whether it is held
///
/// `position` is the fraction of the track width left of the handle. It is
/// not clamped: the value follows the pointer, so a drag that started on
/// the track can leave it outside `[0, 1]`. Consumers needing a fraction
/// should use [`Slider::clamped_position`].
#[derive(Debug, Clone)]
pub struct Slider {
    position: f64,
    dragging: bool,
    default_style: Style,
    dragging_style: Style,
    behaviors: Behaviors<Slider>,
}

impl Slider {
    pub const BEHAVIORS: Behaviors<Slider> = Behaviors::none()
        .with_mouse(on_mouse)
        .with_paint(on_paint);

    pub fn new(default_style: Style, dragging_style: Style, position: f64, dragging: bool) -> Self {
        Self {
            position,
            dragging,
            default_style,
            dragging_style,
            behaviors: Self::BEHAVIORS,
        }
    }

    pub fn with_behaviors(self, behaviors: Behaviors<Slider>) -> Self {
        Self { behaviors, ..self }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn clamped_position(&self) -> f64 {
        self.position.clamp(0.0, 1.0)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Style for the current state.
    pub fn style(&self) -> &Style {
        if self.dragging {
            &self.dragging_style
        } else {
            &self.default_style
        }
    }

    /// Bounding box of the handle when painted into `rect`.
    pub fn handle_rect(&self, rect: Rect) -> Rect {
        let center = Point::new(rect.left() + rect.width() * self.position, rect.mid_y());
        Rect::new(
            center - HANDLE_RADIUS,
            Size::new(2.0 * HANDLE_RADIUS, 2.0 * HANDLE_RADIUS),
        )
    }
}

impl Widget for Slider {
    fn behaviors(&self) -> &Behaviors<Self> {
        &self.behaviors
    }
}

fn on_mouse(this: &Rc<Slider>, point: Point, rect: Rect, mouse: MouseEvent) -> Rc<Slider> {
    match mouse {
        // Width is non-zero whenever the gate let the event through.
        MouseEvent::Drag => Rc::new(Slider {
            position: (point.x - rect.left()) / rect.width(),
            dragging: true,
            ..(**this).clone()
        }),
        MouseEvent::Up if this.dragging => Rc::new(Slider {
            dragging: false,
            ..(**this).clone()
        }),
        _ => Rc::clone(this),
    }
}

fn on_paint<'c>(this: &Slider, canvas: &'c mut dyn Canvas, rect: Rect) -> &'c mut dyn Canvas {
    let style = this.style();
    canvas.fill_rect(rect, style.background_color);

    let mid_y = rect.mid_y();
    canvas.draw_line(
        Point::new(rect.left(), mid_y),
        Point::new(rect.right(), mid_y),
        style.secondary_color,
    );

    canvas.fill_ellipse(this.handle_rect(rect), style.primary_color);
    canvas
}
