//! Control abstraction: polymorphism through bound behavior values
//!
//! A widget type does not override methods. Instead each widget value
//! carries a [`Behaviors`] record of up to three function pointers (key
//! press, mouse, paint) bound when it is constructed. The free functions
//! [`key_press`], [`mouse`] and [`paint`] are the shared dispatch contract:
//! they apply the hit-test gate and then invoke whichever behavior is bound,
//! falling back to "unchanged" when a slot is empty.
//!
//! [`Control`] is the tagged union the tree is built from. Every variant
//! holds its widget behind an `Rc`, so "unchanged" means the very same
//! allocation comes back and callers can detect change by identity.
//!
//! Controls hold no parent, position or canvas. The rectangle a control
//! occupies is a parameter of every call.

use alloc::rc::Rc;
use core::fmt;

use crate::geometry::{Point, Rect, Size};
use crate::ui::canvas::Canvas;
use crate::ui::components::{Button, Slider, TextEdit};
use crate::ui::layouts::Layout;

// ---------------------------------------------------------------------------
// Input model
// ---------------------------------------------------------------------------

/// Mouse input delivered to controls
///
/// There are no modifiers, buttons, wheel or touch variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEvent {
    /// Pointer moved with no button held
    Move,
    /// Button pressed
    Down,
    /// Button released
    Up,
    /// Pointer moved while the button is held
    Drag,
}

// ---------------------------------------------------------------------------
// Behaviors
// ---------------------------------------------------------------------------

/// Key press reaction: returns the next state, or `this` when unchanged.
pub type KeyPressFn<W> = fn(&Rc<W>, Point, Rect, char) -> Rc<W>;

/// Mouse reaction: returns the next state, or `this` when unchanged.
pub type MouseFn<W> = fn(&Rc<W>, Point, Rect, MouseEvent) -> Rc<W>;

/// Paint reaction: draws into the canvas and hands it back.
pub type PaintFn<W> = for<'c> fn(&W, &'c mut dyn Canvas, Rect) -> &'c mut dyn Canvas;

/// The three optional behavior slots of a widget.
///
/// Built with the `const` builders so a widget type can publish its stock
/// behaviors as an associated constant:
///
/// ```ignore
/// const BEHAVIORS: Behaviors<Button> = Behaviors::none()
///     .with_mouse(on_mouse)
///     .with_paint(on_paint);
/// ```
pub struct Behaviors<W> {
    pub on_key_press: Option<KeyPressFn<W>>,
    pub on_mouse: Option<MouseFn<W>>,
    pub on_paint: Option<PaintFn<W>>,
}

impl<W> Behaviors<W> {
    /// No behavior bound: the widget ignores input and paints nothing.
    pub const fn none() -> Self {
        Self {
            on_key_press: None,
            on_mouse: None,
            on_paint: None,
        }
    }

    pub const fn with_key_press(self, f: KeyPressFn<W>) -> Self {
        Self {
            on_key_press: Some(f),
            ..self
        }
    }

    pub const fn with_mouse(self, f: MouseFn<W>) -> Self {
        Self {
            on_mouse: Some(f),
            ..self
        }
    }

    pub const fn with_paint(self, f: PaintFn<W>) -> Self {
        Self {
            on_paint: Some(f),
            ..self
        }
    }
}

// Manual impls: derives would demand `W: Clone` etc. for what are only
// function pointers.
impl<W> Clone for Behaviors<W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W> Copy for Behaviors<W> {}

impl<W> Default for Behaviors<W> {
    fn default() -> Self {
        Self::none()
    }
}

impl<W> fmt::Debug for Behaviors<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Behaviors")
            .field("on_key_press", &self.on_key_press.is_some())
            .field("on_mouse", &self.on_mouse.is_some())
            .field("on_paint", &self.on_paint.is_some())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Widget trait and shared gate
// ---------------------------------------------------------------------------

/// State type of a control variant.
pub trait Widget: Sized {
    /// Behaviors bound to this value.
    fn behaviors(&self) -> &Behaviors<Self>;

    /// Smallest size the widget wants.
    fn min_size(&self) -> Size {
        Size::ZERO
    }

    /// Whether the widget wants all input while active. Input capture is
    /// not implemented; nothing reports `true` yet.
    fn capture_input(&self) -> bool {
        false
    }
}

/// Deliver a key press: no-op unless `rect` contains `point`.
pub fn key_press<W: Widget>(this: &Rc<W>, point: Point, rect: Rect, key: char) -> Rc<W> {
    if !rect.contains(point) {
        return Rc::clone(this);
    }
    match this.behaviors().on_key_press {
        Some(react) => react(this, point, rect, key),
        None => Rc::clone(this),
    }
}

/// Deliver a mouse event: no-op unless `rect` contains `point`.
pub fn mouse<W: Widget>(this: &Rc<W>, point: Point, rect: Rect, event: MouseEvent) -> Rc<W> {
    if !rect.contains(point) {
        return Rc::clone(this);
    }
    match this.behaviors().on_mouse {
        Some(react) => react(this, point, rect, event),
        None => Rc::clone(this),
    }
}

/// Paint into `rect`. Not gated: a control paints wherever the pointer is.
pub fn paint<'c, W: Widget>(
    this: &W,
    canvas: &'c mut dyn Canvas,
    rect: Rect,
) -> &'c mut dyn Canvas {
    match this.behaviors().on_paint {
        Some(draw) => draw(this, canvas, rect),
        None => canvas,
    }
}

// ---------------------------------------------------------------------------
// Control
// ---------------------------------------------------------------------------

/// One node of the widget tree
///
/// Cloning is cheap (a reference count bump). Equality is identity: two
/// controls are equal when they share the same allocation, which is exactly
/// what a dispatch returns when nothing changed.
#[derive(Debug, Clone, Default)]
pub enum Control {
    /// Placeholder with no behaviors
    #[default]
    Empty,
    Button(Rc<Button>),
    TextEdit(Rc<TextEdit>),
    Slider(Rc<Slider>),
    Layout(Rc<Layout>),
}

/// Evaluate `$body` with `$w` bound to the widget of any non-empty variant.
macro_rules! dispatch {
    ($control:expr, $w:ident => $body:expr, Empty => $empty:expr) => {
        match $control {
            Control::Empty => $empty,
            Control::Button($w) => $body,
            Control::TextEdit($w) => $body,
            Control::Slider($w) => $body,
            Control::Layout($w) => $body,
        }
    };
}

impl Control {
    /// Route a key press; returns `self` (same allocation) when nothing reacted.
    pub fn key_press(&self, point: Point, rect: Rect, key: char) -> Control {
        dispatch!(self, w => key_press(w, point, rect, key).into(), Empty => Control::Empty)
    }

    /// Route a mouse event; returns `self` (same allocation) when nothing reacted.
    pub fn mouse(&self, point: Point, rect: Rect, event: MouseEvent) -> Control {
        dispatch!(self, w => mouse(w, point, rect, event).into(), Empty => Control::Empty)
    }

    /// Paint this control, and for layouts the whole subtree, into `rect`.
    pub fn paint<'c>(&self, canvas: &'c mut dyn Canvas, rect: Rect) -> &'c mut dyn Canvas {
        dispatch!(self, w => paint(&**w, canvas, rect), Empty => canvas)
    }

    pub fn min_size(&self) -> Size {
        dispatch!(self, w => w.min_size(), Empty => Size::ZERO)
    }

    pub fn capture_input(&self) -> bool {
        dispatch!(self, w => w.capture_input(), Empty => false)
    }

    /// Whether both controls are the same variant sharing one allocation.
    pub fn ptr_eq(&self, other: &Control) -> bool {
        match (self, other) {
            (Control::Empty, Control::Empty) => true,
            (Control::Button(a), Control::Button(b)) => Rc::ptr_eq(a, b),
            (Control::TextEdit(a), Control::TextEdit(b)) => Rc::ptr_eq(a, b),
            (Control::Slider(a), Control::Slider(b)) => Rc::ptr_eq(a, b),
            (Control::Layout(a), Control::Layout(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Control::Empty)
    }

    pub fn as_button(&self) -> Option<&Button> {
        match self {
            Control::Button(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_text_edit(&self) -> Option<&TextEdit> {
        match self {
            Control::TextEdit(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_slider(&self) -> Option<&Slider> {
        match self {
            Control::Slider(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_layout(&self) -> Option<&Layout> {
        match self {
            Control::Layout(l) => Some(l),
            _ => None,
        }
    }
}

impl PartialEq for Control {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Control {}

macro_rules! impl_from_widget {
    ($($variant:ident),*) => {
        $(
            impl From<Rc<$variant>> for Control {
                fn from(w: Rc<$variant>) -> Self {
                    Control::$variant(w)
                }
            }

            impl From<$variant> for Control {
                fn from(w: $variant) -> Self {
                    Control::$variant(Rc::new(w))
                }
            }
        )*
    };
}

impl_from_widget!(Button, TextEdit, Slider, Layout);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::canvas::testing::{Op, RecordingCanvas};
    use crate::ui::styling::{RED, Style};

    /// Minimal widget counting how often its reactions fire.
    #[derive(Debug, Clone)]
    struct Counter {
        hits: u32,
        behaviors: Behaviors<Counter>,
    }

    impl Widget for Counter {
        fn behaviors(&self) -> &Behaviors<Self> {
            &self.behaviors
        }
    }

    fn bump(this: &Rc<Counter>) -> Rc<Counter> {
        Rc::new(Counter {
            hits: this.hits + 1,
            ..(**this).clone()
        })
    }

    fn bump_on_key(this: &Rc<Counter>, _: Point, _: Rect, _: char) -> Rc<Counter> {
        bump(this)
    }

    fn bump_on_mouse(this: &Rc<Counter>, _: Point, _: Rect, _: MouseEvent) -> Rc<Counter> {
        bump(this)
    }

    fn paint_red<'c>(_: &Counter, canvas: &'c mut dyn Canvas, rect: Rect) -> &'c mut dyn Canvas {
        canvas.fill_rect(rect, RED);
        canvas
    }

    fn counter(behaviors: Behaviors<Counter>) -> Rc<Counter> {
        Rc::new(Counter { hits: 0, behaviors })
    }

    const BOUNDS: Rect = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
    const INSIDE: Point = Point::new(5.0, 5.0);
    const OUTSIDE: Point = Point::new(10.0, 5.0);

    #[test]
    fn test_gate_blocks_events_outside_rect() {
        let all = Behaviors::none()
            .with_key_press(bump_on_key)
            .with_mouse(bump_on_mouse);
        let c = counter(all);

        assert!(Rc::ptr_eq(&key_press(&c, OUTSIDE, BOUNDS, 'x'), &c));
        assert!(Rc::ptr_eq(&mouse(&c, OUTSIDE, BOUNDS, MouseEvent::Down), &c));

        assert_eq!(key_press(&c, INSIDE, BOUNDS, 'x').hits, 1);
        assert_eq!(mouse(&c, INSIDE, BOUNDS, MouseEvent::Down).hits, 1);
    }

    #[test]
    fn test_unbound_slots_are_identity() {
        let c = counter(Behaviors::none());
        assert!(Rc::ptr_eq(&key_press(&c, INSIDE, BOUNDS, 'x'), &c));
        assert!(Rc::ptr_eq(&mouse(&c, INSIDE, BOUNDS, MouseEvent::Up), &c));

        let mut canvas = RecordingCanvas::new();
        paint(&*c, &mut canvas, BOUNDS);
        assert!(canvas.ops.is_empty());
    }

    #[test]
    fn test_paint_is_not_gated() {
        let c = counter(Behaviors::none().with_paint(paint_red));
        let mut canvas = RecordingCanvas::new();
        // Paint has no pointer at all; it always runs.
        paint(&*c, &mut canvas, BOUNDS);
        assert_eq!(canvas.ops, [Op::FillRect(BOUNDS, RED)]);
    }

    #[test]
    fn test_empty_control_ignores_everything() {
        let empty = Control::Empty;
        assert!(empty.key_press(INSIDE, BOUNDS, 'a').is_empty());
        assert!(empty.mouse(INSIDE, BOUNDS, MouseEvent::Down).is_empty());
        assert_eq!(empty.min_size(), Size::ZERO);
        assert!(!empty.capture_input());

        let mut canvas = RecordingCanvas::new();
        empty.paint(&mut canvas, BOUNDS);
        assert!(canvas.ops.is_empty());
    }

    #[test]
    fn test_control_equality_is_identity() {
        let style = Style::default();
        let a: Control = Button::new(false, "Ok", style.clone(), style.clone()).into();
        let b: Control = Button::new(false, "Ok", style.clone(), style).into();
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_ne!(a, Control::Empty);
        assert_eq!(Control::Empty, Control::default());
    }

    #[test]
    fn test_every_variant_ignores_events_outside() {
        let style = Style::default();
        let controls: [Control; 4] = [
            Button::new(false, "b", style.clone(), style.clone()).into(),
            TextEdit::new(style.clone(), "t").into(),
            Slider::new(style.clone(), style.clone(), 0.5, false).into(),
            Layout::horizontal(Default::default(), alloc::vec![Control::Empty]).into(),
        ];
        for event in [MouseEvent::Move, MouseEvent::Down, MouseEvent::Up, MouseEvent::Drag] {
            for c in &controls {
                assert!(c.mouse(OUTSIDE, BOUNDS, event).ptr_eq(c));
                assert!(c.key_press(OUTSIDE, BOUNDS, 'k').ptr_eq(c));
            }
        }
    }
}
