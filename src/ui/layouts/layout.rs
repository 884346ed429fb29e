// src/ui/layouts/layout.rs
//! Layout container: routes input and painting into ordered children
//!
//! A layout owns its children and a [`SplitStrategy`]. Child `i` always
//! occupies `strategy(rect, i, len)` of whatever rectangle the layout is
//! given; the rectangles are recomputed on every call and never stored.
//!
//! Points stay in parent coordinates all the way down. Sub-rectangles are
//! carved out of the parent's rectangle, so a child hit-tests the same
//! pointer the root received.
//!
//! # Structural sharing
//!
//! After fanning an event out, [`Layout::apply_changes`] compares the new
//! children with the old ones by identity. If none changed, the same
//! `Rc<Layout>` is returned; unchanged subtrees are never reallocated, all
//! the way up to the root.
//!
//! # Overlap
//!
//! Events go to every child whose rectangle contains the point, not only
//! the first. The built-in strategies never overlap, but a custom strategy
//! that does will deliver one event to several children.

use alloc::rc::Rc;
use alloc::vec::Vec;
use log::trace;

use crate::geometry::{Point, Rect, Size};
use crate::ui::canvas::Canvas;
use crate::ui::control::{Behaviors, Control, MouseEvent, Widget};
use crate::ui::styling::{LayoutProperties, Style};

use super::strategy::{SplitStrategy, split_horizontally, split_vertically};

/// Container arranging children with a split strategy
#[derive(Debug, Clone)]
pub struct Layout {
    children: Vec<Control>,
    strategy: SplitStrategy,
    properties: LayoutProperties,
    style: Style,
    behaviors: Behaviors<Layout>,
}

impl Layout {
    /// Stock reactions: fan key and mouse events out to children, paint
    /// background, border and children.
    pub const BEHAVIORS: Behaviors<Layout> = Behaviors::none()
        .with_key_press(on_key_press)
        .with_mouse(on_mouse)
        .with_paint(on_paint);

    pub fn new(
        strategy: SplitStrategy,
        properties: LayoutProperties,
        style: Style,
        children: Vec<Control>,
    ) -> Self {
        Self {
            children,
            strategy,
            properties,
            style,
            behaviors: Self::BEHAVIORS,
        }
    }

    /// Children side by side in equal-width columns.
    pub fn horizontal(properties: LayoutProperties, children: Vec<Control>) -> Self {
        Self::new(split_horizontally, properties, Style::default(), children)
    }

    /// Children stacked in equal-height rows.
    pub fn vertical(properties: LayoutProperties, children: Vec<Control>) -> Self {
        Self::new(split_vertically, properties, Style::default(), children)
    }

    pub fn with_style(self, style: Style) -> Self {
        Self { style, ..self }
    }

    pub fn with_behaviors(self, behaviors: Behaviors<Layout>) -> Self {
        Self { behaviors, ..self }
    }

    pub fn children(&self) -> &[Control] {
        &self.children
    }

    pub fn strategy(&self) -> SplitStrategy {
        self.strategy
    }

    pub fn properties(&self) -> &LayoutProperties {
        &self.properties
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Rectangle of child `index` when the layout occupies `rect`.
    pub fn sub_rect(&self, rect: Rect, index: usize) -> Rect {
        (self.strategy)(rect, index, self.children.len())
    }

    /// Rectangles of all children, in child order.
    pub fn layout_rects(&self, rect: Rect) -> Vec<Rect> {
        (0..self.children.len())
            .map(|i| self.sub_rect(rect, i))
            .collect()
    }

    /// Content area: `rect` inset by border plus margin on every side.
    pub fn inner_rect(&self, rect: Rect) -> Rect {
        rect.inset(self.properties.inset())
    }

    /// Rebuild `this` with `children`, unless they are the current
    /// children, in which case `this` itself is returned.
    pub fn apply_changes(this: &Rc<Layout>, children: Vec<Control>) -> Rc<Layout> {
        let unchanged = this.children.len() == children.len()
            && this.children.iter().zip(&children).all(|(a, b)| a.ptr_eq(b));
        if unchanged {
            return Rc::clone(this);
        }
        trace!("Layout with {} children rebuilt", children.len());
        Rc::new(Layout {
            children,
            ..Layout::clone_shallow(this)
        })
    }

    /// Copy of everything but the children.
    fn clone_shallow(this: &Layout) -> Layout {
        Layout {
            children: Vec::new(),
            strategy: this.strategy,
            properties: this.properties,
            style: this.style.clone(),
            behaviors: this.behaviors,
        }
    }
}

impl Widget for Layout {
    fn behaviors(&self) -> &Behaviors<Self> {
        &self.behaviors
    }

    /// Componentwise maximum of the children's minimum sizes.
    fn min_size(&self) -> Size {
        max_size(self.children.iter().map(Control::min_size))
    }
}

/// Componentwise maximum of `sizes`; zero when there are none.
pub fn max_size(sizes: impl IntoIterator<Item = Size>) -> Size {
    sizes.into_iter().fold(Size::ZERO, Size::max)
}

fn on_mouse(this: &Rc<Layout>, point: Point, rect: Rect, mouse: MouseEvent) -> Rc<Layout> {
    let children = this
        .children
        .iter()
        .enumerate()
        .map(|(i, child)| child.mouse(point, this.sub_rect(rect, i), mouse))
        .collect();
    Layout::apply_changes(this, children)
}

/// There is no focus: every child under the point receives the key.
fn on_key_press(this: &Rc<Layout>, point: Point, rect: Rect, key: char) -> Rc<Layout> {
    let children = this
        .children
        .iter()
        .enumerate()
        .map(|(i, child)| child.key_press(point, this.sub_rect(rect, i), key))
        .collect();
    Layout::apply_changes(this, children)
}

fn on_paint<'c>(this: &Layout, canvas: &'c mut dyn Canvas, rect: Rect) -> &'c mut dyn Canvas {
    if this.style.background_filled {
        canvas.fill_rect(rect, this.style.background_color);
    }
    if this.properties.border > 0.0 {
        canvas.draw_rect(rect, this.style.border_color, this.properties.border);
    }
    this.children
        .iter()
        .enumerate()
        .fold(canvas, |canvas, (i, child)| {
            child.paint(canvas, this.sub_rect(rect, i))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::canvas::testing::{Op, RecordingCanvas};
    use crate::ui::components::{Button, TextEdit};
    use crate::ui::styling::{BLACK, BLUE, GREEN, LIGHT_GRAY};
    use alloc::vec;

    const BOUNDS: Rect = Rect::from_xywh(0.0, 0.0, 300.0, 60.0);

    fn button(label: &str) -> Control {
        let style = Style::default();
        Button::new(false, label, style.clone(), style.with_background_color(GREEN)).into()
    }

    fn row(children: Vec<Control>) -> Rc<Layout> {
        Rc::new(Layout::horizontal(LayoutProperties::default(), children))
    }

    #[test]
    fn test_layout_rects_split_horizontally() {
        let layout = row(vec![button("a"), button("b"), button("c")]);
        let rects = layout.layout_rects(BOUNDS);
        let widths: Vec<f64> = rects.iter().map(Rect::width).collect();
        let lefts: Vec<f64> = rects.iter().map(Rect::left).collect();
        assert_eq!(widths, [100.0, 100.0, 100.0]);
        assert_eq!(lefts, [0.0, 100.0, 200.0]);
        assert!(rects.iter().all(|r| r.height() == 60.0));
    }

    #[test]
    fn test_inner_rect_removes_border_and_margin() {
        let layout = row(vec![]);
        assert_eq!(
            layout.inner_rect(BOUNDS),
            Rect::from_xywh(6.0, 6.0, 288.0, 48.0)
        );
    }

    #[test]
    fn test_mouse_reaches_only_child_under_point() {
        let layout: Control = row(vec![button("a"), button("b"), button("c")]).into();
        let next = layout.mouse(Point::new(150.0, 30.0), BOUNDS, MouseEvent::Down);
        assert!(!next.ptr_eq(&layout));

        let before = layout.as_layout().map(Layout::children).unwrap_or_default();
        let after = next.as_layout().map(Layout::children).unwrap_or_default();
        assert!(after[0].ptr_eq(&before[0]));
        assert!(after[1].as_button().is_some_and(Button::is_pressed));
        assert!(after[2].ptr_eq(&before[2]));
    }

    #[test]
    fn test_unchanged_children_share_layout() {
        let layout: Control = row(vec![button("a"), button("b")]).into();
        // A key press reaches the buttons, which have no key behavior
        let next = layout.key_press(Point::new(10.0, 10.0), BOUNDS, 'x');
        assert!(next.ptr_eq(&layout));
        // A move is ignored by buttons
        let next = layout.mouse(Point::new(10.0, 10.0), BOUNDS, MouseEvent::Move);
        assert!(next.ptr_eq(&layout));
    }

    #[test]
    fn test_nested_change_rebuilds_only_path() {
        let untouched: Control = row(vec![button("x")]).into();
        let edited: Control = row(vec![TextEdit::new(Style::default(), "").into()]).into();
        let root: Control = Rc::new(Layout::vertical(
            LayoutProperties::default(),
            vec![untouched.clone(), edited.clone()],
        ))
        .into();

        // Bottom half is the text edit
        let next = root.key_press(Point::new(5.0, 45.0), BOUNDS, 'q');
        assert!(!next.ptr_eq(&root));
        let children = next.as_layout().map(Layout::children).unwrap_or_default();
        assert!(children[0].ptr_eq(&untouched));
        assert!(!children[1].ptr_eq(&edited));
        let text = children[1]
            .as_layout()
            .and_then(|l| l.children()[0].as_text_edit())
            .map(TextEdit::text);
        assert_eq!(text, Some("q"));
    }

    #[test]
    fn test_key_reaches_every_overlapping_child() {
        fn stacked(rect: Rect, _index: usize, _count: usize) -> Rect {
            rect
        }
        let layout: Control = Layout::new(
            stacked,
            LayoutProperties::default(),
            Style::default(),
            vec![
                TextEdit::new(Style::default(), "a").into(),
                TextEdit::new(Style::default(), "b").into(),
            ],
        )
        .into();
        let next = layout.key_press(Point::new(1.0, 1.0), BOUNDS, '!');
        let texts: Vec<&str> = next
            .as_layout()
            .map(Layout::children)
            .unwrap_or_default()
            .iter()
            .filter_map(Control::as_text_edit)
            .map(TextEdit::text)
            .collect();
        assert_eq!(texts, ["a!", "b!"]);
    }

    #[test]
    fn test_apply_changes_keeps_identity_for_same_children() {
        let layout = row(vec![button("a"), Control::Empty]);
        let same = Layout::apply_changes(&layout, layout.children().to_vec());
        assert!(Rc::ptr_eq(&same, &layout));

        let fewer = Layout::apply_changes(&layout, vec![button("a")]);
        assert!(!Rc::ptr_eq(&fewer, &layout));
        assert_eq!(fewer.properties(), layout.properties());
    }

    #[test]
    fn test_paint_order() {
        let style = Style::default().with_background_color(LIGHT_GRAY);
        let layout: Control = Layout::horizontal(
            LayoutProperties::default(),
            vec![button("a"), button("b")],
        )
        .with_style(style)
        .into();

        let mut canvas = RecordingCanvas::new();
        layout.paint(&mut canvas, BOUNDS);

        assert_eq!(canvas.ops.len(), 4);
        assert_eq!(canvas.ops[0], Op::FillRect(BOUNDS, LIGHT_GRAY));
        assert_eq!(canvas.ops[1], Op::DrawRect(BOUNDS, BLACK, 1.0));
        assert!(matches!(&canvas.ops[2], Op::Text(s, p, c) if s == "a" && p.x < 150.0 && *c == BLUE));
        assert!(matches!(&canvas.ops[3], Op::Text(s, p, c) if s == "b" && p.x >= 150.0 && *c == BLUE));
    }

    #[test]
    fn test_no_border_when_zero() {
        let layout: Control =
            Layout::vertical(LayoutProperties::default().with_border(0.0), vec![]).into();
        let mut canvas = RecordingCanvas::new();
        layout.paint(&mut canvas, BOUNDS);
        assert!(canvas.ops.is_empty());
    }

    #[test]
    fn test_max_size_is_componentwise() {
        assert_eq!(max_size(Vec::<Size>::new()), Size::ZERO);
        assert_eq!(max_size([Size::new(3.0, 4.0)]), Size::new(3.0, 4.0));
        assert_eq!(
            max_size([Size::new(10.0, 1.0), Size::new(2.0, 20.0)]),
            Size::new(10.0, 20.0)
        );
        assert_eq!(
            max_size([Size::new(2.0, 20.0), Size::new(10.0, 1.0), Size::new(5.0, 5.0)]),
            Size::new(10.0, 20.0)
        );
    }

    #[test]
    fn test_min_size_of_leaves_is_zero() {
        let empty = row(vec![]);
        assert_eq!(empty.min_size(), Size::ZERO);

        let nested = row(vec![row(vec![button("a")]).into(), Control::Empty]);
        assert_eq!(nested.min_size(), Size::ZERO);
        assert_eq!(Control::from(nested).min_size(), Size::ZERO);
    }
}
