//! Spacing properties for layout containers

// ============================================================================
// LayoutProperties
// ============================================================================

/// Padding, margin and border width of a layout container
///
/// Immutable; the `with_*` builders return a copy with one field replaced.
///
/// - `padding` is reserved for a leaf control's own interior spacing
/// - `margin` plus `border` is what [`Layout::inner_rect`] removes
/// - `border` greater than zero makes the layout stroke its outline
///
/// [`Layout::inner_rect`]: crate::ui::layouts::Layout::inner_rect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutProperties {
    pub padding: f64,
    pub margin: f64,
    pub border: f64,
}

impl Default for LayoutProperties {
    fn default() -> Self {
        Self {
            padding: 2.0,
            margin: 5.0,
            border: 1.0,
        }
    }
}

impl LayoutProperties {
    pub fn new(padding: f64, margin: f64, border: f64) -> Self {
        Self {
            padding,
            margin,
            border,
        }
    }

    pub fn with_padding(self, padding: f64) -> Self {
        Self { padding, ..self }
    }

    pub fn with_margin(self, margin: f64) -> Self {
        Self { margin, ..self }
    }

    pub fn with_border(self, border: f64) -> Self {
        Self { border, ..self }
    }

    /// Distance from the outer rect to the content area on each side.
    pub fn inset(&self) -> f64 {
        self.border + self.margin
    }
}
