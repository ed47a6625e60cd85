//! Visual configuration for the segmented control.

use ratatui::style::Color;

/// Shape of the highlight drawn behind the selected segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectorShape {
    /// Fills the whole segment, with the control's corner radius.
    #[default]
    Rectangle,
    /// A thin bar along the bottom edge of the segment.
    Line,
}

impl SelectorShape {
    /// Map a numeric shape code: `0` is [`Rectangle`](Self::Rectangle), `1`
    /// is [`Line`](Self::Line). Any other value falls back to `Rectangle`.
    pub fn from_ordinal(ordinal: i64) -> Self {
        match ordinal {
            1 => SelectorShape::Line,
            _ => SelectorShape::Rectangle,
        }
    }

    /// The numeric code of this shape.
    pub fn ordinal(self) -> i64 {
        match self {
            SelectorShape::Rectangle => 0,
            SelectorShape::Line => 1,
        }
    }
}

/// Visual style configuration for the
/// [`SegmentedControl`](crate::SegmentedControl).
///
/// Lengths are in terminal cells. Negative or non-finite lengths are
/// treated as zero by the control's setters.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentedStyle {
    /// Width of the container border. Zero hides the border.
    pub border_width: f64,
    /// Color of the container border.
    pub border_color: Color,
    /// Corner radius of the container and of a rectangle selector.
    pub corner_radius: f64,
    /// When set, the effective corner radius is half the control height.
    pub rounded_fully: bool,
    /// Label color of unselected segments.
    pub text_color: Color,
    /// Label color of the selected segment.
    pub selector_text_color: Color,
    /// Fill color of the selector.
    pub selector_color: Color,
    /// Shape of the selector.
    pub selector_shape: SelectorShape,
}

impl Default for SegmentedStyle {
    fn default() -> Self {
        Self {
            border_width: 0.0,
            border_color: Color::Reset,
            corner_radius: 0.0,
            rounded_fully: false,
            text_color: Color::Gray,
            selector_text_color: Color::White,
            selector_color: Color::DarkGray,
            selector_shape: SelectorShape::Rectangle,
        }
    }
}

/// Clamp a configured length to a finite, non-negative value.
pub(crate) fn sanitize_length(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
