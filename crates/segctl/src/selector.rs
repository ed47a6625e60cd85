//! The selection highlight and its slide animation.

use crate::style::SelectorShape;
use ratatui::layout::Rect;
use ratatui::style::Color;
use std::time::Duration;

/// How long the selector takes to slide to a newly tapped segment.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(300);

/// Interval of the animation clock; each tick advances the slide by this much.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Height of a [`SelectorShape::Line`] selector, and its distance from the
/// bottom of the control.
pub const LINE_THICKNESS: f64 = 1.0;

/// Position and size in control-local cell units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorFrame {
    /// Left edge, measured from the control's left edge.
    pub x: f64,
    /// Top edge, measured from the control's top edge.
    pub y: f64,
    /// Width; one segment wide.
    pub width: f64,
    /// Height; the full control height for a rectangle.
    pub height: f64,
}

impl SelectorFrame {
    /// Snap to whole cells inside `area`, clipped to it.
    ///
    /// Edges round up, matching how segment columns are laid out.
    pub fn to_cells(&self, area: Rect) -> Rect {
        let left = snap(self.x).max(0.0);
        let right = snap(self.x + self.width).max(left);
        let top = snap(self.y).max(0.0);
        let bottom = snap(self.y + self.height).max(top);

        let cells = Rect::new(
            area.x.saturating_add(clamp_u16(left)),
            area.y.saturating_add(clamp_u16(top)),
            clamp_u16(right - left),
            clamp_u16(bottom - top),
        );
        cells.intersection(area)
    }
}

fn snap(value: f64) -> f64 {
    // Absorb float noise such as 3.0000000000000004.
    (value - 1e-9).ceil()
}

fn clamp_u16(value: f64) -> u16 {
    value.clamp(0.0, f64::from(u16::MAX)) as u16
}

/// The highlight marking the selected segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    shape: SelectorShape,
    frame: SelectorFrame,
    color: Color,
    corner_radius: f64,
}

impl Selector {
    /// Lay out a selector over the first of `count` equal segments of a
    /// `width` x `height` control.
    pub(crate) fn new(
        shape: SelectorShape,
        width: f64,
        height: f64,
        count: usize,
        color: Color,
        corner_radius: f64,
    ) -> Self {
        let segment_width = width / count as f64;
        let (frame, corner_radius) = match shape {
            SelectorShape::Rectangle => (
                SelectorFrame {
                    x: 0.0,
                    y: 0.0,
                    width: segment_width,
                    height,
                },
                corner_radius,
            ),
            SelectorShape::Line => (
                SelectorFrame {
                    x: 0.0,
                    y: height - LINE_THICKNESS,
                    width: segment_width,
                    height: LINE_THICKNESS,
                },
                0.0,
            ),
        };
        Self {
            shape,
            frame,
            color,
            corner_radius,
        }
    }

    /// The selector's shape.
    pub fn shape(&self) -> SelectorShape {
        self.shape
    }

    /// Current frame, including any in-flight animation offset.
    pub fn frame(&self) -> SelectorFrame {
        self.frame
    }

    /// Fill color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Corner radius; always zero for a line.
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    pub(crate) fn set_x(&mut self, x: f64) {
        self.frame.x = x;
    }
}

/// A horizontal slide of the selector from one x position to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorAnimation {
    from: f64,
    to: f64,
    elapsed: Duration,
}

impl SelectorAnimation {
    pub(crate) fn new(from: f64, to: f64) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
        }
    }

    /// Where the slide is heading.
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Linear progress in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        (self.elapsed.as_secs_f64() / ANIMATION_DURATION.as_secs_f64()).min(1.0)
    }

    /// Eased x position at the current progress.
    pub fn position(&self) -> f64 {
        self.from + (self.to - self.from) * ease_in_out(self.progress())
    }

    /// Advance by `dt`. Returns `true` once the slide has reached its target.
    pub(crate) fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed = (self.elapsed + dt).min(ANIMATION_DURATION);
        self.elapsed >= ANIMATION_DURATION
    }
}

/// Quadratic ease-in-out over `0.0..=1.0`.
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}
