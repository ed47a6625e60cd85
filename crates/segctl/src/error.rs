//! Error type for the segmented control.

/// Errors reported by [`SegmentedControl`](crate::SegmentedControl) and
/// [`Titles`](crate::Titles).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControlError {
    /// The title string was empty, which would leave the control with no
    /// segment to lay out.
    #[error("button titles must not be empty")]
    EmptyTitles,
    /// A tap addressed a segment the control does not have.
    #[error("segment {index} out of range for {count} segments")]
    SegmentOutOfRange {
        /// The index that was tapped.
        index: usize,
        /// How many segments the control currently has.
        count: usize,
    },
}
