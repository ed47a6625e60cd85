//! **segctl** -- a segmented button bar for [`ratatui`] applications.
//!
//! [`SegmentedControl`] draws a row of equal-width buttons and a selector
//! highlight (a filled rectangle or an underline) that slides to whichever
//! segment is tapped. It implements [`Component`], so a parent embeds it by
//! forwarding [`Message`]s and mapping the returned [`Command`]s.
//!
//! ```rust,ignore
//! use segctl::{Component, Message, SegmentedControl, SegmentedStyle, SelectorShape, Titles};
//! use segctl::ratatui::layout::Rect;
//!
//! let titles = Titles::parse("Red,Green,Blue")?;
//! let mut palette = SegmentedControl::new("palette", titles)
//!     .with_style(SegmentedStyle {
//!         selector_shape: SelectorShape::Line,
//!         ..SegmentedStyle::default()
//!     })
//!     .with_bounds(Rect::new(0, 0, 30, 3));
//!
//! // Route a click; the parent hears about it through the returned command.
//! let cmd = palette.update(Message::Tap(1));
//! assert_eq!(cmd.into_message(), Some(Message::ValueChanged));
//! assert_eq!(palette.selected_segment_index(), 1);
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`control`] | The [`SegmentedControl`] component |
//! | [`selector`] | Selector geometry and slide animation |
//! | [`style`] | [`SegmentedStyle`] and [`SelectorShape`] |
//! | [`titles`] | Comma-separated title parsing |
//! | [`key`] | Keyboard bindings |
//! | [`error`] | [`ControlError`] |

pub mod control;
pub mod error;
pub mod key;
pub mod selector;
pub mod style;
pub mod titles;

pub use control::{Message, Segment, SegmentedControl};
pub use error::ControlError;
pub use key::{Binding, KeyCombination, SegmentedKeyMap};
pub use selector::{Selector, SelectorAnimation, SelectorFrame};
pub use style::{SegmentedStyle, SelectorShape};
pub use titles::Titles;

pub use segctl_core::{testing, Command, Component, Subscription};

// Re-export dependencies so hosts need not depend on them directly
pub use crossterm;
pub use ratatui;
