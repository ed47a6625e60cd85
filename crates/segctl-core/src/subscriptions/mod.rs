//! Built-in subscription sources.
//!
//! - **Frame clock** ([`Every`]) -- a repeating timer, used to step
//!   animations.

mod timer;

pub use timer::*;
