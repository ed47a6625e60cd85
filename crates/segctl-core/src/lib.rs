//! Component runtime for the **segctl** widgets.
//!
//! `segctl-core` holds the small set of types a [`ratatui`] widget needs to
//! live inside an Elm-style application: state changes happen in
//! [`Component::update`], side effects leave as [`Command`]s, and clocks
//! arrive through [`Subscription`]s.
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Component`] | Reusable widget that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | A side effect or a notification for the parent |
//! | [`Subscription`] | Long-lived event source (animation timers) |
//! | [`Every`] | Repeating timer source |
//! | [`ComponentHarness`](testing::ComponentHarness) | Headless harness for unit-testing a component |

pub mod command;
pub mod component;
pub mod subscription;
pub mod subscriptions;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use subscription::{subscribe, Subscription, SubscriptionId, SubscriptionSource};
pub use subscriptions::Every;
