use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::{layout::Rect, Frame};

/// A self-contained piece of UI that renders into a given [`Rect`].
///
/// A component owns its state, reacts to messages in
/// [`update`](Component::update), draws itself in [`view`](Component::view)
/// and declares any timers it needs through
/// [`subscriptions`](Component::subscriptions). It never talks to its host
/// directly: notifications flow outward as [`Command`]s.
///
/// # Composition pattern
///
/// A parent wraps the child's message type in one of its own variants and
/// lifts the child's commands with [`Command::map`]:
///
/// ```rust,ignore
/// use segctl_core::{Command, Component};
///
/// enum ScreenMsg {
///     Palette(segctl::Message),
/// }
///
/// impl Screen {
///     fn update(&mut self, msg: ScreenMsg) -> Command<ScreenMsg> {
///         match msg {
///             ScreenMsg::Palette(segctl::Message::ValueChanged) => {
///                 self.mode = self.palette.selected_segment_index();
///                 Command::none()
///             }
///             ScreenMsg::Palette(m) => self.palette.update(m).map(ScreenMsg::Palette),
///         }
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's own message type.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] for side
    /// effects. The parent should [`map`](Command::map) the result into its
    /// own message type.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into `area`. Implementations must not draw outside it.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Subscriptions that should be active given the current state.
    ///
    /// The host re-queries this after every update and starts or stops
    /// sources by their [`SubscriptionId`](crate::SubscriptionId).
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }

    /// Whether this component currently wants keyboard input.
    fn focused(&self) -> bool {
        false
    }
}
