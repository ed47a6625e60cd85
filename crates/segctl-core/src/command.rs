use std::sync::Arc;

/// A side effect returned from [`Component::update`](crate::Component::update).
///
/// Components never perform work themselves. They describe it as a
/// `Command` and the host (an event loop, a parent component, or the
/// [`ComponentHarness`](crate::testing::ComponentHarness) in tests) decides
/// how to run it. The most common command is [`Command::message`], which is
/// how a component notifies its parent that something happened.
///
/// # Examples
///
/// ```rust,ignore
/// // Nothing to do:
/// let cmd = Command::none();
///
/// // Tell the parent the selection changed:
/// let cmd = Command::message(Message::ValueChanged);
/// ```
pub struct Command<Msg: Send + 'static> {
    pub(crate) inner: CommandInner<Msg>,
}

pub(crate) enum CommandInner<Msg: Send + 'static> {
    None,
    Message(Msg),
}

impl<Msg: Send + 'static> Command<Msg> {
    /// No-op command.
    pub fn none() -> Self {
        Command {
            inner: CommandInner::None,
        }
    }

    /// Deliver a message immediately.
    pub fn message(msg: Msg) -> Self {
        Command {
            inner: CommandInner::Message(msg),
        }
    }

    /// Transform the message type, used when a parent embeds a component.
    pub fn map<NewMsg: Send + 'static>(
        self,
        f: impl Fn(Msg) -> NewMsg + Send + Sync + 'static,
    ) -> Command<NewMsg> {
        self.map_with(Arc::new(f))
    }

    fn map_with<NewMsg: Send + 'static>(
        self,
        f: Arc<dyn Fn(Msg) -> NewMsg + Send + Sync>,
    ) -> Command<NewMsg> {
        match self.inner {
            CommandInner::None => Command::none(),
            CommandInner::Message(msg) => Command::message(f(msg)),
        }
    }

    // --- Inspection methods (useful for testing) ---

    /// Returns `true` if this is a no-op command.
    pub fn is_none(&self) -> bool {
        matches!(self.inner, CommandInner::None)
    }

    /// If this command is an immediate message, return it.
    pub fn into_message(self) -> Option<Msg> {
        match self.inner {
            CommandInner::Message(msg) => Some(msg),
            CommandInner::None => None,
        }
    }

    /// The messages this command carries, in order.
    pub fn into_messages(self) -> Vec<Msg> {
        self.into_message().into_iter().collect()
    }
}
