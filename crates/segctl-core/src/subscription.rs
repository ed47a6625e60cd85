use futures::stream::BoxStream;
use futures::StreamExt;
use std::any::TypeId;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

/// A long-lived event source, such as an animation clock.
///
/// Components return subscriptions from
/// [`Component::subscriptions`](crate::Component::subscriptions). The host
/// compares ids between update cycles: an id that appears is
/// [`start`](Subscription::start)ed, an id that disappears has its
/// [`AbortHandle`] aborted, and an id that persists is left running.
pub struct Subscription<Msg: Send + 'static> {
    id: SubscriptionId,
    spawn: Box<dyn FnOnce(mpsc::UnboundedSender<Msg>) -> AbortHandle + Send>,
}

/// Identity used to diff subscriptions between update cycles.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId {
    type_id: TypeId,
    discriminant: u64,
}

impl SubscriptionId {
    /// Create an ID from a type and a numeric discriminant.
    pub fn new<T: 'static>(discriminant: u64) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            discriminant,
        }
    }

    /// Create an ID from a type and a string discriminant.
    pub fn with_str<T: 'static>(s: &str) -> Self {
        let mut hasher = std::hash::DefaultHasher::new();
        s.hash(&mut hasher);
        Self::new::<T>(hasher.finish())
    }
}

/// Something that yields a stream of values for as long as it is subscribed.
pub trait SubscriptionSource: Send + 'static {
    /// The type of values this source emits.
    type Output: Send + 'static;

    /// Unique ID for this subscription instance.
    fn id(&self) -> SubscriptionId;

    /// Create the stream. Called once, when the subscription starts.
    fn stream(self) -> BoxStream<'static, Self::Output>;
}

/// Create a [`Subscription`] from a [`SubscriptionSource`].
pub fn subscribe<S: SubscriptionSource>(source: S) -> Subscription<S::Output> {
    let id = source.id();
    Subscription::from_stream_fn(id, move || source.stream())
}

impl<Msg: Send + 'static> Subscription<Msg> {
    fn from_stream_fn(
        id: SubscriptionId,
        make: impl FnOnce() -> BoxStream<'static, Msg> + Send + 'static,
    ) -> Self {
        Subscription {
            id,
            spawn: Box::new(move |tx| {
                let handle = tokio::spawn(async move {
                    let mut stream = make();
                    while let Some(msg) = stream.next().await {
                        if tx.send(msg).is_err() {
                            break;
                        }
                    }
                });
                handle.abort_handle()
            }),
        }
    }

    /// The identity the host diffs on.
    pub fn id(&self) -> &SubscriptionId {
        &self.id
    }

    /// Spawn the source on the current tokio runtime, forwarding every value
    /// into `tx`. The task ends on its own once `tx`'s receiver is dropped.
    pub fn start(self, tx: mpsc::UnboundedSender<Msg>) -> AbortHandle {
        (self.spawn)(tx)
    }

    /// Transform the message type (for component composition).
    pub fn map<NewMsg: Send + 'static>(
        self,
        f: impl Fn(Msg) -> NewMsg + Send + Sync + 'static,
    ) -> Subscription<NewMsg> {
        let f = Arc::new(f);
        Subscription {
            id: self.id,
            spawn: Box::new(move |new_tx: mpsc::UnboundedSender<NewMsg>| {
                let (inner_tx, mut inner_rx) = mpsc::unbounded_channel::<Msg>();
                let abort = (self.spawn)(inner_tx);

                // Ends when the source is aborted and inner_tx drops.
                tokio::spawn(async move {
                    while let Some(msg) = inner_rx.recv().await {
                        if new_tx.send(f(msg)).is_err() {
                            break;
                        }
                    }
                });

                abort
            }),
        }
    }
}
