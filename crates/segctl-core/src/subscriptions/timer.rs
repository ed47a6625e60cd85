use crate::subscription::{SubscriptionId, SubscriptionSource};
use futures::stream::BoxStream;
use futures::StreamExt;
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;

/// A repeating timer that fires at a fixed interval.
///
/// Each tick emits the current [`Instant`]. The `id` field lets several
/// timers coexist, one per animated component.
///
/// # Example
///
/// ```rust,ignore
/// use std::time::Duration;
/// use segctl_core::{subscribe, Every};
///
/// let sub = subscribe(Every::new(Duration::from_millis(16), "palette"))
///     .map(|_| Message::Tick);
/// ```
pub struct Every {
    /// The interval between ticks.
    pub interval: Duration,
    /// Distinguishes this timer from others of the same interval.
    pub id: &'static str,
}

impl Every {
    /// Create a new repeating timer with the given interval and identifier.
    pub fn new(interval: Duration, id: &'static str) -> Self {
        Self { interval, id }
    }
}

impl SubscriptionSource for Every {
    type Output = Instant;

    fn id(&self) -> SubscriptionId {
        SubscriptionId::with_str::<Self>(self.id)
    }

    fn stream(self) -> BoxStream<'static, Instant> {
        // Frames that were missed are dropped rather than replayed in a burst.
        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let stream =
            tokio_stream::wrappers::IntervalStream::new(interval).map(|tick| tick.into_std());
        Box::pin(stream)
    }
}
