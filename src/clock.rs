use std::time::Duration;
use tokio::time::{interval, Interval, MissedTickBehavior};

/// Fixed-rate tick source.
///
/// The first `wait` returns immediately; later ones return on each period
/// boundary. A late tick is dropped rather than replayed in a burst.
pub struct TickClock {
    interval: Interval,
}

impl TickClock {
    /// Must be called from inside a tokio runtime
    pub fn new(period: Duration) -> Self {
        let mut interval = interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { interval }
    }

    pub async fn wait(&mut self) {
        self.interval.tick().await;
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }
}
