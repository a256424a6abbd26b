use std::time::Duration;

/// Capability to run the next game tick after a delay.
///
/// The game loop re-arms the scheduler at the end of every tick that does not
/// end the game, so at most one tick is ever pending and ticks never overlap.
pub trait TickScheduler {
    /// Arms a single tick to fire after `delay`.
    ///
    /// Replaces any tick that is already pending.
    fn schedule(&mut self, delay: Duration);

    /// Drops the pending tick, if any.
    fn cancel(&mut self);
}

/// Scheduler that only records what was requested.
///
/// Lets callers (tests, headless drivers) fire ticks synchronously instead of
/// waiting on a clock.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    pending: Option<Duration>,
    scheduled_count: usize,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay of the pending tick, if one is armed.
    #[must_use]
    pub fn pending(&self) -> Option<Duration> {
        self.pending
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Total number of [`TickScheduler::schedule`] calls so far.
    #[must_use]
    pub fn scheduled_count(&self) -> usize {
        self.scheduled_count
    }

    /// Consumes the pending tick, returning its delay.
    ///
    /// Call this right before running the tick, the same way a timer would
    /// clear itself before invoking its callback.
    pub fn fire(&mut self) -> Option<Duration> {
        self.pending.take()
    }
}

impl TickScheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) {
        self.pending = Some(delay);
        self.scheduled_count += 1;
    }

    fn cancel(&mut self) {
        self.pending = None;
    }
}
