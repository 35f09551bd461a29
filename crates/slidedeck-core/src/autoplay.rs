//! Auto-advance timer, driven by elapsed-time ticks from the host loop.

/// Counts elapsed time and reports how many advances are due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoPlay {
    /// Time between advances in milliseconds. Never zero.
    pub interval_ms: u64,
    /// Time accumulated since the last advance or reset.
    pub elapsed_ms: u64,
}

impl AutoPlay {
    /// `None` for a zero interval.
    pub fn new(interval_ms: u64) -> Option<Self> {
        (interval_ms > 0).then_some(Self {
            interval_ms,
            elapsed_ms: 0,
        })
    }

    /// Advance by `dt_ms` and return the number of whole intervals that
    /// elapsed. The remainder carries over.
    pub fn tick(&mut self, dt_ms: u64) -> u64 {
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        let due = self.elapsed_ms / self.interval_ms;
        self.elapsed_ms %= self.interval_ms;
        due
    }

    /// Restart the interval, e.g. after the user navigated by hand.
    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }
}
