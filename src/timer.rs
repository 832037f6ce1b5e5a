use std::time::{Duration, Instant};

/// Cadence of the stopwatch
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A running periodic tick source.
///
/// Due times are anchored to the instant the schedule was created
/// (`anchor + n * period`), so late polls never push later ticks back.
/// Dropping the schedule cancels it; nothing fires afterwards.
#[derive(Debug, Clone)]
pub struct TickSchedule {
    period: Duration,
    anchor: Instant,
    delivered: u32,
}

impl TickSchedule {
    pub fn new(period: Duration, anchor: Instant) -> Self {
        assert!(!period.is_zero(), "tick period must be non-zero");
        Self {
            period,
            anchor,
            delivered: 0,
        }
    }

    pub fn every_second(anchor: Instant) -> Self {
        Self::new(TICK_PERIOD, anchor)
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of ticks that came due since the last call. Consumes them.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.anchor);
        let total = (elapsed.as_nanos() / self.period.as_nanos()).min(u32::MAX as u128) as u32;
        let due = total.saturating_sub(self.delivered);
        self.delivered = total.max(self.delivered);
        due
    }

    /// Time left until the next tick comes due (zero if one is already pending)
    pub fn until_next(&self, now: Instant) -> Duration {
        let next_due = self.anchor + self.period * (self.delivered + 1);
        next_due.saturating_duration_since(now)
    }
}
