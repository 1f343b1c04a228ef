//! Fixed-interval tick scheduling.
//!
//! The ticker never owns a thread or a timer. The frame loop asks it how many
//! ticks became due since the last call and when the next one is expected.

use std::time::{Duration, Instant};

/// Default simulation cadence (1 Hz).
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Tracks when the next simulation tick is due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}

impl Ticker {
    /// A zero interval is bumped to one millisecond.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            next_due: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Arm the ticker; the first tick is due one interval from `now`.
    /// Re-arming an armed ticker keeps its current deadline.
    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.interval);
        }
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Number of whole intervals that elapsed up to `now`.
    ///
    /// Advances the deadline past `now`, so each interval is reported once.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let Some(mut due) = self.next_due else {
            return 0;
        };

        let mut ticks = 0;
        while due <= now {
            ticks += 1;
            due += self.interval;
        }
        self.next_due = Some(due);
        ticks
    }

    /// Time left until the next tick, `None` while stopped.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due
            .map(|due| due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopped_ticker_never_fires() {
        let mut t = Ticker::default();
        let now = Instant::now();
        assert_eq!(t.due_ticks(now + Duration::from_secs(10)), 0);
        assert_eq!(t.time_until_next(now), None);
    }

    #[test]
    fn fires_once_per_interval() {
        let mut t = Ticker::new(Duration::from_millis(1000));
        let t0 = Instant::now();
        t.start(t0);

        assert_eq!(t.due_ticks(t0 + Duration::from_millis(999)), 0);
        assert_eq!(t.due_ticks(t0 + Duration::from_millis(1000)), 1);
        assert_eq!(t.due_ticks(t0 + Duration::from_millis(1500)), 0);
        assert_eq!(t.due_ticks(t0 + Duration::from_millis(3200)), 2);
        assert_eq!(
            t.time_until_next(t0 + Duration::from_millis(3200)),
            Some(Duration::from_millis(800))
        );
    }

    #[test]
    fn restart_does_not_move_deadline() {
        let mut t = Ticker::new(Duration::from_secs(1));
        let t0 = Instant::now();
        t.start(t0);
        t.start(t0 + Duration::from_millis(900));
        assert_eq!(t.due_ticks(t0 + Duration::from_secs(1)), 1);
    }

    #[test]
    fn stop_disarms() {
        let mut t = Ticker::default();
        let t0 = Instant::now();
        t.start(t0);
        t.stop();
        assert!(!t.is_armed());
        assert_eq!(t.due_ticks(t0 + Duration::from_secs(5)), 0);
    }
}
