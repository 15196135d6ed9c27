//! One-shot, re-armable tick deadline for the event loop.

use std::time::{Duration, Instant};

/// Tick cadence while a round is running.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Schedules the next countdown tick.
///
/// The ticker holds at most one pending deadline. It fires once and must be
/// re-armed by its owner, which only does so while a round is in progress.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}

impl Ticker {
    /// Create a disarmed ticker with the given interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// Schedule the next tick one interval after `now`.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    /// Drop any pending tick.
    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    /// Whether a tick is pending.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Whether the pending tick is due at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|d| now >= d)
    }

    /// How long the event loop may wait for input before the next tick.
    /// `None` when nothing is pending.
    pub fn time_until(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }
}
