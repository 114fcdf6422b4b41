//! Owned repeat timer for held seeks.
//!
//! The timer does not run on its own: the host polls it with the current
//! instant and it reports whether a tick is due. Because the controller owns
//! the only handle, cancelling is just dropping it, and a cancelled timer can
//! never fire again.

use std::time::{Duration, Instant};

/// A periodic deadline, cancelled by drop.
#[derive(Debug)]
pub struct RepeatTimer {
    interval: Duration,
    /// `None` once the deadline no longer fits in an `Instant`
    next_due: Option<Instant>,
}

impl RepeatTimer {
    /// Start a timer whose first tick is one interval after `now`.
    ///
    /// A zero interval is bumped to one millisecond so a poll loop cannot
    /// spin forever on a single instant.
    pub fn start(interval: Duration, now: Instant) -> Self {
        let interval = interval.max(Duration::from_millis(1));
        Self {
            interval,
            next_due: now.checked_add(interval),
        }
    }

    /// Instant at which the next tick becomes due.
    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Consume one tick if it is due at `now`.
    ///
    /// Call repeatedly to catch up after a late poll; each call advances the
    /// deadline by exactly one interval.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = due.checked_add(self.interval);
                true
            }
            _ => false,
        }
    }

    /// Drop any overdue ticks: the next one is due one interval after `now`.
    pub fn resync(&mut self, now: Instant) {
        self.next_due = now.checked_add(self.interval);
    }
}
