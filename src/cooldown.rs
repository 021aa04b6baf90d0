//! Elapsed-time cooldown gate used for fire-rate limiting and meteor spawning.
//!
//! Not Bevy's `Timer`: [`Cooldown::reset`] drops any overshoot past the
//! threshold instead of carrying it forward, so the effective period can
//! jitter by up to one tick.  That behavior is observable (and relied on by
//! the fire cadence), so the two-field type is spelled out here.

use std::time::Duration;

/// A monotonic elapsed-time counter with a fixed threshold and manual reset.
#[derive(Debug, Clone)]
pub struct Cooldown {
    duration: Duration,
    elapsed: Duration,
}

impl Cooldown {
    /// A cooldown that becomes ready once `duration` has accumulated.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Accumulate elapsed time.
    pub fn update(&mut self, delta: Duration) {
        self.elapsed += delta;
    }

    /// Whether the threshold has been reached.
    pub fn is_ready(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Zero the counter.  Overshoot beyond the threshold is discarded.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}
