//! Timed power-up effects
//!
//! Effects never fire an expiry event. Whether one is still running is a pure
//! function of the current tick's timestamp, so a stale effect left on a
//! player simply stops mattering.

use serde::{Deserialize, Serialize};

/// A timed buff started at a given millisecond timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEffect {
    pub started_at: u64,
    pub duration: u64,
}

impl ActiveEffect {
    pub fn new(started_at: u64, duration: u64) -> Self {
        Self {
            started_at,
            duration,
        }
    }

    /// Active while strictly less than `duration` has elapsed
    #[inline]
    pub fn is_active(&self, now: u64) -> bool {
        now.saturating_sub(self.started_at) < self.duration
    }

    /// Milliseconds left, zero once expired
    pub fn remaining(&self, now: u64) -> u64 {
        self.duration
            .saturating_sub(now.saturating_sub(self.started_at))
    }
}

/// Query an optional effect slot
#[inline]
pub fn is_active(effect: Option<ActiveEffect>, now: u64) -> bool {
    effect.is_some_and(|e| e.is_active(now))
}
