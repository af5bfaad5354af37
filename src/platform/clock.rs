//! Millisecond clocks
//!
//! The simulation only ever sees plain `u64` timestamps; these are the
//! sources a frame driver reads them from, once per frame.

use std::cell::Cell;
use std::time::Instant;

/// Monotonic time source, milliseconds since start
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// Wall clock backed by `Instant`
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start: u64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn advance(&self, millis: u64) {
        self.now.set(self.now.get().saturating_add(millis));
    }

    /// Jump to `millis`; never goes backwards
    pub fn set(&self, millis: u64) {
        self.now.set(self.now.get().max(millis));
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new(100);
        assert_eq!(clock.now_millis(), 100);
        clock.advance(16);
        assert_eq!(clock.now_millis(), 116);
        clock.set(50);
        assert_eq!(clock.now_millis(), 116);
        clock.set(1000);
        assert_eq!(clock.now_millis(), 1000);
    }

    #[test]
    fn test_system_clock_non_decreasing() {
        let clock = SystemClock::new();
        let a = clock.now_millis();
        let b = clock.now_millis();
        assert!(b >= a);
    }
}
