//! Manually driven clock

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::ClockSource;
use crate::instant::Instant;

/// Clock that only moves when told to.
///
/// Clones share the same counter, so a test can keep one handle to advance
/// time while intervals sample through another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    ticks: Arc<AtomicU64>,
    ticks_per_second: f64,
}

impl ManualClock {
    pub fn new(ticks_per_second: f64) -> Self {
        Self {
            ticks: Arc::new(AtomicU64::new(0)),
            ticks_per_second,
        }
    }

    /// Move the clock forward by `ticks`.
    pub fn advance(&self, ticks: u64) {
        self.ticks.fetch_add(ticks, Ordering::SeqCst);
    }

    /// Move the clock to `ticks`. Earlier values are ignored so the clock
    /// never runs backwards.
    pub fn set(&self, ticks: u64) {
        self.ticks.fetch_max(ticks, Ordering::SeqCst);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(crate::NANOS_PER_SECOND)
    }
}

impl ClockSource for ManualClock {
    fn now(&self) -> Instant {
        Instant::from_ticks(self.ticks.load(Ordering::SeqCst))
    }

    fn conversion_factor(&self) -> f64 {
        self.ticks_per_second
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_time() {
        let clock = ManualClock::default();
        let handle = clock.clone();
        handle.advance(42);
        assert_eq!(clock.now().ticks(), 42);
    }

    #[test]
    fn test_set_never_rewinds() {
        let clock = ManualClock::new(1.0);
        clock.set(100);
        clock.set(50);
        assert_eq!(clock.now().ticks(), 100);
    }
}
