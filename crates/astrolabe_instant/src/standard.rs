use once_cell::sync::Lazy;

use crate::instant::Instant;
use crate::{ClockSource, NANOS_PER_SECOND};

/// Process-wide origin for standard-library samples.
static ANCHOR: Lazy<std::time::Instant> = Lazy::new(std::time::Instant::now);

/// Fallback clock backed by `std::time::Instant`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdClock;

impl StdClock {
    pub fn new() -> Self {
        Lazy::force(&ANCHOR);
        Self
    }
}

impl ClockSource for StdClock {
    fn now(&self) -> Instant {
        let nanos = ANCHOR.elapsed().as_nanos();
        Instant::from_ticks(u64::try_from(nanos).unwrap_or(u64::MAX))
    }

    fn conversion_factor(&self) -> f64 {
        NANOS_PER_SECOND
    }
}
