//! Monotonic instant sources.
//!
//! Everything that measures time in astrolabe samples a [`ClockSource`]: an
//! opaque, non-decreasing tick counter plus the factor that turns tick
//! differences into seconds. The process-wide clock is resolved once, on first
//! use, by walking an ordered list of backends (native high-resolution counter
//! first, the standard library's monotonic clock as the fallback).

pub mod backend;
pub mod config;
pub mod error;
pub mod instant;
pub mod manual;
pub mod native;
pub mod standard;
pub mod system;

pub use crate::backend::ClockBackend;
pub use crate::config::ClockConfig;
pub use crate::error::ClockError;
pub use crate::instant::Instant;
pub use crate::manual::ManualClock;
pub use crate::native::NativeClock;
pub use crate::standard::StdClock;
pub use crate::system::{GlobalClock, SystemClock, install_system_clock, system_clock};

/// Nanosecond tick rate shared by the native and standard backends.
pub const NANOS_PER_SECOND: f64 = 1e9;

/// A monotonic tick counter.
pub trait ClockSource {
    /// Sample the counter. Successive calls never go backwards.
    fn now(&self) -> Instant;

    /// Ticks per second.
    fn conversion_factor(&self) -> f64;

    /// Seconds elapsed between two samples of this clock.
    fn seconds_between(&self, earlier: Instant, later: Instant) -> f64 {
        later.ticks_since(earlier) as f64 / self.conversion_factor()
    }
}

impl<C: ClockSource + ?Sized> ClockSource for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }

    fn conversion_factor(&self) -> f64 {
        (**self).conversion_factor()
    }
}

/// Sample the process clock.
pub fn instant() -> Instant {
    system_clock().now()
}

/// Ticks per second of the process clock.
pub fn conversion_factor() -> f64 {
    system_clock().conversion_factor()
}
