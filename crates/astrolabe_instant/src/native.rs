//! High-resolution counter read straight from the OS.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::backend::ClockBackend;
use crate::error::ClockError;
use crate::instant::Instant;
use crate::{ClockSource, NANOS_PER_SECOND};

#[derive(Debug)]
pub struct NativeClock {
    /// Largest tick value handed out so far.
    high_water: AtomicU64,
}

impl NativeClock {
    /// Probe the counter once. Fails if the platform has no usable monotonic
    /// counter, in which case the caller should fall back to another backend.
    pub fn new() -> Result<Self, ClockError> {
        let first = read_monotonic()?;
        Ok(Self {
            high_water: AtomicU64::new(first),
        })
    }
}

impl ClockSource for NativeClock {
    fn now(&self) -> Instant {
        // A failed read after a successful probe reuses the last value.
        let sampled = read_monotonic().unwrap_or_else(|_| self.high_water.load(Ordering::Relaxed));
        let previous = self.high_water.fetch_max(sampled, Ordering::Relaxed);
        Instant::from_ticks(previous.max(sampled))
    }

    fn conversion_factor(&self) -> f64 {
        NANOS_PER_SECOND
    }
}

#[cfg(unix)]
fn read_monotonic() -> Result<u64, ClockError> {
    let mut ts = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };
    // SAFETY: `ts` is a valid, writable timespec for the duration of the call.
    let rc = unsafe { libc::clock_gettime(libc::CLOCK_MONOTONIC, &mut ts) };
    if rc != 0 {
        return Err(ClockError::Unavailable {
            backend: ClockBackend::Native,
            reason: std::io::Error::last_os_error().to_string(),
        });
    }
    Ok((ts.tv_sec as u64)
        .saturating_mul(1_000_000_000)
        .saturating_add(ts.tv_nsec as u64))
}

#[cfg(not(unix))]
fn read_monotonic() -> Result<u64, ClockError> {
    Err(ClockError::Unsupported {
        backend: ClockBackend::Native,
    })
}
