//! Process clock resolution
//!
//! The process clock is picked exactly once: either explicitly through
//! [`install_system_clock`] or lazily on the first sample, using
//! [`ClockConfig::from_env`]. Nothing switches it afterwards.

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::backend::ClockBackend;
use crate::config::ClockConfig;
use crate::error::ClockError;
use crate::instant::Instant;
use crate::native::NativeClock;
use crate::standard::StdClock;
use crate::ClockSource;

static SYSTEM_CLOCK: OnceCell<SystemClock> = OnceCell::new();

/// The backend chosen for this process
#[derive(Debug)]
pub enum SystemClock {
    Native(NativeClock),
    Standard(StdClock),
}

impl SystemClock {
    /// Try each candidate backend in order and keep the first that works.
    pub fn resolve(config: &ClockConfig) -> Self {
        for backend in config.candidates() {
            match Self::open(backend) {
                Ok(clock) => {
                    debug!(backend = %backend, "selected clock backend");
                    return clock;
                }
                Err(err) => debug!(backend = %backend, error = %err, "clock backend unavailable"),
            }
        }
        debug!(backend = %ClockBackend::Standard, "selected clock backend");
        SystemClock::Standard(StdClock::new())
    }

    fn open(backend: ClockBackend) -> Result<Self, ClockError> {
        match backend {
            ClockBackend::Native => NativeClock::new().map(SystemClock::Native),
            ClockBackend::Standard => Ok(SystemClock::Standard(StdClock::new())),
        }
    }

    pub fn backend(&self) -> ClockBackend {
        match self {
            SystemClock::Native(_) => ClockBackend::Native,
            SystemClock::Standard(_) => ClockBackend::Standard,
        }
    }
}

impl ClockSource for SystemClock {
    fn now(&self) -> Instant {
        match self {
            SystemClock::Native(clock) => clock.now(),
            SystemClock::Standard(clock) => clock.now(),
        }
    }

    fn conversion_factor(&self) -> f64 {
        match self {
            SystemClock::Native(clock) => clock.conversion_factor(),
            SystemClock::Standard(clock) => clock.conversion_factor(),
        }
    }
}

/// The process clock, resolved from the environment on first use.
pub fn system_clock() -> &'static SystemClock {
    SYSTEM_CLOCK.get_or_init(|| SystemClock::resolve(&ClockConfig::from_env()))
}

/// Resolve the process clock from `config` instead of the environment.
///
/// Must run before anything samples the process clock.
pub fn install_system_clock(config: &ClockConfig) -> Result<&'static SystemClock, ClockError> {
    let mut installed = false;
    let clock = SYSTEM_CLOCK.get_or_init(|| {
        installed = true;
        SystemClock::resolve(config)
    });
    if installed {
        Ok(clock)
    } else {
        Err(ClockError::AlreadyInitialized)
    }
}

/// Handle to the process clock
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalClock;

impl ClockSource for GlobalClock {
    fn now(&self) -> Instant {
        system_clock().now()
    }

    fn conversion_factor(&self) -> f64 {
        system_clock().conversion_factor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_standard() {
        let clock = SystemClock::resolve(&ClockConfig::new(ClockBackend::Standard));
        assert_eq!(clock.backend(), ClockBackend::Standard);
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_prefers_native() {
        let clock = SystemClock::resolve(&ClockConfig::new(ClockBackend::Native));
        assert_eq!(clock.backend(), ClockBackend::Native);
        assert_eq!(clock.conversion_factor(), crate::NANOS_PER_SECOND);
    }

    #[test]
    fn test_install_after_first_use() {
        let clock = system_clock();
        assert_eq!(
            install_system_clock(&ClockConfig::default()).unwrap_err(),
            ClockError::AlreadyInitialized
        );
        // still the same clock
        assert!(std::ptr::eq(clock, system_clock()));
    }

    #[test]
    fn test_global_clock_delegates() {
        let global = GlobalClock;
        assert_eq!(
            global.conversion_factor(),
            system_clock().conversion_factor()
        );
        let first = global.now();
        let second = global.now();
        assert!(second >= first);
    }
}
