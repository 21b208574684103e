//! Timer library for recording performance metrics.
//!
//! Measure a block:
//!
//! ```
//! use astrolabe::Interval;
//!
//! let mut interval = Interval::new();
//! interval.measure(|| {
//!     // work
//! });
//! assert!(interval.stopped());
//! ```
//!
//! Or measure something specifically:
//!
//! ```
//! use astrolabe::Interval;
//!
//! let mut interval = Interval::now_and_started();
//! let seconds = interval.stop()?.unwrap_or_default();
//! assert!(seconds >= 0.0);
//! # Ok::<(), astrolabe::IntervalStateError>(())
//! ```

pub mod error;
pub mod interval;
pub mod scope;

pub use crate::error::{IntervalOperation, IntervalStateError};
pub use crate::interval::{Interval, IntervalState};
pub use crate::scope::IntervalScope;

pub use astrolabe_instant::{
    ClockBackend, ClockConfig, ClockError, ClockSource, GlobalClock, Instant, ManualClock,
    SystemClock, conversion_factor, install_system_clock, instant, system_clock,
};
pub use astrolabe_utils::init_logging;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_clock_backs_default_intervals() {
        init_logging();
        let mut interval = Interval::now_and_started();
        assert_eq!(interval.clock().conversion_factor(), conversion_factor());
        assert!(conversion_factor() > 0.0);

        let before = instant();
        let seconds = interval.stop().unwrap().unwrap();
        assert!(seconds >= 0.0);
        assert!(interval.stop_instant().unwrap() >= before);
    }
}
