//! The interval timer
//!
//! An [`Interval`] is the lowest level timing mechanism: it records one start
//! instant and one stop instant on a monotonic clock and reports the time
//! between them in seconds.
//!
//! ```
//! use astrolabe::Interval;
//!
//! let mut interval = Interval::new();
//! interval.start();
//! let seconds = interval.stop().unwrap();
//! assert!(seconds.is_some());
//! ```
//!
//! Both `start` and `stop` are one-shot. Repeating them is a no-op that
//! reports `false`/`None`; calling `stop` before `start` is an error.

use astrolabe_instant::{ClockSource, GlobalClock, Instant};

use crate::error::{IntervalOperation, IntervalStateError};

/// Where an interval is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalState {
    Unstarted,
    Running,
    Stopped,
}

/// A start/stop pair on a monotonic clock.
///
/// Not synchronised: mutating operations take `&mut self`, so sharing one
/// interval between threads needs an external lock.
#[derive(Debug, Clone)]
pub struct Interval<C = GlobalClock> {
    clock: C,
    start_instant: Option<Instant>,
    stop_instant: Option<Instant>,
    cached_duration: Option<f64>,
}

impl Interval {
    /// Unstarted interval on the process clock.
    pub fn new() -> Self {
        Self::with_clock(GlobalClock)
    }

    /// Interval on the process clock that has already started.
    pub fn now_and_started() -> Self {
        Self::now_and_started_with(GlobalClock)
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ClockSource> Interval<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            start_instant: None,
            stop_instant: None,
            cached_duration: None,
        }
    }

    pub fn now_and_started_with(clock: C) -> Self {
        let mut interval = Self::with_clock(clock);
        interval.start();
        interval
    }

    /// Mark the start of the interval.
    ///
    /// Returns `false` if the interval had already started; the recorded start
    /// is never moved.
    pub fn start(&mut self) -> bool {
        if self.start_instant.is_some() {
            return false;
        }
        self.start_instant = Some(self.clock.now());
        true
    }

    /// Mark the stop of the interval.
    ///
    /// Returns the duration in seconds the first time, `None` on later calls.
    pub fn stop(&mut self) -> Result<Option<f64>, IntervalStateError> {
        self.stop_for(IntervalOperation::Stop)
    }

    fn stop_for(&mut self, operation: IntervalOperation) -> Result<Option<f64>, IntervalStateError> {
        let start = self
            .start_instant
            .ok_or(IntervalStateError::not_started(operation))?;
        if self.stop_instant.is_some() {
            return Ok(None);
        }

        let stop = self.clock.now();
        let duration = self.clock.seconds_between(start, stop);
        self.stop_instant = Some(stop);
        self.cached_duration = Some(duration);
        Ok(Some(duration))
    }

    /// Stop this interval and start a new one at the same instant.
    ///
    /// The returned interval is already running and shares this interval's
    /// clock, so consecutive splits tile time without gaps.
    pub fn split(&mut self) -> Result<Self, IntervalStateError>
    where
        C: Clone,
    {
        self.stop_for(IntervalOperation::Split)?;
        Ok(Self {
            clock: self.clock.clone(),
            start_instant: self.stop_instant,
            stop_instant: None,
            cached_duration: None,
        })
    }

    /// Seconds since start while running, `None` otherwise.
    pub fn duration_so_far(&self) -> Option<f64> {
        match (self.start_instant, self.stop_instant) {
            (Some(start), None) => Some(self.clock.seconds_between(start, self.clock.now())),
            _ => None,
        }
    }

    /// Length of the interval in seconds.
    ///
    /// While running this is the time elapsed so far and grows between calls;
    /// once stopped it is fixed.
    pub fn duration(&self) -> Result<f64, IntervalStateError> {
        if let Some(duration) = self.cached_duration {
            return Ok(duration);
        }
        match (self.start_instant, self.stop_instant) {
            (Some(start), None) => Ok(self.clock.seconds_between(start, self.clock.now())),
            (Some(start), Some(stop)) => Ok(self.clock.seconds_between(start, stop)),
            (None, _) => Err(IntervalStateError::not_started(
                IntervalOperation::Duration,
            )),
        }
    }

    pub fn state(&self) -> IntervalState {
        match (self.start_instant, self.stop_instant) {
            (None, _) => IntervalState::Unstarted,
            (Some(_), None) => IntervalState::Running,
            (Some(_), Some(_)) => IntervalState::Stopped,
        }
    }

    pub fn started(&self) -> bool {
        self.start_instant.is_some()
    }

    pub fn stopped(&self) -> bool {
        self.stop_instant.is_some()
    }

    /// Started but not yet stopped.
    pub fn running(&self) -> bool {
        self.state() == IntervalState::Running
    }

    /// Raw start sample; only meaningful relative to another instant.
    pub fn start_instant(&self) -> Option<Instant> {
        self.start_instant
    }

    /// Raw stop sample; only meaningful relative to another instant.
    pub fn stop_instant(&self) -> Option<Instant> {
        self.stop_instant
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
