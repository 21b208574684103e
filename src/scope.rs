//! Scoped measurement
//!
//! Entering a scope starts the interval; leaving it, on any path including
//! unwinding, stops it exactly once.

use std::ops::Deref;

use astrolabe_instant::ClockSource;

use crate::interval::Interval;

/// Guard returned by [`Interval::scope`]. Stops the interval when dropped.
#[must_use = "dropping the guard immediately stops the interval"]
#[derive(Debug)]
pub struct IntervalScope<'a, C: ClockSource> {
    interval: &'a mut Interval<C>,
}

impl<C: ClockSource> Deref for IntervalScope<'_, C> {
    type Target = Interval<C>;

    fn deref(&self) -> &Self::Target {
        &*self.interval
    }
}

impl<C: ClockSource> Drop for IntervalScope<'_, C> {
    fn drop(&mut self) {
        // The guard started the interval (or found it started), so this
        // cannot fail; a second stop is a no-op.
        let _ = self.interval.stop();
    }
}

impl<C: ClockSource> Interval<C> {
    /// Start the interval and stop it when the returned guard goes out of scope.
    pub fn scope(&mut self) -> IntervalScope<'_, C> {
        self.start();
        IntervalScope { interval: self }
    }

    /// Run `f` inside a scope of this interval.
    pub fn measure<F, T>(&mut self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        let _scope = self.scope();
        f()
    }
}
