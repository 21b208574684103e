use std::fmt;

use thiserror::Error;

/// Interval operation that requires a prior `start`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalOperation {
    Stop,
    Split,
    Duration,
}

impl fmt::Display for IntervalOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IntervalOperation::Stop => "stop",
            IntervalOperation::Split => "split",
            IntervalOperation::Duration => "duration",
        };
        f.write_str(name)
    }
}

/// An interval was used before it was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{operation} called before start")]
pub struct IntervalStateError {
    pub operation: IntervalOperation,
}

impl IntervalStateError {
    pub(crate) fn not_started(operation: IntervalOperation) -> Self {
        Self { operation }
    }
}
