use thiserror::Error;

use crate::backend::ClockBackend;

/// Failures while selecting the process clock. Sampling never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    #[error("unable to retrieve instant from {backend} clock: {reason}")]
    Unavailable {
        backend: ClockBackend,
        reason: String,
    },

    #[error("{backend} clock is not supported on this platform")]
    Unsupported { backend: ClockBackend },

    #[error("process clock was already initialized")]
    AlreadyInitialized,
}
