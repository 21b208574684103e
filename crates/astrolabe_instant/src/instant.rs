use std::fmt;

/// A point on a monotonic clock.
///
/// The raw tick count is platform dependent and carries no meaning on its own;
/// only the difference between two instants of the same clock does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(u64);

impl Instant {
    pub const fn from_ticks(ticks: u64) -> Self {
        Self(ticks)
    }

    pub const fn ticks(self) -> u64 {
        self.0
    }

    /// Ticks elapsed since `earlier`, zero if `earlier` is actually later.
    pub const fn ticks_since(self, earlier: Self) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ticks", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_since() {
        let a = Instant::from_ticks(10);
        let b = Instant::from_ticks(25);
        assert_eq!(b.ticks_since(a), 15);
        assert_eq!(a.ticks_since(b), 0);
        assert!(a < b);
    }
}
