//! Clock backend identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Concrete implementation behind the process clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ClockBackend {
    /// Native high-resolution counter (`clock_gettime(CLOCK_MONOTONIC)`)
    #[default]
    Native,
    /// `std::time::Instant`, available everywhere
    Standard,
}

impl ClockBackend {
    /// Backends tried, in order, when `self` is preferred.
    pub fn fallback_chain(self) -> Vec<ClockBackend> {
        match self {
            ClockBackend::Native => vec![ClockBackend::Native, ClockBackend::Standard],
            ClockBackend::Standard => vec![ClockBackend::Standard],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ClockBackend::Native => "native",
            ClockBackend::Standard => "std",
        }
    }
}

impl std::str::FromStr for ClockBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "native" | "high-resolution" | "high_resolution" | "hr" => Ok(ClockBackend::Native),
            "std" | "standard" | "fallback" => Ok(ClockBackend::Standard),
            _ => Err(format!("Unknown clock backend: {}", s)),
        }
    }
}

impl fmt::Display for ClockBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("native".parse::<ClockBackend>(), Ok(ClockBackend::Native));
        assert_eq!("HR".parse::<ClockBackend>(), Ok(ClockBackend::Native));
        assert_eq!(" std ".parse::<ClockBackend>(), Ok(ClockBackend::Standard));
        assert_eq!("Fallback".parse::<ClockBackend>(), Ok(ClockBackend::Standard));
        assert!("rdtsc".parse::<ClockBackend>().is_err());
    }

    #[test]
    fn test_fallback_chain_ends_with_standard() {
        assert_eq!(
            ClockBackend::Native.fallback_chain(),
            vec![ClockBackend::Native, ClockBackend::Standard]
        );
        assert_eq!(
            ClockBackend::Standard.fallback_chain(),
            vec![ClockBackend::Standard]
        );
    }
}
