//! Clock configuration
//!
//! Picks which backend serves the process clock. Read once, when the clock is
//! first resolved; later changes have no effect.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::backend::ClockBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ClockConfig {
    /// Backend tried first; `Standard` is always the last resort
    pub preferred: ClockBackend,
}

impl ClockConfig {
    pub const ENV_VAR: &'static str = "ASTROLABE_CLOCK";

    pub fn new(preferred: ClockBackend) -> Self {
        Self { preferred }
    }

    /// Load configuration from `ASTROLABE_CLOCK`
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(Self::ENV_VAR).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(val) = value {
            match val.parse() {
                Ok(backend) => config.preferred = backend,
                Err(err) => warn!(var = Self::ENV_VAR, error = %err, "ignoring clock override"),
            }
        }

        config
    }

    /// Backends to try, in order
    pub fn candidates(&self) -> Vec<ClockBackend> {
        self.preferred.fallback_chain()
    }

    /// Load configuration from TOML file
    #[cfg(feature = "toml-config")]
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: ClockConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from TOML file (stub when toml feature is disabled)
    #[cfg(not(feature = "toml-config"))]
    pub fn from_file(_path: &Path) -> anyhow::Result<Self> {
        anyhow::bail!("TOML support not enabled. Enable the 'toml-config' feature.")
    }

    /// Save configuration to TOML file
    #[cfg(feature = "toml-config")]
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Save configuration to TOML file (stub when toml feature is disabled)
    #[cfg(not(feature = "toml-config"))]
    pub fn save_to_file(&self, _path: &Path) -> anyhow::Result<()> {
        anyhow::bail!("TOML support not enabled. Enable the 'toml-config' feature.")
    }
}
