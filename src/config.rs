//! Buffer configuration
//!
//! The only recognized option is `capacity`, the total number of retained
//! slots. It can be given inline or loaded from a TOML file:
//!
//! ```toml
//! capacity = 256
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::errors::RingError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingConfig {
    /// Total number of retained slots
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

fn default_capacity() -> usize {
    64
}

impl RingConfig {
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse ring config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read ring config from {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid ring config in {}", path.display()))
    }

    pub fn validate(&self) -> Result<(), RingError> {
        if self.capacity == 0 {
            return Err(RingError::ZeroCapacity);
        }
        Ok(())
    }
}
