//! Configuration management and validation.
//!
//! Provides the configuration structure for the point loading pipeline:
//! the source file location and the bound applied to source reads.

use crate::constants::DEFAULT_READ_TIMEOUT_SECS;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Global configuration for point loading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the source CSV file
    pub source_path: PathBuf,

    /// Bound on a single source file read, in seconds
    pub read_timeout_secs: u64,
}

impl Config {
    /// Create a configuration for the given source file with defaults
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            read_timeout_secs: DEFAULT_READ_TIMEOUT_SECS,
        }
    }

    /// Create configuration with a custom read timeout
    pub fn with_read_timeout_secs(mut self, read_timeout_secs: u64) -> Self {
        self.read_timeout_secs = read_timeout_secs;
        self
    }

    /// The read bound as a [`Duration`]
    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.source_path.as_os_str().is_empty() {
            return Err(Error::configuration(
                "Source path must not be empty".to_string(),
            ));
        }

        if self.read_timeout_secs == 0 {
            return Err(Error::configuration(
                "Read timeout must be greater than 0 seconds".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::new("points.csv");

        assert_eq!(config.source_path, PathBuf::from("points.csv"));
        assert_eq!(config.read_timeout_secs, DEFAULT_READ_TIMEOUT_SECS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = Config::new("points.csv").with_read_timeout_secs(30);

        assert_eq!(config.read_timeout_secs, 30);
        assert_eq!(config.read_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_config_validation() {
        let config = Config::new("");
        assert!(config.validate().is_err());

        let config = Config::new("points.csv").with_read_timeout_secs(0);
        assert!(config.validate().is_err());
    }
}
