//! Meter configuration
//!
//! Resolves runtime settings from the environment.

use std::num::ParseIntError;
use std::time::Duration;
use thiserror::Error;

/// Environment variable overriding the keystroke debounce, in milliseconds.
pub const DEBOUNCE_ENV: &str = "CREDENTIAL_METER_DEBOUNCE_MS";

/// Default delay before an async evaluation runs.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid CREDENTIAL_METER_DEBOUNCE_MS value {value:?}: {source}")]
    InvalidDebounce {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeterConfig {
    /// How long an async evaluation waits for a newer keystroke to
    /// supersede it.
    pub debounce: Duration,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

impl MeterConfig {
    /// Builds the configuration from environment variables.
    ///
    /// # Environment Variable
    ///
    /// Set `CREDENTIAL_METER_DEBOUNCE_MS` to change the debounce delay.
    /// If not set, defaults to 300 ms.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDebounce`] if the variable is set but is
    /// not a non-negative integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let debounce = match std::env::var(DEBOUNCE_ENV) {
            Ok(raw) => parse_debounce(&raw)?,
            Err(_) => DEFAULT_DEBOUNCE,
        };

        #[cfg(feature = "tracing")]
        tracing::info!("Meter configured: debounce {:?}", debounce);

        Ok(Self { debounce })
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}

fn parse_debounce(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|source| {
            #[cfg(feature = "tracing")]
            tracing::warn!("Rejected {} value {:?}", DEBOUNCE_ENV, raw);
            ConfigError::InvalidDebounce {
                value: raw.to_string(),
                source,
            }
        })
}
