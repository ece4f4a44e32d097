//! Game configuration

use std::time::Duration;
use thiserror::Error;

/// Guesses allowed per hurdle
pub const HURDLE_MAX_ATTEMPTS: usize = 4;

/// Guesses allowed in a classic single game
pub const CLASSIC_MAX_ATTEMPTS: usize = 6;

/// Random draws tried before scanning the word list for a distinct secret
pub const RANDOM_DRAW_ATTEMPTS: usize = 10;

/// Upper bound on any awaited external lookup
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(3);

/// Tunables shared by the controllers and dictionaries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HurdleConfig {
    pub max_attempts: usize,
    pub random_draw_attempts: usize,
    pub lookup_timeout: Duration,
    /// Extra attempts made against a remote word source after the first failure
    pub lookup_retries: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max attempts must be at least 1")]
    ZeroAttempts,
    #[error("lookup timeout must be greater than zero")]
    ZeroTimeout,
}

impl HurdleConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: HURDLE_MAX_ATTEMPTS,
            random_draw_attempts: RANDOM_DRAW_ATTEMPTS,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
            lookup_retries: 1,
        }
    }

    /// Same tunables with the classic attempt limit
    #[must_use]
    pub const fn classic() -> Self {
        Self {
            max_attempts: CLASSIC_MAX_ATTEMPTS,
            ..Self::new()
        }
    }

    /// Check the configuration is playable
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `max_attempts` or `lookup_timeout` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        if self.lookup_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

impl Default for HurdleConfig {
    fn default() -> Self {
        Self::new()
    }
}
