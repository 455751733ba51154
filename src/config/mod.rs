//! Configuration types for retry policies.

use crate::{DEFAULT_RETRY_MAX_ATTEMPTS, DEFAULT_RETRY_WAIT_MAX_SECS, DEFAULT_RETRY_WAIT_MIN_SECS};
use std::time::Duration;

/// Configuration shared by the retry policies.
///
/// Holds the attempt bound and the wait window for exponential backoff.
/// A config is always kept in normal form: at least one attempt, and a
/// wait window whose upper bound is not below its lower bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Total number of attempts, including the first call
    pub max_attempts: u32,
    /// Lower bound of the backoff wait window
    pub min_wait: Duration,
    /// Upper bound of the backoff wait window
    pub max_wait: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_RETRY_MAX_ATTEMPTS,
            min_wait: Duration::from_secs(DEFAULT_RETRY_WAIT_MIN_SECS),
            max_wait: Duration::from_secs(DEFAULT_RETRY_WAIT_MAX_SECS),
        }
    }
}

impl RetryConfig {
    /// Creates a new configuration builder
    pub fn builder() -> RetryConfigBuilder {
        RetryConfigBuilder::default()
    }

    /// Creates a configuration from environment variables
    ///
    /// Reads `RETRY_MAX_NUM_ATTEMPTS`, `RETRY_WAIT_MIN_SECONDS` and
    /// `RETRY_WAIT_MAX_SECONDS`; unset or unparseable values fall back to
    /// the crate defaults. The result is normalized before it is returned.
    pub fn from_env() -> Self {
        let max_attempts = std::env::var("RETRY_MAX_NUM_ATTEMPTS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_RETRY_MAX_ATTEMPTS);

        let min_wait_secs = std::env::var("RETRY_WAIT_MIN_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_RETRY_WAIT_MIN_SECS);

        let max_wait_secs = std::env::var("RETRY_WAIT_MAX_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_RETRY_WAIT_MAX_SECS);

        Self {
            max_attempts,
            min_wait: Duration::from_secs(min_wait_secs),
            max_wait: Duration::from_secs(max_wait_secs),
        }
        .normalized()
    }

    /// Returns this configuration in normal form.
    ///
    /// Clamps `max_attempts` up to 1 and raises `max_wait` to `min_wait`
    /// when the window is inverted.
    pub fn normalized(mut self) -> Self {
        self.max_attempts = self.max_attempts.max(1);
        if self.max_wait < self.min_wait {
            self.max_wait = self.min_wait;
        }
        self
    }
}

/// Builder for RetryConfig
#[derive(Debug, Default)]
pub struct RetryConfigBuilder {
    max_attempts: Option<u32>,
    min_wait: Option<Duration>,
    max_wait: Option<Duration>,
}

impl RetryConfigBuilder {
    /// Sets the total attempt bound
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Sets the lower bound of the wait window
    pub fn min_wait(mut self, min_wait: Duration) -> Self {
        self.min_wait = Some(min_wait);
        self
    }

    /// Sets the upper bound of the wait window
    pub fn max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = Some(max_wait);
        self
    }

    /// Builds the configuration, normalizing it on the way out
    pub fn build(self) -> RetryConfig {
        RetryConfig {
            max_attempts: self.max_attempts.unwrap_or(DEFAULT_RETRY_MAX_ATTEMPTS),
            min_wait: self
                .min_wait
                .unwrap_or(Duration::from_secs(DEFAULT_RETRY_WAIT_MIN_SECS)),
            max_wait: self
                .max_wait
                .unwrap_or(Duration::from_secs(DEFAULT_RETRY_WAIT_MAX_SECS)),
        }
        .normalized()
    }
}
