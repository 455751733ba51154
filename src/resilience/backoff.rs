use crate::config::RetryConfig;
use rand::Rng;
use std::time::Duration;

/// How long a policy waits between attempts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaitStrategy {
    /// Full-jitter exponential backoff bounded to a window.
    ///
    /// After the k-th failed attempt the wait is drawn uniformly from
    /// `[min, clamp(min * 2^(k-1), min, max)]`: the ceiling doubles with
    /// every failure until it saturates at `max`, while `min` floors
    /// every draw.
    RandomExponential {
        /// Lower bound of every draw
        min: Duration,
        /// Upper bound the ceiling saturates at
        max: Duration,
    },
    /// No wait between attempts
    None,
}

impl WaitStrategy {
    /// Builds the exponential strategy over a configuration's wait window.
    pub fn random_exponential(config: &RetryConfig) -> Self {
        WaitStrategy::RandomExponential {
            min: config.min_wait,
            max: config.max_wait,
        }
    }

    /// Draws the wait that follows the `attempt`-th failure (1-based).
    ///
    /// Each call draws independently; the strategy itself carries no
    /// state, so one value shared across concurrent executions never
    /// correlates their waits.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        match *self {
            WaitStrategy::None => Duration::ZERO,
            WaitStrategy::RandomExponential { min, max } => {
                let exponent = attempt.saturating_sub(1).min(63) as i32;
                let min_secs = min.as_secs_f64();
                // Tolerate an inverted window from hand-built strategies.
                let max_secs = max.as_secs_f64().max(min_secs);
                let ceiling = (min_secs * 2f64.powi(exponent)).clamp(min_secs, max_secs);
                let drawn = rand::thread_rng().gen_range(min_secs..=ceiling);
                Duration::from_secs_f64(drawn)
            }
        }
    }
}
