use crate::config::RetryConfig;
use crate::errors::{ErrorKind, TargetResult};
use crate::resilience::backoff::WaitStrategy;
use crate::resilience::observer::{RetryAttempt, RetryObserver, TracingRetryObserver};
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tokio::time::sleep;

/// Retry policy that re-runs an operation while it fails with matching
/// error kinds.
///
/// A policy is immutable once built and carries no per-call state, so a
/// single instance can drive any number of concurrent executions. Three
/// stock policies cover the usual seams of a target integration:
/// [`RetryPolicy::for_target`] for throttled or empty completions,
/// [`RetryPolicy::for_json`] for unparseable structured output, and
/// [`RetryPolicy::for_placeholder`] for prompt templates rendered without
/// their placeholder.
pub struct RetryPolicy {
    max_attempts: u32,
    retry_on: Vec<ErrorKind>,
    wait: WaitStrategy,
    observer: Arc<dyn RetryObserver>,
}

impl RetryPolicy {
    /// Creates a policy retrying the given kinds with the given wait
    /// strategy.
    ///
    /// The attempt bound comes from `config` and is clamped up to 1; the
    /// default observer logs each failed attempt through `tracing`.
    pub fn new(
        config: &RetryConfig,
        retry_on: impl Into<Vec<ErrorKind>>,
        wait: WaitStrategy,
    ) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            retry_on: retry_on.into(),
            wait,
            observer: Arc::new(TracingRetryObserver),
        }
    }

    /// Policy for calls against a generation target: retries throttles and
    /// empty completions with exponential backoff.
    pub fn for_target(config: &RetryConfig) -> Self {
        Self::new(
            config,
            [ErrorKind::RateLimit, ErrorKind::EmptyResponse],
            WaitStrategy::random_exponential(config),
        )
    }

    /// Policy for parsing structured output: retries invalid JSON with
    /// exponential backoff.
    pub fn for_json(config: &RetryConfig) -> Self {
        Self::new(
            config,
            [ErrorKind::InvalidJson],
            WaitStrategy::random_exponential(config),
        )
    }

    /// Policy for prompt-template rendering: retries missing placeholders
    /// immediately, with no wait between attempts.
    pub fn for_placeholder(config: &RetryConfig) -> Self {
        Self::new(config, [ErrorKind::MissingPlaceholder], WaitStrategy::None)
    }

    /// Replaces the observer notified on failed attempts.
    pub fn with_observer(mut self, observer: Arc<dyn RetryObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Total attempt bound, including the first call.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Returns true if a failure of this kind would be retried.
    pub fn retries_on(&self, kind: ErrorKind) -> bool {
        self.retry_on.contains(&kind)
    }

    /// Executes `f` until it succeeds, fails with a non-matching error, or
    /// the attempt bound is reached.
    ///
    /// Non-matching failures return immediately after a single invocation.
    /// Matching failures notify the observer, then either back off and
    /// retry or, once the bound is hit, surface the last error unchanged.
    /// Dropping the returned future between attempts cancels the loop;
    /// no further invocation of `f` is started.
    ///
    /// # Examples
    ///
    /// ```
    /// use integrations_resilience::{RetryConfig, RetryPolicy, TargetResult};
    ///
    /// let config = RetryConfig::builder().max_attempts(3).build();
    /// let policy = RetryPolicy::for_json(&config);
    ///
    /// let result: TargetResult<&str> = tokio_test::block_on(
    ///     policy.execute("parse_scores", || async { Ok("{\"score\": 7}") }),
    /// );
    /// assert_eq!(result.unwrap(), "{\"score\": 7}");
    /// ```
    pub async fn execute<F, Fut, T>(&self, operation: &str, f: F) -> TargetResult<T>
    where
        F: Fn() -> Fut + Send,
        Fut: Future<Output = TargetResult<T>> + Send,
        T: Send,
    {
        let started = Instant::now();
        let mut attempt = 0;

        loop {
            attempt += 1;

            match f().await {
                Ok(result) => return Ok(result),
                Err(e) if !self.retries_on(e.kind()) => return Err(e),
                Err(e) => {
                    let backoff = if attempt >= self.max_attempts {
                        None
                    } else {
                        Some(self.wait.delay_for(attempt))
                    };

                    self.observer
                        .on_attempt(RetryAttempt {
                            operation: operation.to_string(),
                            attempt,
                            max_attempts: self.max_attempts,
                            error: e.clone(),
                            elapsed: started.elapsed(),
                            backoff,
                        })
                        .await;

                    match backoff {
                        None => return Err(e),
                        Some(delay) if delay.is_zero() => {}
                        Some(delay) => sleep(delay).await,
                    }
                }
            }
        }
    }
}
