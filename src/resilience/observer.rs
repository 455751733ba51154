use crate::errors::TargetError;
use async_trait::async_trait;
use std::time::Duration;

/// Context describing one failed attempt inside a retry loop
#[derive(Debug, Clone)]
pub struct RetryAttempt {
    /// Name of the operation being retried
    pub operation: String,
    /// 1-based attempt number that just failed
    pub attempt: u32,
    /// Total attempt bound of the policy
    pub max_attempts: u32,
    /// The error the attempt failed with
    pub error: TargetError,
    /// Time elapsed since the first attempt started
    pub elapsed: Duration,
    /// Wait before the next attempt; `None` when attempts are exhausted
    /// and the error is about to surface
    pub backoff: Option<Duration>,
}

/// Hook notified after every failed attempt a policy decided to match.
///
/// Observers see both retried failures (`backoff` is `Some`) and the final
/// exhausted one (`backoff` is `None`). Failures the policy does not match
/// bypass observation entirely.
#[async_trait]
pub trait RetryObserver: Send + Sync {
    /// Called once per failed matching attempt, before any backoff sleep.
    async fn on_attempt(&self, context: RetryAttempt);
}

/// Default observer: emits one info-level log line per failed attempt.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRetryObserver;

#[async_trait]
impl RetryObserver for TracingRetryObserver {
    async fn on_attempt(&self, context: RetryAttempt) {
        match context.backoff {
            Some(delay) => tracing::info!(
                operation = %context.operation,
                attempt = context.attempt,
                max_attempts = context.max_attempts,
                elapsed_ms = context.elapsed.as_millis() as u64,
                backoff_ms = delay.as_millis() as u64,
                error = %context.error,
                "attempt failed, backing off before retry"
            ),
            None => tracing::info!(
                operation = %context.operation,
                attempt = context.attempt,
                max_attempts = context.max_attempts,
                elapsed_ms = context.elapsed.as_millis() as u64,
                error = %context.error,
                "attempts exhausted, surfacing error"
            ),
        }
    }
}
