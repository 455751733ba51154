//! Retry policies, wait strategies, and the observers notified as
//! attempts fail.

mod backoff;
mod observer;
mod policy;


pub use backoff::WaitStrategy;
pub use observer::{RetryAttempt, RetryObserver, TracingRetryObserver};
pub use policy::RetryPolicy;
