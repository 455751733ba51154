//! # LLM Integrations Resilience
//!
//! Resilience layer shared by LLM provider integrations.
//!
//! Calls against generation targets fail in ways ordinary HTTP plumbing
//! does not cover: providers throttle, return empty completions with
//! success codes, wrap JSON in markdown fences, or refuse prompts their
//! content filter dislikes. This crate gives those failures a taxonomy,
//! retries the transient ones under configurable policies, and salvages
//! structured output from replies that almost contain it.
//!
//! ## Features
//!
//! - Failure taxonomy with stable status codes and messages
//! - Retry policies with full-jitter exponential backoff, driven by
//!   environment-configurable attempt and wait bounds
//! - Recovery of JSON payloads from fenced or prose-wrapped replies
//! - Bad-request handling that turns content-filtered prompts into
//!   well-formed error responses
//! - Structured logging of every failed attempt through `tracing`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use integrations_resilience::{RetryConfig, RetryPolicy, TargetResult};
//!
//! # fn call_target() -> TargetResult<String> { Ok("{}".to_string()) }
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Attempt and wait bounds come from the environment, with
//!     // defaults of 5 attempts over a 1s..60s backoff window.
//!     let config = RetryConfig::from_env();
//!     let policy = RetryPolicy::for_target(&config);
//!
//!     let completion = policy
//!         .execute("send_prompt", || async { call_target() })
//!         .await?;
//!     println!("{completion}");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - `config` - Retry configuration and its environment bindings
//! - `errors` - Failure taxonomy, error reports, bad-request handling
//! - `recovery` - JSON recovery from malformed model replies
//! - `resilience` - Retry policies, wait strategies, attempt observers
//! - `observability` - Structured logging setup
//! - `types` - Prompt request/response types shared with callers

#![warn(missing_docs)]
#![warn(clippy::all)]

// Public modules
pub mod config;
pub mod errors;
pub mod observability;
pub mod recovery;
pub mod resilience;
pub mod types;

// Re-exports for convenience
pub use config::{RetryConfig, RetryConfigBuilder};
pub use errors::{
    handle_bad_request, is_content_filtered, ErrorKind, ErrorReport, TargetError, TargetResult,
    BLOCKED_ERROR_TAG, CONTENT_FILTER_MARKER, POLICY_REJECTION_PHRASE,
};
pub use observability::{LogFormat, LogLevel, LoggingConfig};
pub use recovery::{
    extract_first_json, recover_json, remove_end_fence, remove_start_fence, try_recover_json,
    INVALID_JSON_PREFIX,
};
pub use resilience::{RetryAttempt, RetryObserver, RetryPolicy, TracingRetryObserver, WaitStrategy};
pub use types::{construct_response_from_request, PromptRequest, PromptResponse, ResponseKind};

/// The default total number of retry attempts, including the first call
pub const DEFAULT_RETRY_MAX_ATTEMPTS: u32 = 5;

/// The default lower bound of the backoff wait window, in seconds
pub const DEFAULT_RETRY_WAIT_MIN_SECS: u64 = 1;

/// The default upper bound of the backoff wait window, in seconds
pub const DEFAULT_RETRY_WAIT_MAX_SECS: u64 = 60;
