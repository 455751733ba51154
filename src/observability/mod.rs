//! Observability module providing structured logging for the resilience
//! layer.
//!
//! Retry policies report failed attempts at info level and taxonomy errors
//! describe themselves at error level; this module wires those events to a
//! `tracing` subscriber.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use integrations_resilience::observability::{LoggingConfig, LogLevel, LogFormat};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! LoggingConfig::new()
//!     .with_level(LogLevel::Info)
//!     .with_format(LogFormat::Json)
//!     .init()?;
//! # Ok(())
//! # }
//! ```

mod logging;

pub use logging::*;
