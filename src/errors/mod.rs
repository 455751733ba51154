//! Error types for calls against a generation target.
//!
//! This module provides the failure taxonomy, its serialized report form,
//! and the bad-request handling path for content-filtered prompts.

mod error;
mod handler;
mod report;

pub use error::{ErrorKind, TargetError, TargetResult};
pub use handler::{
    handle_bad_request, is_content_filtered, BLOCKED_ERROR_TAG, CONTENT_FILTER_MARKER,
    POLICY_REJECTION_PHRASE,
};
pub use report::ErrorReport;
