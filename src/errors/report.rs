//! Serialized error reports exchanged with callers.

use crate::errors::{TargetError, TargetResult};
use serde::{Deserialize, Serialize};

/// The wire form of a [`TargetError`]: a status code and a message.
///
/// [`TargetError::describe`] serializes one of these into the string that
/// gets stored as an error response piece, and downstream consumers parse
/// it back with [`ErrorReport::from_json`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorReport {
    /// HTTP-style status code of the failure
    pub status_code: u16,
    /// Human-readable message of the failure
    pub message: String,
}

impl ErrorReport {
    /// Creates a report from its parts.
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }

    /// Serializes the report to its JSON string form.
    ///
    /// Keys appear in declaration order: `status_code`, then `message`.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("report with two plain fields always serializes")
    }

    /// Parses a report back from its JSON string form.
    ///
    /// # Errors
    ///
    /// Returns [`TargetError::InvalidJson`] when `raw` is not a valid
    /// report encoding.
    pub fn from_json(raw: &str) -> TargetResult<Self> {
        serde_json::from_str(raw).map_err(TargetError::from)
    }
}

impl From<&TargetError> for ErrorReport {
    fn from(error: &TargetError) -> Self {
        Self {
            status_code: error.status_code(),
            message: error.message().to_string(),
        }
    }
}
