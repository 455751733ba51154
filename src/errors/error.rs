//! Error types for calls against a generation target.

use thiserror::Error;

/// Result type alias for target operations
pub type TargetResult<T> = Result<T, TargetError>;

/// Main error type for calls against a generation target.
///
/// Every variant carries a status code and a human-readable message, and
/// renders identically through `Display`. Which variant a failure lands in
/// drives retry eligibility and bad-request handling, not the rendering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    /// The target rejected the request as malformed or disallowed
    #[error("Status Code: {status_code}, Message: {message}")]
    BadRequest {
        /// HTTP-style status code, 400 unless overridden
        status_code: u16,
        /// Error message describing the rejection
        message: String,
    },

    /// The target throttled the request
    #[error("Status Code: {status_code}, Message: {message}")]
    RateLimit {
        /// HTTP-style status code, 429 unless overridden
        status_code: u16,
        /// Error message describing the throttle
        message: String,
    },

    /// The target answered with an empty completion
    #[error("Status Code: {status_code}, Message: {message}")]
    EmptyResponse {
        /// HTTP-style status code, 204 unless overridden
        status_code: u16,
        /// Error message describing the empty reply
        message: String,
    },

    /// The target's reply could not be parsed as JSON
    #[error("Status Code: {status_code}, Message: {message}")]
    InvalidJson {
        /// HTTP-style status code, 500 unless overridden
        status_code: u16,
        /// Error message describing the malformed payload
        message: String,
    },

    /// A prompt template was used without its substitution placeholder
    #[error("Status Code: {status_code}, Message: {message}")]
    MissingPlaceholder {
        /// HTTP-style status code, 500 unless overridden
        status_code: u16,
        /// Error message describing the template problem
        message: String,
    },
}

/// Discriminant of a [`TargetError`], used by retry policies to match
/// failures without inspecting payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or disallowed request
    BadRequest,
    /// Throttled request
    RateLimit,
    /// Empty completion
    EmptyResponse,
    /// Unparseable JSON reply
    InvalidJson,
    /// Prompt template without its placeholder
    MissingPlaceholder,
}

impl ErrorKind {
    /// Name of the kind as it appears in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "BadRequest",
            ErrorKind::RateLimit => "RateLimit",
            ErrorKind::EmptyResponse => "EmptyResponse",
            ErrorKind::InvalidJson => "InvalidJson",
            ErrorKind::MissingPlaceholder => "MissingPlaceholder",
        }
    }

    /// Returns true for kinds the bad-request handler treats as client
    /// rejections: [`ErrorKind::BadRequest`] itself and
    /// [`ErrorKind::EmptyResponse`], which providers report with a 2xx code
    /// but which still denotes a request the target declined to answer.
    pub fn is_bad_request_like(self) -> bool {
        matches!(self, ErrorKind::BadRequest | ErrorKind::EmptyResponse)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TargetError {
    /// Bad request with the default status code 400 and message `Bad Request`.
    pub fn bad_request() -> Self {
        TargetError::BadRequest {
            status_code: 400,
            message: "Bad Request".to_string(),
        }
    }

    /// Rate limit with the default status code 429 and message
    /// `Rate Limit Exception`.
    pub fn rate_limit() -> Self {
        TargetError::RateLimit {
            status_code: 429,
            message: "Rate Limit Exception".to_string(),
        }
    }

    /// Empty response with the default status code 204 and message
    /// `No Content`.
    pub fn empty_response() -> Self {
        TargetError::EmptyResponse {
            status_code: 204,
            message: "No Content".to_string(),
        }
    }

    /// Invalid JSON with the default status code 500 and message
    /// `Invalid JSON Response`.
    pub fn invalid_json() -> Self {
        TargetError::InvalidJson {
            status_code: 500,
            message: "Invalid JSON Response".to_string(),
        }
    }

    /// Missing placeholder with the default status code 500 and message
    /// `No prompt placeholder`.
    pub fn missing_placeholder() -> Self {
        TargetError::MissingPlaceholder {
            status_code: 500,
            message: "No prompt placeholder".to_string(),
        }
    }

    /// Replaces the status code, keeping the variant and message.
    pub fn with_status(mut self, code: u16) -> Self {
        match &mut self {
            TargetError::BadRequest { status_code, .. }
            | TargetError::RateLimit { status_code, .. }
            | TargetError::EmptyResponse { status_code, .. }
            | TargetError::InvalidJson { status_code, .. }
            | TargetError::MissingPlaceholder { status_code, .. } => *status_code = code,
        }
        self
    }

    /// Replaces the message, keeping the variant and status code.
    pub fn with_message(mut self, new_message: impl Into<String>) -> Self {
        let text = new_message.into();
        match &mut self {
            TargetError::BadRequest { message, .. }
            | TargetError::RateLimit { message, .. }
            | TargetError::EmptyResponse { message, .. }
            | TargetError::InvalidJson { message, .. }
            | TargetError::MissingPlaceholder { message, .. } => *message = text,
        }
        self
    }

    /// The status code carried by this error.
    pub fn status_code(&self) -> u16 {
        match self {
            TargetError::BadRequest { status_code, .. }
            | TargetError::RateLimit { status_code, .. }
            | TargetError::EmptyResponse { status_code, .. }
            | TargetError::InvalidJson { status_code, .. }
            | TargetError::MissingPlaceholder { status_code, .. } => *status_code,
        }
    }

    /// The message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            TargetError::BadRequest { message, .. }
            | TargetError::RateLimit { message, .. }
            | TargetError::EmptyResponse { message, .. }
            | TargetError::InvalidJson { message, .. }
            | TargetError::MissingPlaceholder { message, .. } => message,
        }
    }

    /// The discriminant of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TargetError::BadRequest { .. } => ErrorKind::BadRequest,
            TargetError::RateLimit { .. } => ErrorKind::RateLimit,
            TargetError::EmptyResponse { .. } => ErrorKind::EmptyResponse,
            TargetError::InvalidJson { .. } => ErrorKind::InvalidJson,
            TargetError::MissingPlaceholder { .. } => ErrorKind::MissingPlaceholder,
        }
    }

    /// Returns true if this error denotes a client rejection.
    ///
    /// Covers [`TargetError::BadRequest`] and [`TargetError::EmptyResponse`];
    /// both are handled by the bad-request path even though their status
    /// codes differ.
    pub fn is_bad_request(&self) -> bool {
        self.kind().is_bad_request_like()
    }

    /// Logs this error at error severity and returns its serialized report.
    ///
    /// The log line reads `<Kind> encountered: Status Code: <code>,
    /// Message: <message>`; the returned string is the JSON encoding of
    /// [`ErrorReport`](crate::errors::ErrorReport), suitable for embedding
    /// in an error response piece. Calling this twice on the same error
    /// yields the same string.
    pub fn describe(&self) -> String {
        tracing::error!("{} encountered: {}", self.kind(), self);
        crate::errors::ErrorReport::from(self).to_json()
    }
}

// Conversions from common error types
impl From<serde_json::Error> for TargetError {
    fn from(err: serde_json::Error) -> Self {
        TargetError::invalid_json().with_message(err.to_string())
    }
}
