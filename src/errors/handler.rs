//! Bad-request handling for content-filtered prompts.

use crate::errors::{TargetError, TargetResult};
use crate::types::{construct_response_from_request, PromptRequest, PromptResponse, ResponseKind};

/// Marker providers embed in a response body when their content filter fired.
pub const CONTENT_FILTER_MARKER: &str = "content_filter";

/// Literal phrase returned for prompts flagged by the usage policy.
pub const POLICY_REJECTION_PHRASE: &str =
    "Invalid prompt: your prompt was flagged as potentially violating our usage policy.";

/// Error tag placed on responses built for filtered prompts.
pub const BLOCKED_ERROR_TAG: &str = "blocked";

/// Returns true when `response_text` shows the target filtered the prompt.
///
/// Matches either the [`CONTENT_FILTER_MARKER`] substring or the full
/// [`POLICY_REJECTION_PHRASE`].
pub fn is_content_filtered(response_text: &str) -> bool {
    response_text.contains(CONTENT_FILTER_MARKER) || response_text.contains(POLICY_REJECTION_PHRASE)
}

/// Resolves a bad-request failure into an error response or re-raises it.
///
/// When the response text signals a content filter, or the caller already
/// knows the request was filtered (`is_content_filter`), the failure is
/// absorbed: a 400 bad request carrying the full response text is logged
/// through [`TargetError::describe`] and its report becomes the single
/// piece of an error response tagged [`BLOCKED_ERROR_TAG`]. Every other
/// failure is returned to the caller as `original`, unchanged, so it keeps
/// propagating.
///
/// # Examples
///
/// ```
/// use integrations_resilience::{handle_bad_request, PromptRequest, ResponseKind, TargetError};
///
/// let request = PromptRequest::new("conv-7", "write something rude");
/// let response = handle_bad_request(
///     "request blocked: content_filter",
///     &request,
///     false,
///     TargetError::bad_request(),
/// )
/// .unwrap();
/// assert_eq!(response.kind, ResponseKind::Error);
/// assert_eq!(response.error.as_deref(), Some("blocked"));
/// ```
pub fn handle_bad_request(
    response_text: &str,
    request: &PromptRequest,
    is_content_filter: bool,
    original: TargetError,
) -> TargetResult<PromptResponse> {
    if is_content_filtered(response_text) || is_content_filter {
        let rejection = TargetError::bad_request().with_message(response_text);
        let report = rejection.describe();
        Ok(construct_response_from_request(
            request,
            vec![report],
            ResponseKind::Error,
            Some(BLOCKED_ERROR_TAG.to_string()),
        ))
    } else {
        Err(original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn request() -> PromptRequest {
        PromptRequest::new("conv-42", "tell me a story")
    }

    #[test_case("stopped due to content_filter" ; "marker substring")]
    #[test_case(
        "Invalid prompt: your prompt was flagged as potentially violating our usage policy."
        ; "policy phrase"
    )]
    #[test_case(
        "error: Invalid prompt: your prompt was flagged as potentially violating our usage policy. (code 400)"
        ; "policy phrase embedded"
    )]
    fn test_detects_filtered_text(text: &str) {
        assert!(is_content_filtered(text));
    }

    #[test_case("" ; "empty")]
    #[test_case("temporarily overloaded" ; "unrelated text")]
    #[test_case("Invalid prompt: your prompt was flagged" ; "truncated phrase")]
    fn test_ignores_unfiltered_text(text: &str) {
        assert!(!is_content_filtered(text));
    }

    #[test]
    fn test_blocked_response_shape() {
        let response = handle_bad_request(
            "flagged due to content_filter policy",
            &request(),
            false,
            TargetError::bad_request(),
        )
        .unwrap();

        assert_eq!(response.kind, ResponseKind::Error);
        assert_eq!(response.error.as_deref(), Some(BLOCKED_ERROR_TAG));
        assert_eq!(response.pieces.len(), 1);
        assert_eq!(
            response.first_piece(),
            Some(r#"{"status_code":400,"message":"flagged due to content_filter policy"}"#)
        );
        assert_eq!(response.request, request());
    }

    #[test]
    fn test_flag_forces_blocked_response() {
        let response = handle_bad_request(
            "no recognizable markers here",
            &request(),
            true,
            TargetError::bad_request(),
        )
        .unwrap();
        assert_eq!(response.error.as_deref(), Some(BLOCKED_ERROR_TAG));
        assert_eq!(
            response.first_piece(),
            Some(r#"{"status_code":400,"message":"no recognizable markers here"}"#)
        );
    }

    #[test]
    fn test_unfiltered_failure_is_reraised() {
        let original = TargetError::bad_request()
            .with_status(413)
            .with_message("payload too large");
        let error = handle_bad_request("payload too large", &request(), false, original.clone())
            .unwrap_err();
        assert_eq!(error, original);
    }

    #[test]
    fn test_reraises_original_even_for_other_kinds() {
        let original = TargetError::empty_response();
        let error =
            handle_bad_request("", &request(), false, original.clone()).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::EmptyResponse);
        assert_eq!(error, original);
    }
}
