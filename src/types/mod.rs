//! Common types exchanged between targets and the resilience layer.

use serde::{Deserialize, Serialize};

/// A prompt on its way to a generation target.
///
/// The resilience layer never inspects the prompt itself; requests pass
/// through so that error responses can be tied back to the conversation
/// they belong to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptRequest {
    /// Identifier of the conversation this prompt belongs to
    pub conversation_id: String,
    /// The prompt text sent to the target
    pub prompt: String,
}

impl PromptRequest {
    /// Create a new PromptRequest
    pub fn new(conversation_id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            prompt: prompt.into(),
        }
    }
}

/// What a response piece holds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    /// Ordinary completion text
    Text,
    /// A serialized error report standing in for a completion
    Error,
}

/// A target's answer to a [`PromptRequest`], or an error response built in
/// its place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptResponse {
    /// The request this response answers
    pub request: PromptRequest,
    /// Response pieces in arrival order
    pub pieces: Vec<String>,
    /// Whether the pieces hold completion text or an error report
    pub kind: ResponseKind,
    /// Provider-level error tag, e.g. `blocked` for filtered prompts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PromptResponse {
    /// The first response piece, if any.
    pub fn first_piece(&self) -> Option<&str> {
        self.pieces.first().map(String::as_str)
    }
}

/// Builds a [`PromptResponse`] that answers `request` with the given pieces.
///
/// The request is cloned into the response so the pair travels together.
pub fn construct_response_from_request(
    request: &PromptRequest,
    pieces: Vec<String>,
    kind: ResponseKind,
    error: Option<String>,
) -> PromptResponse {
    PromptResponse {
        request: request.clone(),
        pieces,
        kind,
        error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_kind_serialization() {
        let kind = ResponseKind::Text;
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, "\"text\"");

        let kind = ResponseKind::Error;
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, "\"error\"");
    }

    #[test]
    fn test_construct_response_from_request() {
        let request = PromptRequest::new("conv-1", "describe the painting");
        let response = construct_response_from_request(
            &request,
            vec!["a canal at dusk".to_string()],
            ResponseKind::Text,
            None,
        );
        assert_eq!(response.request, request);
        assert_eq!(response.first_piece(), Some("a canal at dusk"));
        assert_eq!(response.kind, ResponseKind::Text);
        assert_eq!(response.error, None);
    }

    #[test]
    fn test_error_field_omitted_when_none() {
        let request = PromptRequest::new("conv-1", "hello");
        let response = construct_response_from_request(
            &request,
            vec!["hi".to_string()],
            ResponseKind::Text,
            None,
        );
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("\"error\""));

        let blocked = construct_response_from_request(
            &request,
            vec!["{}".to_string()],
            ResponseKind::Error,
            Some("blocked".to_string()),
        );
        let json = serde_json::to_string(&blocked).unwrap();
        assert!(json.contains("\"error\":\"blocked\""));
    }

    #[test]
    fn test_first_piece_empty() {
        let request = PromptRequest::new("conv-2", "hello");
        let response = construct_response_from_request(&request, vec![], ResponseKind::Text, None);
        assert_eq!(response.first_piece(), None);
    }
}
