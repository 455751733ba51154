//! Best-effort recovery of JSON payloads from free-form model output.

use crate::errors::{TargetError, TargetResult};

/// Prefix of the sentinel string returned when recovery fails.
pub const INVALID_JSON_PREFIX: &str = "Invalid JSON response: ";

// Longest fences first so "```json" wins over "```" and a bare "json"
// label is still stripped when the backticks are missing.
const START_FENCES: [&str; 6] = ["```json\n", "```json", "```\n", "```", "json\n", "json"];
const END_FENCES: [&str; 2] = ["\n```", "```"];

/// Strips at most one opening markdown fence from the front of `text`.
pub fn remove_start_fence(text: &str) -> &str {
    for fence in START_FENCES {
        if let Some(rest) = text.strip_prefix(fence) {
            return rest;
        }
    }
    text
}

/// Strips at most one closing markdown fence from the end of `text`.
pub fn remove_end_fence(text: &str) -> &str {
    for fence in END_FENCES {
        if let Some(rest) = text.strip_suffix(fence) {
            return rest;
        }
    }
    text
}

/// Finds the first balanced JSON object or array embedded in `text`.
///
/// Scans from each `{` or `[` and tracks nesting, skipping bracket
/// characters inside string literals and honoring backslash escapes. The
/// returned slice spans the opening bracket through its matching close;
/// no parse is attempted, so the caller still has to validate it.
pub fn extract_first_json(text: &str) -> Option<&str> {
    let mut from = 0;
    while let Some(offset) = text[from..].find(['{', '[']) {
        let start = from + offset;
        if let Some(len) = balanced_len(&text[start..]) {
            return Some(&text[start..start + len]);
        }
        from = start + 1;
    }
    None
}

/// Length of the balanced bracket run at the start of `text`, which must
/// begin with `{` or `[`. None when brackets mismatch or never close.
fn balanced_len(text: &str) -> Option<usize> {
    let mut stack: Vec<char> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => stack.push('}'),
            '[' => stack.push(']'),
            '}' | ']' => {
                if stack.pop() != Some(c) {
                    return None;
                }
                if stack.is_empty() {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

/// Recovers a JSON payload from `raw`, a model reply that was supposed to
/// be JSON.
///
/// The pipeline strips markdown fences, then tries the stripped text as
/// JSON, then falls back to the first balanced object or array embedded in
/// it. When nothing validates, the result is the sentinel
/// `Invalid JSON response: ` followed by the stripped text, so callers can
/// recognize the failure without losing what the model actually said.
///
/// # Examples
///
/// ```
/// use integrations_resilience::recover_json;
///
/// let fenced = "```json\n{\"score\": 7}\n```";
/// assert_eq!(recover_json(fenced), "{\"score\": 7}");
///
/// let chatty = "Here you go: {\"score\": 7} as requested";
/// assert_eq!(recover_json(chatty), "{\"score\": 7}");
///
/// assert_eq!(
///     recover_json("I cannot answer that"),
///     "Invalid JSON response: I cannot answer that"
/// );
/// ```
pub fn recover_json(raw: &str) -> String {
    let stripped = remove_end_fence(remove_start_fence(raw));
    if parses_as_json(stripped) {
        return stripped.to_string();
    }

    let candidate = extract_first_json(stripped).unwrap_or(stripped);
    if parses_as_json(candidate) {
        return candidate.to_string();
    }
    format!("{INVALID_JSON_PREFIX}{candidate}")
}

/// Like [`recover_json`], but surfaces the sentinel case as an error.
///
/// # Errors
///
/// Returns [`TargetError::InvalidJson`] carrying the sentinel string when
/// no JSON payload could be recovered, which makes this the natural shape
/// to run under a JSON retry policy.
pub fn try_recover_json(raw: &str) -> TargetResult<String> {
    let recovered = recover_json(raw);
    if recovered.starts_with(INVALID_JSON_PREFIX) {
        return Err(TargetError::invalid_json().with_message(recovered));
    }
    Ok(recovered)
}

fn parses_as_json(text: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(text).is_ok()
}
