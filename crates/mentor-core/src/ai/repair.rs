//! Best-effort JSON recovery from unstructured model output.
//!
//! Models wrap JSON in prose, markdown fences, or both. Recovery is an
//! ordered chain of fallible strategies, each tried exactly once,
//! short-circuiting on the first successful parse:
//!
//! 1. the contents of a fenced code block (triple backtick, optionally
//!    tagged `json`),
//! 2. the raw response text itself,
//! 3. the substring between the first `{` and the last `}` (inclusive),
//! 4. the substring between the first `[` and the last `]` (inclusive).
//!
//! When every strategy fails the response is declared malformed.

use serde_json::Value;

use crate::error::{OrganizerError, Result};

/// Recovers a JSON value from a model response.
///
/// # Errors
///
/// * `OrganizerError::MalformedResponse` - no strategy produced valid JSON
pub fn recover_json(text: &str) -> Result<Value> {
    let strategies: [fn(&str) -> Option<Value>; 4] = [
        parse_fenced_block,
        parse_raw,
        parse_object_span,
        parse_array_span,
    ];

    strategies
        .iter()
        .find_map(|strategy| strategy(text))
        .ok_or(OrganizerError::MalformedResponse)
}

/// Strategy 1: the contents of the first fenced code block.
fn parse_fenced_block(text: &str) -> Option<Value> {
    let start = text.find("```")?;
    let mut body = &text[start + 3..];
    if let Some(stripped) = body.strip_prefix("json") {
        body = stripped;
    }
    let end = body.find("```")?;
    serde_json::from_str(body[..end].trim()).ok()
}

/// Strategy 2: the whole response, as-is.
fn parse_raw(text: &str) -> Option<Value> {
    serde_json::from_str(text.trim()).ok()
}

/// Strategy 3: first `{` through last `}`.
fn parse_object_span(text: &str) -> Option<Value> {
    parse_span(text, '{', '}')
}

/// Strategy 4: first `[` through last `]`.
fn parse_array_span(text: &str) -> Option<Value> {
    parse_span(text, '[', ']')
}

fn parse_span(text: &str, open: char, close: char) -> Option<Value> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    if end < start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_fenced_block_wins_over_surrounding_prose() {
        let text = "Sure! Here is your plan:\n```json\n{\"days\": []}\n```\nEnjoy!";
        assert_eq!(recover_json(text).unwrap(), json!({"days": []}));
    }

    #[test]
    fn test_untagged_fence_is_accepted() {
        let text = "```\n{\"a\": 1}\n```";
        assert_eq!(recover_json(text).unwrap(), json!({"a": 1}));
    }

    #[test]
    fn test_raw_json_parses_like_fenced() {
        let fenced = recover_json("```json\n{\"a\": [1, 2]}\n```").unwrap();
        let raw = recover_json("{\"a\": [1, 2]}").unwrap();
        assert_eq!(fenced, raw);
    }

    #[test]
    fn test_brace_span_extraction_from_prose() {
        let text = "The plan is {\"days\": [{\"day\": 1}]} - good luck!";
        assert_eq!(
            recover_json(text).unwrap(),
            json!({"days": [{"day": 1}]})
        );
    }

    #[test]
    fn test_bracket_span_extraction_for_arrays() {
        let text = "Questions below:\n[{\"q\": 1}, {\"q\": 2}]\nDone.";
        assert_eq!(recover_json(text).unwrap(), json!([{"q": 1}, {"q": 2}]));
    }

    #[test]
    fn test_broken_fence_falls_through_to_brace_span() {
        // The fence contains invalid JSON, but a valid object spans the text
        let text = "```json\nnot json\n``` but see {\"ok\": true}";
        assert_eq!(recover_json(text).unwrap(), json!({"ok": true}));
    }

    #[test]
    fn test_unrecoverable_text_is_malformed() {
        let err = recover_json("I could not produce a plan, sorry.").unwrap_err();
        assert!(matches!(err, OrganizerError::MalformedResponse));
    }

    #[test]
    fn test_mismatched_braces_are_malformed() {
        let err = recover_json("oops } backwards {").unwrap_err();
        assert!(matches!(err, OrganizerError::MalformedResponse));
    }
}
