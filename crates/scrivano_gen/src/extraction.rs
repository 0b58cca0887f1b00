//! Extracting a typed suggestion from raw generation responses.
//!
//! Generation services are not reliable about honoring structured-output
//! instructions: the same prompt can come back as strict JSON, JSON inside
//! a markdown fence, a function-call payload, or free prose. This module
//! recovers a usable [`DraftSuggestion`] from any of those shapes through
//! an ordered list of extraction strategies, and refuses to return broken
//! JSON as user-facing content.

use scrivano_core::{DraftSuggestion, RawResponse};
use scrivano_error::{ParseError, ParseErrorKind, ScrivanoResult};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Explanation used when the heuristic split finds only one segment.
const NO_REASONING: &str = "no reasoning extracted";

/// Outcome of a single extraction strategy.
///
/// Modeling each tier as parsed-or-no-match keeps the precedence explicit
/// and each strategy independently testable.
enum Extraction {
    /// The strategy produced a complete suggestion
    Parsed(DraftSuggestion),
    /// The strategy does not apply to this text; try the next tier
    NoMatch,
}

/// Parse a raw service response into a suggestion.
///
/// Strategy order:
/// 1. Concatenate the first candidate's text parts; non-empty text is
///    cleaned of code fences and handed to tiers 3–6.
/// 2. With no text, scan the first candidate's parts for a function call
///    carrying string `tweet` and `explanation` arguments.
/// 3. Strict JSON parse of the cleaned text.
/// 4. Tolerant regex extraction of `"tweet": "..."` (escaped-quote aware).
/// 5. Text still starting with `{` is rejected as malformed JSON rather
///    than returned as content.
/// 6. Blank-line split: first segment is the tweet, the rest the
///    explanation.
///
/// # Errors
///
/// - `EmptyResponse` when the payload carries neither text nor a usable
///   function call
/// - `MalformedJson` when the text looks like JSON that no tier could
///   salvage
///
/// # Examples
///
/// ```
/// use scrivano_core::RawResponse;
/// use scrivano_gen::parse_response;
///
/// let raw = RawResponse::from_text("```json\n{\"tweet\":\"hi\",\"explanation\":\"why\"}\n```");
/// let suggestion = parse_response(&raw).unwrap();
/// assert_eq!(suggestion.text, "hi");
/// assert_eq!(suggestion.explanation, "why");
/// ```
pub fn parse_response(raw: &RawResponse) -> ScrivanoResult<DraftSuggestion> {
    let text = candidate_text(raw);

    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        // No text anywhere; a structured call is the only remaining shape.
        if let Some(suggestion) = function_call_suggestion(raw) {
            debug!("Extracted suggestion from function-call payload");
            return Ok(suggestion);
        }
        return Err(ParseError::new(ParseErrorKind::EmptyResponse))?;
    };

    let cleaned = strip_code_fences(&text);

    if let Extraction::Parsed(suggestion) = strict_json(&cleaned) {
        debug!("Extracted suggestion via strict JSON parse");
        return Ok(suggestion);
    }

    if let Extraction::Parsed(suggestion) = tolerant_regex(&cleaned) {
        debug!("Extracted suggestion via tolerant regex");
        return Ok(suggestion);
    }

    // Brace-laden text that tiers 3-4 could not salvage is broken JSON;
    // returning it as a post body would hand markup to the operator.
    if cleaned.trim_start().starts_with('{') {
        let preview: String = cleaned.chars().take(80).collect();
        return Err(ParseError::new(ParseErrorKind::MalformedJson(preview)))?;
    }

    debug!("Falling back to blank-line split");
    Ok(heuristic_split(&cleaned))
}

/// Concatenated text parts of the first candidate, if any.
fn candidate_text(raw: &RawResponse) -> Option<String> {
    let content = raw.candidates.first()?.content.as_ref()?;
    let text: String = content
        .parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .collect();
    Some(text)
}

/// Scan the first candidate's parts for a function call carrying both a
/// string `tweet` and a string `explanation`.
fn function_call_suggestion(raw: &RawResponse) -> Option<DraftSuggestion> {
    let content = raw.candidates.first()?.content.as_ref()?;
    content.parts.iter().find_map(|part| {
        let call = part.function_call.as_ref()?;
        let tweet = call.args.get("tweet")?.as_str()?;
        let explanation = call.args.get("explanation")?.as_str()?;
        Some(DraftSuggestion {
            text: tweet.to_string(),
            explanation: explanation.to_string(),
        })
    })
}

/// Strip markdown code-fence markers, keeping the fenced body.
fn strip_code_fences(text: &str) -> String {
    let trimmed = text.trim();
    if !trimmed.starts_with("```") {
        return trimmed.to_string();
    }

    // Drop the opening fence line (with any language tag) and a trailing fence.
    let after_fence = match trimmed.find('\n') {
        Some(newline) => &trimmed[newline + 1..],
        None => return String::new(),
    };
    let body = match after_fence.rfind("```") {
        Some(end) => &after_fence[..end],
        // No closing fence, likely a truncated response; keep the rest.
        None => after_fence,
    };
    body.trim().to_string()
}

/// Tier 3: strict JSON object with a string `tweet` field.
fn strict_json(cleaned: &str) -> Extraction {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(cleaned) else {
        return Extraction::NoMatch;
    };
    let Some(tweet) = value.get("tweet").and_then(|t| t.as_str()) else {
        return Extraction::NoMatch;
    };
    let explanation = value
        .get("explanation")
        .and_then(|e| e.as_str())
        .unwrap_or_default();
    Extraction::Parsed(DraftSuggestion {
        text: tweet.to_string(),
        explanation: explanation.to_string(),
    })
}

fn tweet_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#""tweet"\s*:\s*"((?s:\\.|[^"\\])*)""#).expect("tweet pattern compiles")
    })
}

fn explanation_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#""explanation"\s*:\s*"((?s:\\.|[^"\\])*)""#)
            .expect("explanation pattern compiles")
    })
}

/// Tier 4: escaped-quote-aware regex search for the tweet and explanation
/// fields, tolerating the surrounding JSON being broken.
fn tolerant_regex(cleaned: &str) -> Extraction {
    let Some(tweet_capture) = tweet_pattern()
        .captures(cleaned)
        .and_then(|c| c.get(1).map(|m| m.as_str().to_string()))
    else {
        return Extraction::NoMatch;
    };

    let explanation = explanation_pattern()
        .captures(cleaned)
        .and_then(|c| c.get(1).map(|m| m.as_str().to_string()))
        .map(|capture| unescape_json_literal(&capture))
        .unwrap_or_default();

    Extraction::Parsed(DraftSuggestion {
        text: unescape_json_literal(&tweet_capture),
        explanation,
    })
}

/// Interpret a captured span as a JSON string literal.
///
/// Raw newlines are escaped first so multi-line model output does not
/// break the literal; if the span still is not a valid literal, it is
/// returned as captured rather than dropped.
fn unescape_json_literal(captured: &str) -> String {
    let escaped = captured.replace('\n', "\\n").replace('\r', "\\r");
    serde_json::from_str::<String>(&format!("\"{escaped}\""))
        .unwrap_or_else(|_| captured.to_string())
}

/// Tier 6: blank-line split of free text.
fn heuristic_split(cleaned: &str) -> DraftSuggestion {
    let mut segments = cleaned.split("\n\n");
    let tweet = segments.next().unwrap_or_default().trim().to_string();
    let rest: Vec<&str> = segments.map(str::trim).filter(|s| !s.is_empty()).collect();
    let explanation = if rest.is_empty() {
        NO_REASONING.to_string()
    } else {
        rest.join("\n\n")
    };
    DraftSuggestion {
        text: tweet,
        explanation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrivano_core::{Candidate, CandidateContent, FunctionCall, ResponsePart};
    use serde_json::json;

    fn response_with_call(args: serde_json::Value) -> RawResponse {
        RawResponse {
            candidates: vec![Candidate {
                content: Some(CandidateContent {
                    parts: vec![ResponsePart {
                        text: None,
                        function_call: Some(FunctionCall {
                            name: "post_suggestion".to_string(),
                            args,
                        }),
                    }],
                }),
            }],
        }
    }

    #[test]
    fn fenced_json_parses() {
        let raw = RawResponse::from_text("```json\n{\"tweet\":\"hi\",\"explanation\":\"why\"}\n```");
        let suggestion = parse_response(&raw).unwrap();
        assert_eq!(suggestion.text, "hi");
        assert_eq!(suggestion.explanation, "why");
    }

    #[test]
    fn bare_json_missing_explanation_defaults_empty() {
        let raw = RawResponse::from_text(r#"{"tweet": "short one"}"#);
        let suggestion = parse_response(&raw).unwrap();
        assert_eq!(suggestion.text, "short one");
        assert_eq!(suggestion.explanation, "");
    }

    #[test]
    fn escaped_quotes_survive_tolerant_extraction() {
        // Trailing garbage defeats the strict parse; the regex tier has to
        // recover the escaped quotes.
        let raw = RawResponse::from_text(r#"{"tweet": "a \"quoted\" word"} trailing"#);
        let suggestion = parse_response(&raw).unwrap();
        assert_eq!(suggestion.text, r#"a "quoted" word"#);
        assert_eq!(suggestion.explanation, "");
    }

    #[test]
    fn multiline_tweet_value_is_unescaped() {
        let raw = RawResponse::from_text("{\"tweet\": \"line one\nline two\", oops");
        let suggestion = parse_response(&raw).unwrap();
        assert_eq!(suggestion.text, "line one\nline two");
    }

    #[test]
    fn broken_json_is_rejected_not_returned() {
        let raw = RawResponse::from_text("{broken");
        let err = parse_response(&raw).unwrap_err();
        assert!(err.to_string().contains("could not be parsed"));
    }

    #[test]
    fn empty_payload_is_empty_response() {
        let raw = RawResponse::default();
        let err = parse_response(&raw).unwrap_err();
        assert!(err.to_string().contains("no text or function-call"));
    }

    #[test]
    fn whitespace_only_text_without_call_is_empty_response() {
        let raw = RawResponse::from_text("   \n  ");
        assert!(parse_response(&raw).is_err());
    }

    #[test]
    fn function_call_payload_is_extracted() {
        let raw = response_with_call(json!({"tweet": "from call", "explanation": "structured"}));
        let suggestion = parse_response(&raw).unwrap();
        assert_eq!(suggestion.text, "from call");
        assert_eq!(suggestion.explanation, "structured");
    }

    #[test]
    fn function_call_missing_explanation_is_empty_response() {
        let raw = response_with_call(json!({"tweet": "only half"}));
        assert!(parse_response(&raw).is_err());
    }

    #[test]
    fn text_takes_precedence_over_function_call() {
        let mut raw = response_with_call(json!({"tweet": "call", "explanation": "call"}));
        raw.candidates[0]
            .content
            .as_mut()
            .unwrap()
            .parts
            .push(ResponsePart {
                text: Some(r#"{"tweet": "text wins", "explanation": "e"}"#.to_string()),
                function_call: None,
            });
        let suggestion = parse_response(&raw).unwrap();
        assert_eq!(suggestion.text, "text wins");
    }

    #[test]
    fn free_prose_splits_on_blank_line() {
        let raw = RawResponse::from_text("the post itself\n\nbecause it is timely\n\nand short");
        let suggestion = parse_response(&raw).unwrap();
        assert_eq!(suggestion.text, "the post itself");
        assert_eq!(suggestion.explanation, "because it is timely\n\nand short");
    }

    #[test]
    fn single_segment_prose_gets_fixed_explanation() {
        let raw = RawResponse::from_text("just the post");
        let suggestion = parse_response(&raw).unwrap();
        assert_eq!(suggestion.text, "just the post");
        assert_eq!(suggestion.explanation, "no reasoning extracted");
    }

    #[test]
    fn multipart_text_is_concatenated() {
        let raw = RawResponse {
            candidates: vec![Candidate {
                content: Some(CandidateContent {
                    parts: vec![
                        ResponsePart {
                            text: Some("{\"tweet\": \"split".to_string()),
                            function_call: None,
                        },
                        ResponsePart {
                            text: Some(" across parts\"}".to_string()),
                            function_call: None,
                        },
                    ],
                }),
            }],
        };
        let suggestion = parse_response(&raw).unwrap();
        assert_eq!(suggestion.text, "split across parts");
    }

    #[test]
    fn strip_code_fences_handles_truncated_fence() {
        let stripped = strip_code_fences("```json\n{\"tweet\": \"t\"}");
        assert_eq!(stripped, "{\"tweet\": \"t\"}");
    }

    #[test]
    fn strip_code_fences_leaves_plain_text() {
        assert_eq!(strip_code_fences("  plain  "), "plain");
    }
}
