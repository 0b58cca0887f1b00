//! Draft suggestions and scheduled drafts.

use crate::Platform;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The parsed output of a generation cycle.
///
/// This pair is the sole contract the rest of the application may depend on
/// from the pipeline: a complete suggestion or nothing. It is handed to the
/// orchestrator, never persisted here.
///
/// # Examples
///
/// ```
/// use scrivano_core::DraftSuggestion;
///
/// let suggestion = DraftSuggestion {
///     text: "hello".to_string(),
///     explanation: "greets the reader".to_string(),
/// };
/// let json = serde_json::to_string(&suggestion).unwrap();
/// assert!(json.contains("\"tweet\":\"hello\""));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSuggestion {
    /// The generated post body
    #[serde(rename = "tweet")]
    pub text: String,
    /// The model's rationale for the draft
    #[serde(default)]
    pub explanation: String,
}

/// Lifecycle state of a persisted draft.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DraftStatus {
    /// Generated but not yet scheduled
    #[default]
    Draft,
    /// Bound to a publish instant
    Scheduled,
    /// Published to the platform
    Published,
}

/// A draft bound to a target platform and an optional publish instant.
///
/// Invariant: for a given platform, at most one `Scheduled` draft may
/// occupy a given absolute instant. The schedule store enforces this at
/// reservation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledDraft {
    /// Store-assigned draft identifier
    pub id: i64,
    /// Target platform
    pub platform: Platform,
    /// Target account within the platform, when the operator runs several
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Draft body text
    pub text: String,
    /// Lifecycle state
    #[serde(default)]
    pub status: DraftStatus,
    /// Resolved absolute publish instant, set when scheduled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_time: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_serializes_with_tweet_key() {
        let suggestion = DraftSuggestion {
            text: "a".to_string(),
            explanation: "b".to_string(),
        };
        let value = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(value["tweet"], "a");
        assert_eq!(value["explanation"], "b");
    }

    #[test]
    fn suggestion_explanation_defaults_empty() {
        let suggestion: DraftSuggestion = serde_json::from_str(r#"{"tweet":"x"}"#).unwrap();
        assert_eq!(suggestion.text, "x");
        assert_eq!(suggestion.explanation, "");
    }

    #[test]
    fn draft_status_round_trips_as_lowercase() {
        assert_eq!(DraftStatus::Scheduled.to_string(), "scheduled");
        let status: DraftStatus = serde_json::from_str("\"published\"").unwrap();
        assert_eq!(status, DraftStatus::Published);
    }
}
