//! Wire format for the generation service.
//!
//! The service speaks a REST convention where a request carries `contents`
//! (text parts) plus a `generationConfig`, and a response carries
//! `candidates`, each with content parts that are either text or a
//! structured function call. Field names are camelCase on the wire.
//!
//! These types are shared between the generation client (which sends and
//! receives them unmodified) and the response parser (which interprets
//! them); neither owns the other, so they live here.

use serde::{Deserialize, Serialize};

/// Fixed sampling configuration sent with every generation request.
///
/// # Examples
///
/// ```
/// use scrivano_core::SamplingConfig;
///
/// let config = SamplingConfig::default();
/// assert_eq!(config.response_mime_type, "application/json");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplingConfig {
    /// Sampling temperature
    pub temperature: f32,
    /// Top-k sampling cutoff
    pub top_k: u32,
    /// Top-p nucleus sampling cutoff
    pub top_p: f32,
    /// Output token cap
    pub max_output_tokens: u32,
    /// Directive to return JSON rather than prose
    pub response_mime_type: String,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            temperature: 0.8,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 1024,
            response_mime_type: "application/json".to_string(),
        }
    }
}

/// A single text part of a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestPart {
    /// Prompt text
    pub text: String,
}

/// One content block of a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestContent {
    /// The parts making up this block
    pub parts: Vec<RequestPart>,
}

/// Outbound generation request: a single text prompt plus sampling config.
///
/// # Examples
///
/// ```
/// use scrivano_core::{GenerationRequest, SamplingConfig};
///
/// let request = GenerationRequest::new("write a post", SamplingConfig::default());
/// assert_eq!(request.contents[0].parts[0].text, "write a post");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Prompt content blocks
    pub contents: Vec<RequestContent>,
    /// Sampling configuration
    pub generation_config: SamplingConfig,
}

impl GenerationRequest {
    /// Wrap a prompt string in the wire shape.
    pub fn new(prompt: impl Into<String>, config: SamplingConfig) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.into(),
                }],
            }],
            generation_config: config,
        }
    }
}

/// A structured function call emitted by the model in place of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Name of the function the model invoked
    pub name: String,
    /// Arguments as a JSON object
    #[serde(default)]
    pub args: serde_json::Value,
}

/// One part of a response candidate: text, a function call, or (from some
/// model versions) both fields absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePart {
    /// Text content, when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Function-call payload, when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_call: Option<FunctionCall>,
}

/// The content block of a response candidate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CandidateContent {
    /// The parts of this candidate
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// One generation candidate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Candidate {
    /// Candidate content; absent on safety-blocked candidates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<CandidateContent>,
}

/// The raw, uninterpreted service response.
///
/// The generation client returns this unmodified; only the response parser
/// interprets its shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawResponse {
    /// Generation candidates, first is preferred
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl RawResponse {
    /// Build a single-candidate response from plain text. Test scaffolding
    /// and the pinned-credential path both use this.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Some(CandidateContent {
                    parts: vec![ResponsePart {
                        text: Some(text.into()),
                        function_call: None,
                    }],
                }),
            }],
        }
    }
}
