//! Scrivano - draft generation and scheduling for social-media accounts.
//!
//! Scrivano scores an account's historical posts, composes prompts for a
//! text-generation service from the best of them, survives rate limits by
//! rotating a pool of API credentials, parses the service's often-malformed
//! output into a typed suggestion, and schedules the resulting drafts into
//! fixed daily time slots with double-booking prevention.
//!
//! # Pipeline
//!
//! 1. [`score`] ranks historical posts by engagement rate
//! 2. [`PromptComposer`] assembles a prompt from top posts, curated tips,
//!    exemplary posts, and an avoidance list
//! 3. [`GenerationClient`] sends it to the service, failing over across the
//!    [`CredentialPool`] on rate limits
//! 4. [`parse_response`] recovers a [`DraftSuggestion`] from whatever shape
//!    came back
//! 5. [`SlotScheduler`] resolves a slot key like `tomorrow_noon` to an
//!    absolute instant and reserves it
//!
//! The orchestrator sequencing these stages, along with storage and
//! authentication, lives outside this workspace and talks to it through
//! the [`GenerationBackend`] and [`ScheduleStore`] traits.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use scrivano::{
//!     parse_response, CredentialPool, GenerationClient, GenerationConfig, HttpBackend,
//!     PromptComposer, PromptInputsBuilder,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GenerationConfig::load()?;
//!     let pool = CredentialPool::from_env(&config.credentials_var)?;
//!     let client = GenerationClient::new(HttpBackend::new(&config), pool, config.sampling_config());
//!
//!     let inputs = PromptInputsBuilder::default()
//!         .concept(Some("field notes from a small observatory".to_string()))
//!         .build()?;
//!     let prompt = PromptComposer::new().compose(&inputs);
//!
//!     let raw = client.generate(&prompt).await?;
//!     let suggestion = parse_response(&raw)?;
//!     println!("{}: {}", suggestion.text, suggestion.explanation);
//!     Ok(())
//! }
//! ```
//!
//! # Workspace
//!
//! The facade re-exports the public surface of the focused crates:
//!
//! - `scrivano_core` - data types, scoring, wire format
//! - `scrivano_error` - error taxonomy
//! - `scrivano_interface` - collaborator trait seams
//! - `scrivano_prompt` - prompt composition
//! - `scrivano_gen` - generation client and response parsing
//! - `scrivano_schedule` - slot scheduling

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use scrivano_core::{
    init_tracing, score, Candidate, CandidateContent, DraftStatus, DraftSuggestion,
    EngagementMetrics, ExemplaryPost, FunctionCall, GenerationRequest, MediaKind, Platform,
    PostRecord, RawResponse, ReferenceMaterial, SamplingConfig, ScheduledDraft, ScoreOptions, Tip,
};
pub use scrivano_error::{
    ConfigError, GenerationError, GenerationErrorKind, HttpError, JsonError, ParseError,
    ParseErrorKind, ScheduleError, ScheduleErrorKind, ScrivanoError, ScrivanoErrorKind,
    ScrivanoResult,
};
pub use scrivano_gen::{
    is_rate_limit_error, is_rate_limit_message, parse_response, CredentialPool, GenerationClient,
    GenerationConfig, HttpBackend, SamplingSettings,
};
pub use scrivano_interface::{ApiCredential, GenerationBackend, ScheduleStore};
pub use scrivano_prompt::{
    build_avoidance_list, FixedLengthSampler, LengthSampler, PromptComposer, PromptInputs,
    PromptInputsBuilder, UniformLengthSampler,
};
pub use scrivano_schedule::{
    slot_to_instant, slot_to_instant_at, MemoryScheduleStore, SlotDay, SlotKey, SlotPart,
    SlotScheduler,
};
