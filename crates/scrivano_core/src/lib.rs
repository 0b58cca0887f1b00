//! Core data types for the Scrivano draft-generation pipeline.
//!
//! This crate defines the records that flow between pipeline stages: posts
//! and their engagement metrics, operator-curated reference material, the
//! generation-service wire format, parsed draft suggestions, and scheduled
//! drafts. It also hosts the engagement scoring engine (a pure function over
//! metrics) and tracing initialization.
//!
//! Nothing in this crate performs I/O; storage and network live behind the
//! trait seams in `scrivano_interface`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod draft;
mod metrics;
mod platform;
mod post;
mod reference;
mod scoring;
mod telemetry;
mod wire;

pub use draft::{DraftStatus, DraftSuggestion, ScheduledDraft};
pub use metrics::EngagementMetrics;
pub use platform::{MediaKind, Platform};
pub use post::PostRecord;
pub use reference::{ExemplaryPost, ReferenceMaterial, Tip};
pub use scoring::{score, ScoreOptions};
pub use telemetry::init_tracing;
pub use wire::{
    Candidate, CandidateContent, FunctionCall, GenerationRequest, RawResponse, RequestContent,
    RequestPart, ResponsePart, SamplingConfig,
};
