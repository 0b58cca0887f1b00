//! Prompt composition for the Scrivano draft-generation pipeline.
//!
//! The composer assembles a single prompt string from weighted source
//! material: exemplary posts and top-scoring posts set the voice, curated
//! tips seed the topic, and an avoidance list keeps the model from
//! repeating recent output. It performs no I/O and is deterministic once
//! the target-length draw is fixed, which is what makes it unit-testable.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod avoidance;
mod composer;
mod length;

pub use avoidance::build_avoidance_list;
pub use composer::{PromptComposer, PromptInputs, PromptInputsBuilder};
pub use length::{FixedLengthSampler, LengthSampler, UniformLengthSampler};
