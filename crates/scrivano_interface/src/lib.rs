//! Trait seams between the Scrivano pipeline and its collaborators.
//!
//! The pipeline never talks to the network or a database directly; it goes
//! through the traits defined here. [`GenerationBackend`] abstracts the
//! outbound generation-service call, [`ScheduleStore`] abstracts persisted
//! draft lookups and the atomic slot reservation write. Production
//! implementations live in `scrivano_gen` and the embedding application;
//! tests substitute scripted in-memory implementations.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{GenerationBackend, ScheduleStore};
pub use types::ApiCredential;
