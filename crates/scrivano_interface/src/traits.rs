//! Trait definitions for the pipeline's external collaborators.

use crate::ApiCredential;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use scrivano_core::{GenerationRequest, Platform, RawResponse, ScheduledDraft};
use scrivano_error::ScrivanoResult;

/// Transport seam for the generation service.
///
/// A backend sends one request with one credential and returns the raw
/// response without interpreting its payload. Credential rotation and
/// failover live above this trait in `scrivano_gen`; mock backends
/// implement it directly in tests.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Send a single request using the given credential.
    async fn dispatch(
        &self,
        request: &GenerationRequest,
        credential: &ApiCredential,
    ) -> ScrivanoResult<RawResponse>;

    /// Provider name (e.g., "gemini"), for diagnostics.
    fn provider_name(&self) -> &'static str;
}

/// Storage seam for persisted drafts and slot reservations.
///
/// The `reserve` implementation must perform the collision check and the
/// write as one transactional unit; the scheduler's own pre-check narrows
/// the race window but cannot close it.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// All drafts with status `Scheduled` for the given platform.
    async fn scheduled_drafts(&self, platform: Platform) -> ScrivanoResult<Vec<ScheduledDraft>>;

    /// Atomically bind a draft to a publish instant.
    ///
    /// On success the draft is persisted with status `Scheduled` and the
    /// resolved instant. Fails with `SlotAlreadyReserved` when another
    /// draft already holds that instant on the platform; no write occurs
    /// in that case.
    async fn reserve(
        &self,
        draft_id: i64,
        platform: Platform,
        instant: DateTime<Utc>,
    ) -> ScrivanoResult<ScheduledDraft>;
}
