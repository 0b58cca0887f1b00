//! Scheduling against a persisted store.

use crate::slot::slot_to_instant;
use chrono::{DateTime, Utc};
use scrivano_core::{Platform, ScheduledDraft};
use scrivano_error::{ScheduleError, ScheduleErrorKind, ScrivanoResult};
use scrivano_interface::ScheduleStore;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Schedules drafts into resolved slots, rejecting double bookings.
///
/// The scheduler consults the reservation index before writing, then
/// delegates to [`ScheduleStore::reserve`], whose implementation must make
/// the check and the write one transactional unit. The pre-check here
/// gives early rejection and a better error, but cannot close the race on
/// its own.
///
/// # Examples
///
/// ```
/// use scrivano_core::{DraftStatus, Platform, ScheduledDraft};
/// use scrivano_schedule::{MemoryScheduleStore, SlotScheduler};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = MemoryScheduleStore::new();
/// store
///     .add_draft(ScheduledDraft {
///         id: 1,
///         platform: Platform::Twitter,
///         account_id: None,
///         text: "draft body".to_string(),
///         status: DraftStatus::Draft,
///         schedule_time: None,
///     })
///     .await;
///
/// let scheduler = SlotScheduler::new(store);
/// let scheduled = scheduler
///     .schedule(1, "tomorrow_noon", "Asia/Tokyo", Platform::Twitter)
///     .await?;
/// assert_eq!(scheduled.status, DraftStatus::Scheduled);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SlotScheduler<S: ScheduleStore> {
    store: S,
}

impl<S: ScheduleStore> SlotScheduler<S> {
    /// Build a scheduler over a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The reservation index for a platform: resolved instant to the id of
    /// the draft holding it. Only drafts with status `Scheduled` count.
    #[instrument(skip(self))]
    pub async fn reserved_instants(
        &self,
        platform: Platform,
    ) -> ScrivanoResult<HashMap<DateTime<Utc>, i64>> {
        let drafts = self.store.scheduled_drafts(platform).await?;
        let index: HashMap<DateTime<Utc>, i64> = drafts
            .into_iter()
            .filter_map(|draft| draft.schedule_time.map(|instant| (instant, draft.id)))
            .collect();
        debug!(platform = %platform, reserved = index.len(), "Built reservation index");
        Ok(index)
    }

    /// Resolve a slot key and reserve the instant for a draft.
    ///
    /// # Errors
    ///
    /// - `UnknownTimezone` when the timezone name does not resolve
    /// - `SlotAlreadyReserved` when the instant is occupied on the
    ///   platform; no write occurs
    #[instrument(skip(self))]
    pub async fn schedule(
        &self,
        draft_id: i64,
        slot_key: &str,
        timezone: &str,
        platform: Platform,
    ) -> ScrivanoResult<ScheduledDraft> {
        let instant = slot_to_instant(slot_key, timezone)?;

        let reserved = self.reserved_instants(platform).await?;
        if let Some(&holder) = reserved.get(&instant) {
            return Err(ScheduleError::new(ScheduleErrorKind::SlotAlreadyReserved {
                platform: platform.to_string(),
                instant,
                draft_id: holder,
            }))?;
        }

        let scheduled = self.store.reserve(draft_id, platform, instant).await?;
        debug!(
            draft_id,
            platform = %platform,
            instant = %instant,
            "Draft scheduled"
        );
        Ok(scheduled)
    }
}
