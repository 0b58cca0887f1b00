//! In-memory schedule store.
//!
//! Backs the scheduler in tests and local runs. The reservation write
//! holds the store lock across both the collision check and the mutation,
//! giving the atomicity the `ScheduleStore` contract requires.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use scrivano_core::{DraftStatus, Platform, ScheduledDraft};
use scrivano_error::{ScheduleError, ScheduleErrorKind, ScrivanoResult};
use scrivano_interface::ScheduleStore;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Draft store backed by a map, with the check-then-write done under one
/// write lock.
#[derive(Debug, Default)]
pub struct MemoryScheduleStore {
    drafts: RwLock<HashMap<i64, ScheduledDraft>>,
}

impl MemoryScheduleStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a draft record.
    pub async fn add_draft(&self, draft: ScheduledDraft) {
        self.drafts.write().await.insert(draft.id, draft);
    }

    /// Fetch a draft by id.
    pub async fn draft(&self, id: i64) -> Option<ScheduledDraft> {
        self.drafts.read().await.get(&id).cloned()
    }
}

#[async_trait]
impl ScheduleStore for MemoryScheduleStore {
    async fn scheduled_drafts(&self, platform: Platform) -> ScrivanoResult<Vec<ScheduledDraft>> {
        let drafts = self.drafts.read().await;
        Ok(drafts
            .values()
            .filter(|draft| draft.platform == platform && draft.status == DraftStatus::Scheduled)
            .cloned()
            .collect())
    }

    async fn reserve(
        &self,
        draft_id: i64,
        platform: Platform,
        instant: DateTime<Utc>,
    ) -> ScrivanoResult<ScheduledDraft> {
        let mut drafts = self.drafts.write().await;

        if let Some(holder) = drafts.values().find(|draft| {
            draft.platform == platform
                && draft.status == DraftStatus::Scheduled
                && draft.schedule_time == Some(instant)
        }) {
            return Err(ScheduleError::new(ScheduleErrorKind::SlotAlreadyReserved {
                platform: platform.to_string(),
                instant,
                draft_id: holder.id,
            }))?;
        }

        let draft = drafts.get_mut(&draft_id).ok_or_else(|| {
            ScheduleError::new(ScheduleErrorKind::Store(format!(
                "draft {draft_id} not found"
            )))
        })?;

        draft.status = DraftStatus::Scheduled;
        draft.schedule_time = Some(instant);
        Ok(draft.clone())
    }
}
