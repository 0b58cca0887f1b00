//! Integration tests for slot resolution and reservation.

use chrono::{TimeZone, Timelike, Utc};
use chrono_tz::Asia::Tokyo;
use scrivano_core::{DraftStatus, Platform, ScheduledDraft};
use scrivano_schedule::{slot_to_instant_at, MemoryScheduleStore, SlotScheduler};

fn draft(id: i64, platform: Platform) -> ScheduledDraft {
    ScheduledDraft {
        id,
        platform,
        account_id: None,
        text: format!("draft {id}"),
        status: DraftStatus::Draft,
        schedule_time: None,
    }
}

async fn store_with_drafts(drafts: Vec<ScheduledDraft>) -> MemoryScheduleStore {
    let store = MemoryScheduleStore::new();
    for d in drafts {
        store.add_draft(d).await;
    }
    store
}

#[test]
fn today_noon_in_tokyo_is_always_13_local() {
    // Sweep across times of day, including ones where the UTC date and
    // the Tokyo date differ.
    for hour in [0, 3, 11, 14, 20, 23] {
        let now = Utc.with_ymd_and_hms(2026, 5, 9, hour, 17, 42).unwrap();
        let instant = slot_to_instant_at("today_noon", "Asia/Tokyo", now).unwrap();
        let local = instant.with_timezone(&Tokyo);
        assert_eq!(local.hour(), 13);
        assert_eq!(local.minute(), 0);
        assert_eq!(local.date_naive(), now.with_timezone(&Tokyo).date_naive());
    }
}

#[test]
fn tomorrow_night_is_20_local_one_day_ahead() {
    let now = Utc.with_ymd_and_hms(2026, 5, 9, 6, 0, 0).unwrap();
    let instant = slot_to_instant_at("tomorrow_night", "Asia/Tokyo", now).unwrap();
    let local = instant.with_timezone(&Tokyo);
    assert_eq!(local.hour(), 20);
    assert_eq!(
        local.date_naive(),
        now.with_timezone(&Tokyo).date_naive() + chrono::Days::new(1)
    );
}

#[test]
fn nextweek_am_is_09_local_seven_days_ahead() {
    let now = Utc.with_ymd_and_hms(2026, 5, 9, 6, 0, 0).unwrap();
    let instant = slot_to_instant_at("nextweek_am", "Europe/Berlin", now).unwrap();
    let local = instant.with_timezone(&chrono_tz::Europe::Berlin);
    assert_eq!(local.hour(), 9);
    assert_eq!(
        local.date_naive(),
        now.with_timezone(&chrono_tz::Europe::Berlin).date_naive() + chrono::Days::new(7)
    );
}

#[test]
fn unknown_slot_components_fall_back() {
    let now = Utc.with_ymd_and_hms(2026, 5, 9, 6, 0, 0).unwrap();
    let fallback = slot_to_instant_at("blursday_brunch", "Asia/Tokyo", now).unwrap();
    let explicit = slot_to_instant_at("today_am", "Asia/Tokyo", now).unwrap();
    assert_eq!(fallback, explicit);
}

#[tokio::test]
async fn scheduling_persists_status_and_instant() {
    let store = store_with_drafts(vec![draft(1, Platform::Twitter)]).await;
    let scheduler = SlotScheduler::new(store);

    let scheduled = scheduler
        .schedule(1, "today_noon", "Asia/Tokyo", Platform::Twitter)
        .await
        .unwrap();
    assert_eq!(scheduled.status, DraftStatus::Scheduled);
    assert!(scheduled.schedule_time.is_some());
}

#[tokio::test]
async fn double_booking_same_platform_is_rejected() {
    let store = store_with_drafts(vec![draft(1, Platform::Twitter), draft(2, Platform::Twitter)])
        .await;
    let scheduler = SlotScheduler::new(store);

    scheduler
        .schedule(1, "today_noon", "Asia/Tokyo", Platform::Twitter)
        .await
        .unwrap();

    let err = scheduler
        .schedule(2, "today_noon", "Asia/Tokyo", Platform::Twitter)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("already reserved"));
}

#[tokio::test]
async fn same_instant_different_platforms_both_succeed() {
    let store = store_with_drafts(vec![draft(1, Platform::Twitter), draft(2, Platform::Bluesky)])
        .await;
    let scheduler = SlotScheduler::new(store);

    scheduler
        .schedule(1, "today_noon", "Asia/Tokyo", Platform::Twitter)
        .await
        .unwrap();
    scheduler
        .schedule(2, "today_noon", "Asia/Tokyo", Platform::Bluesky)
        .await
        .unwrap();
}

#[tokio::test]
async fn reserved_instants_indexes_by_instant() {
    let store = store_with_drafts(vec![draft(1, Platform::Twitter), draft(2, Platform::Twitter)])
        .await;
    let scheduler = SlotScheduler::new(store);

    let first = scheduler
        .schedule(1, "today_noon", "Asia/Tokyo", Platform::Twitter)
        .await
        .unwrap();
    scheduler
        .schedule(2, "tomorrow_noon", "Asia/Tokyo", Platform::Twitter)
        .await
        .unwrap();

    let index = scheduler
        .reserved_instants(Platform::Twitter)
        .await
        .unwrap();
    assert_eq!(index.len(), 2);
    assert_eq!(index.get(&first.schedule_time.unwrap()), Some(&1));
}

#[tokio::test]
async fn draft_status_drafts_do_not_reserve() {
    // An unscheduled draft occupying no instant must not block the slot.
    let store = store_with_drafts(vec![draft(1, Platform::Twitter), draft(2, Platform::Twitter)])
        .await;
    let scheduler = SlotScheduler::new(store);

    let index = scheduler
        .reserved_instants(Platform::Twitter)
        .await
        .unwrap();
    assert!(index.is_empty());

    scheduler
        .schedule(2, "today_am", "Asia/Tokyo", Platform::Twitter)
        .await
        .unwrap();
}

#[tokio::test]
async fn reserving_unknown_draft_is_a_store_error() {
    let store = MemoryScheduleStore::new();
    let scheduler = SlotScheduler::new(store);

    let err = scheduler
        .schedule(99, "today_am", "Asia/Tokyo", Platform::Twitter)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[tokio::test]
async fn unknown_timezone_surfaces_before_any_write() {
    let store = store_with_drafts(vec![draft(1, Platform::Twitter)]).await;
    let scheduler = SlotScheduler::new(store);

    let err = scheduler
        .schedule(1, "today_am", "Nowhere/Null", Platform::Twitter)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Unknown timezone"));
}
