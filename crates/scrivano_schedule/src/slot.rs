//! Slot-key grammar and instant resolution.

use chrono::{DateTime, Days, LocalResult, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use scrivano_error::{ScheduleError, ScheduleErrorKind, ScrivanoResult};

/// Day component of a slot key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SlotDay {
    /// The current local date (also the fallback for unknown days)
    #[default]
    Today,
    /// One calendar day ahead
    Tomorrow,
    /// Seven calendar days ahead
    NextWeek,
}

impl SlotDay {
    fn parse(s: &str) -> Self {
        match s {
            "tomorrow" => SlotDay::Tomorrow,
            "nextweek" => SlotDay::NextWeek,
            _ => SlotDay::Today,
        }
    }

    /// Calendar-day offset from the current local date.
    pub fn offset_days(self) -> u64 {
        match self {
            SlotDay::Today => 0,
            SlotDay::Tomorrow => 1,
            SlotDay::NextWeek => 7,
        }
    }
}

/// Time-of-day component of a slot key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SlotPart {
    /// 09:00 local (also the fallback for unknown parts)
    #[default]
    Am,
    /// 13:00 local
    Noon,
    /// 20:00 local
    Night,
}

impl SlotPart {
    fn parse(s: &str) -> Self {
        match s {
            "noon" => SlotPart::Noon,
            "night" => SlotPart::Night,
            _ => SlotPart::Am,
        }
    }

    /// Local hour of day for this part.
    pub fn hour(self) -> u32 {
        match self {
            SlotPart::Am => 9,
            SlotPart::Noon => 13,
            SlotPart::Night => 20,
        }
    }
}

/// A parsed `{day}_{part}` slot key.
///
/// Parsing is total: unknown days fall back to today and unknown parts to
/// 09:00, so a malformed key still schedules somewhere sensible rather
/// than failing the whole request.
///
/// # Examples
///
/// ```
/// use scrivano_schedule::{SlotDay, SlotKey, SlotPart};
///
/// let slot = SlotKey::parse("tomorrow_noon");
/// assert_eq!(slot.day, SlotDay::Tomorrow);
/// assert_eq!(slot.part, SlotPart::Noon);
///
/// let fallback = SlotKey::parse("someday_whenever");
/// assert_eq!(fallback.day, SlotDay::Today);
/// assert_eq!(fallback.part, SlotPart::Am);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SlotKey {
    /// Day component
    pub day: SlotDay,
    /// Time-of-day component
    pub part: SlotPart,
}

impl SlotKey {
    /// Parse a `day_part` key. Never fails; see the fallbacks above.
    pub fn parse(key: &str) -> Self {
        let mut pieces = key.splitn(2, '_');
        let day = SlotDay::parse(pieces.next().unwrap_or_default());
        let part = SlotPart::parse(pieces.next().unwrap_or_default());
        Self { day, part }
    }
}

/// Resolve a slot key to an absolute instant, evaluated now.
///
/// # Errors
///
/// Fails with `UnknownTimezone` when `timezone` is not an IANA zone name.
pub fn slot_to_instant(slot_key: &str, timezone: &str) -> ScrivanoResult<DateTime<Utc>> {
    slot_to_instant_at(slot_key, timezone, Utc::now())
}

/// Resolve a slot key to an absolute instant relative to a given `now`.
///
/// The current instant is converted to the target timezone, truncated to
/// local midnight, moved by the day offset, and given the part's hour with
/// zeroed minutes and seconds; the result converts back to UTC. The
/// resolution is independent of the current time of day.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Timelike, Utc};
/// use chrono_tz::Asia::Tokyo;
/// use scrivano_schedule::slot_to_instant_at;
///
/// let now = Utc.with_ymd_and_hms(2026, 3, 1, 23, 30, 0).unwrap();
/// let instant = slot_to_instant_at("today_noon", "Asia/Tokyo", now).unwrap();
/// assert_eq!(instant.with_timezone(&Tokyo).hour(), 13);
/// ```
pub fn slot_to_instant_at(
    slot_key: &str,
    timezone: &str,
    now: DateTime<Utc>,
) -> ScrivanoResult<DateTime<Utc>> {
    let tz: Tz = timezone.parse().map_err(|_| {
        ScheduleError::new(ScheduleErrorKind::UnknownTimezone(timezone.to_string()))
    })?;

    let slot = SlotKey::parse(slot_key);
    let local_date = now
        .with_timezone(&tz)
        .date_naive()
        .checked_add_days(Days::new(slot.day.offset_days()))
        .ok_or_else(|| {
            ScheduleError::new(ScheduleErrorKind::Store(
                "slot date out of calendar range".to_string(),
            ))
        })?;

    let wall_clock = NaiveTime::from_hms_opt(slot.part.hour(), 0, 0).unwrap_or_default();
    let naive = local_date.and_time(wall_clock);

    Ok(resolve_local(tz, naive).with_timezone(&Utc))
}

/// Map a naive local datetime onto the timezone's timeline.
///
/// Ambiguous times (fall-back transitions) take the earlier offset; times
/// in a spring-forward gap shift one hour later.
fn resolve_local(tz: Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(instant) => instant,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => {
            let shifted = naive + chrono::Duration::hours(1);
            match tz.from_local_datetime(&shifted) {
                LocalResult::Single(instant) => instant,
                LocalResult::Ambiguous(earlier, _) => earlier,
                LocalResult::None => tz.from_utc_datetime(&naive),
            }
        }
    }
}
