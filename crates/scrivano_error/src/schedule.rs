//! Slot scheduler error types.

use chrono::{DateTime, Utc};

/// Specific error conditions for slot scheduling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ScheduleErrorKind {
    /// Another draft is already scheduled at the resolved instant
    #[display("Slot at {} already reserved on {} by draft {}", instant, platform, draft_id)]
    SlotAlreadyReserved {
        /// Target platform
        platform: String,
        /// The resolved publish instant that collided
        instant: DateTime<Utc>,
        /// Identifier of the draft holding the reservation
        draft_id: i64,
    },
    /// The requested timezone name could not be resolved
    #[display("Unknown timezone: {}", _0)]
    UnknownTimezone(String),
    /// The store rejected or failed the reservation write
    #[display("Schedule store failure: {}", _0)]
    Store(String),
}

/// Error type for slot scheduling operations.
///
/// `SlotAlreadyReserved` is expected and recoverable: the caller should
/// offer a different slot rather than treat it as fatal.
///
/// # Examples
///
/// ```
/// use scrivano_error::{ScheduleError, ScheduleErrorKind};
///
/// let err = ScheduleError::new(ScheduleErrorKind::UnknownTimezone("Mars/Olympus".into()));
/// assert!(format!("{}", err).contains("Unknown timezone"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Schedule Error: {} at line {} in {}", kind, line, file)]
pub struct ScheduleError {
    /// The specific error condition
    pub kind: ScheduleErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ScheduleError {
    /// Create a new ScheduleError at the current source location.
    #[track_caller]
    pub fn new(kind: ScheduleErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether this error is a slot collision the caller can recover from.
    pub fn is_collision(&self) -> bool {
        matches!(self.kind, ScheduleErrorKind::SlotAlreadyReserved { .. })
    }
}
