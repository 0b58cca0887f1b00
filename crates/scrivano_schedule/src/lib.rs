//! Slot-based scheduling with double-booking prevention.
//!
//! A slot key like `tomorrow_noon` names a wall-clock time in the
//! account's timezone; the scheduler resolves it to an absolute instant
//! and reserves it against the persisted schedule. Slot keys are not
//! unique in the store; uniqueness is enforced only on the resolved
//! instant per target platform.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod memory;
mod scheduler;
mod slot;

pub use memory::MemoryScheduleStore;
pub use scheduler::SlotScheduler;
pub use slot::{slot_to_instant, slot_to_instant_at, SlotDay, SlotKey, SlotPart};
