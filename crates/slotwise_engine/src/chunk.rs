// --- File: crates/slotwise_engine/src/chunk.rs ---
use crate::scan::FreeGap;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A fixed-duration candidate meeting time, in UTC. `end - start` always
/// equals the requested duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Slot {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Tiles a free gap exhaustively with duration-sized slots, back to back
/// from the gap start, in chronological order. A gap shorter than the
/// duration yields nothing.
pub fn split_gap_into_slots(gap: &FreeGap, duration: Duration) -> Vec<Slot> {
    let mut slots = Vec::new();
    if duration <= Duration::zero() {
        return slots;
    }
    let mut cursor = gap.start;
    while cursor + duration <= gap.end {
        slots.push(Slot {
            start: cursor,
            end: cursor + duration,
        });
        cursor += duration;
    }
    slots
}
