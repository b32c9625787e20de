// --- File: crates/slotwise_engine/src/lib.rs ---
// Declare modules within this crate
pub mod chunk;
pub mod classify;
pub mod engine;
#[cfg(test)]
mod engine_proptest;
pub mod error;
pub mod event;
pub mod merge;
pub mod normalize;
pub mod scan;
pub mod select;

pub use chunk::{split_gap_into_slots, Slot};
pub use engine::{find_available_slots, AvailabilityOutcome};
pub use error::EngineError;
pub use event::{EventTime, RawEvent};
pub use merge::merge_busy_intervals;
pub use normalize::{normalize_events, BusyInterval, NormalizeOutcome};
pub use scan::{scan_free_gaps, FreeGap, SearchParameters};
pub use select::select_slots;
