// --- File: crates/slotwise_engine/src/error.rs ---
use thiserror::Error;

/// Fatal parameter errors, surfaced before any computation runs.
///
/// Malformed individual events are deliberately *not* represented here: they
/// are absorbed inside the normalizer (skipped and counted). An empty slot
/// list is a valid result, not an error.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid hour window: earliest ({earliest}) must be before latest ({latest}), both in 0..24")]
    InvalidHourWindow { earliest: u32, latest: u32 },
    #[error("Invalid duration: {0} minutes (must be positive)")]
    InvalidDuration(i64),
    #[error("Invalid range: start must not be after end")]
    InvalidRange,
    #[error("Invalid requested count: must be at least 1")]
    InvalidCount,
    #[error("Unknown timezone: {0}")]
    UnknownTimeZone(String),
}
