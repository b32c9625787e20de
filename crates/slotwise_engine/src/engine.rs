// --- File: crates/slotwise_engine/src/engine.rs ---
use crate::chunk::{split_gap_into_slots, Slot};
use crate::classify::rules_from_config;
use crate::error::EngineError;
use crate::event::RawEvent;
use crate::merge::merge_busy_intervals;
use crate::normalize::normalize_events;
use crate::scan::{scan_free_gaps, SearchParameters};
use crate::select::select_slots;
use chrono::Duration;
use chrono_tz::Tz;
use serde::Serialize;
use slotwise_config::ScheduleConfig;
use std::str::FromStr;
use tracing::debug;

/// Everything a response formatter needs: the chosen slots plus how many raw
/// events were dropped as malformed along the way.
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityOutcome {
    pub slots: Vec<Slot>,
    pub skipped_events: usize,
}

/// Runs the full availability pipeline over a snapshot of raw busy records:
/// normalize, merge, scan day by day, chunk, select.
///
/// Pure and synchronous; parameter validation happens before any other work,
/// and an empty slot list is a valid outcome, not an error.
pub fn find_available_slots(
    events: &[RawEvent],
    params: &SearchParameters,
    schedule: &ScheduleConfig,
) -> Result<AvailabilityOutcome, EngineError> {
    params.validate()?;
    let tz = Tz::from_str(&schedule.time_zone)
        .map_err(|_| EngineError::UnknownTimeZone(schedule.time_zone.clone()))?;

    debug!(
        "searching {} - {} for {} x {} min slots in {}",
        params.range_start,
        params.range_end,
        params.requested_count,
        params.duration_minutes,
        schedule.time_zone,
    );

    let rules = rules_from_config(schedule);
    let normalized = normalize_events(
        events,
        tz,
        Duration::minutes(schedule.buffer_minutes),
        &rules,
    );
    if normalized.skipped > 0 {
        debug!("skipped {} malformed events", normalized.skipped);
    }

    let merged = merge_busy_intervals(
        &normalized.busy,
        Duration::minutes(schedule.merge_tolerance_minutes),
    );
    let gaps = scan_free_gaps(&merged, params, tz, &schedule.holidays);

    let duration = params.duration();
    let mut candidates: Vec<Slot> = gaps
        .iter()
        .flat_map(|gap| split_gap_into_slots(gap, duration))
        .collect();
    candidates.sort_by_key(|slot| slot.start);
    debug!(
        "{} busy blocks, {} free gaps, {} candidate slots",
        merged.len(),
        gaps.len(),
        candidates.len()
    );

    let slots = select_slots(&candidates, params.requested_count, tz);
    Ok(AvailabilityOutcome {
        slots,
        skipped_events: normalized.skipped,
    })
}
