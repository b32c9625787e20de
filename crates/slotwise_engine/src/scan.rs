// --- File: crates/slotwise_engine/src/scan.rs ---
use crate::error::EngineError;
use crate::merge::merge_busy_intervals;
use crate::normalize::{local_to_utc, BusyInterval};
use chrono::{DateTime, Datelike, Duration, NaiveTime, Timelike, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use slotwise_config::HolidayDate;
use tracing::debug;

/// Weekday policy when the caller does not constrain days: Monday to Friday.
pub const DEFAULT_WORKING_DAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// Caller-owned search request. The engine treats this as read-only input
/// and validates it before running any part of the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchParameters {
    pub range_start: DateTime<Utc>,
    pub range_end: DateTime<Utc>,
    pub duration_minutes: i64,
    /// Earliest local hour a slot may start at, 0..24.
    pub earliest_hour: u32,
    /// Latest local hour; slots must end at or before this hour, 0..24.
    pub latest_hour: u32,
    /// `None` means the default Monday-Friday policy.
    #[serde(default)]
    pub allowed_weekdays: Option<Vec<Weekday>>,
    pub requested_count: usize,
}

impl SearchParameters {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.duration_minutes <= 0 {
            return Err(EngineError::InvalidDuration(self.duration_minutes));
        }
        if self.earliest_hour >= self.latest_hour || self.latest_hour >= 24 {
            return Err(EngineError::InvalidHourWindow {
                earliest: self.earliest_hour,
                latest: self.latest_hour,
            });
        }
        if self.range_start > self.range_end {
            return Err(EngineError::InvalidRange);
        }
        if self.requested_count == 0 {
            return Err(EngineError::InvalidCount);
        }
        Ok(())
    }

    pub fn duration(&self) -> Duration {
        Duration::minutes(self.duration_minutes)
    }

    fn is_working_day(&self, weekday: Weekday) -> bool {
        match &self.allowed_weekdays {
            Some(days) => days.contains(&weekday),
            None => DEFAULT_WORKING_DAYS.contains(&weekday),
        }
    }
}

/// A maximal free span inside one civil day's work window, in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeGap {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Scans the requested range one civil day at a time and emits the free gaps
/// left between merged busy blocks inside each day's work window.
///
/// Expects `merged_busy` to already be disjoint and sorted (the merger's
/// output); intervals are still clipped and re-merged per day so a block
/// spanning midnight lands on every day it touches. Gaps shorter than the
/// requested duration are not emitted.
pub fn scan_free_gaps(
    merged_busy: &[BusyInterval],
    params: &SearchParameters,
    tz: Tz,
    holidays: &[HolidayDate],
) -> Vec<FreeGap> {
    let duration = params.duration();
    // Validated: earliest < latest < 24.
    let earliest = NaiveTime::from_hms_opt(params.earliest_hour, 0, 0).unwrap();
    let latest = NaiveTime::from_hms_opt(params.latest_hour, 0, 0).unwrap();

    let first_date = params.range_start.with_timezone(&tz).date_naive();
    let last_date = params.range_end.with_timezone(&tz).date_naive();

    let mut gaps = Vec::new();
    let mut date = first_date;
    while date <= last_date {
        let Some(next_date) = date.succ_opt() else {
            break;
        };

        if !params.is_working_day(date.weekday()) {
            debug!("skipping non-working day {date}");
            date = next_date;
            continue;
        }
        if holidays
            .iter()
            .any(|h| h.month == date.month() && h.day == date.day())
        {
            debug!("skipping holiday {date}");
            date = next_date;
            continue;
        }

        let (Some(window_start), Some(window_end)) = (
            local_to_utc(tz, date, earliest),
            local_to_utc(tz, date, latest),
        ) else {
            date = next_date;
            continue;
        };
        // Clip the day window to the overall search range.
        let window_start = window_start.max(params.range_start);
        let window_end = window_end.min(params.range_end);
        if window_start >= window_end {
            date = next_date;
            continue;
        }

        let day_gaps = day_free_gaps(merged_busy, window_start, window_end, duration);
        debug!("{}: {} free gaps in work window", date, day_gaps.len());
        gaps.extend(day_gaps);

        date = next_date;
    }

    // Boundary validation: a slot may end exactly at the latest hour but must
    // start strictly before it. The per-day windows already enforce this for
    // whole days; the check also covers range-clipped edges.
    gaps.retain(|gap| {
        let start_hour = gap.start.with_timezone(&tz).hour();
        let end_hour = gap.end.with_timezone(&tz).hour();
        start_hour >= params.earliest_hour
            && start_hour < params.latest_hour
            && end_hour <= params.latest_hour
    });
    gaps
}

/// Walks the busy blocks overlapping one day window left to right and
/// collects the gaps between them that can hold at least one slot.
fn day_free_gaps(
    merged_busy: &[BusyInterval],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    duration: Duration,
) -> Vec<FreeGap> {
    let day_busy: Vec<BusyInterval> = merged_busy
        .iter()
        .filter(|b| b.end > window_start && b.start < window_end)
        .map(|b| BusyInterval {
            start: b.start.max(window_start),
            end: b.end.min(window_end),
            label: b.label.clone(),
        })
        .collect();
    let day_busy = merge_busy_intervals(&day_busy, Duration::zero());

    let mut gaps = Vec::new();
    let mut cursor = window_start;
    for busy in &day_busy {
        let gap_end = busy.start.min(window_end);
        if gap_end - cursor >= duration {
            gaps.push(FreeGap {
                start: cursor,
                end: gap_end,
            });
        }
        cursor = cursor.max(busy.end);
    }
    if window_end - cursor >= duration {
        gaps.push(FreeGap {
            start: cursor,
            end: window_end,
        });
    }
    gaps
}
