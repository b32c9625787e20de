// --- File: crates/slotwise_engine/src/normalize.rs ---
use crate::classify::{classify, EventClass, LabelRule};
use crate::event::RawEvent;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A canonical busy span in UTC. Invariant: `start < end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub label: String,
}

/// Result of normalizing one batch of raw events. A malformed event never
/// aborts the batch; it is skipped and counted here instead.
#[derive(Debug, Clone, Default)]
pub struct NormalizeOutcome {
    pub busy: Vec<BusyInterval>,
    pub skipped: usize,
}

/// Resolves a local civil time to UTC. DST gaps and folds take the earliest
/// valid interpretation; `None` only when the local time does not exist at
/// all in the zone.
pub(crate) fn local_to_utc(tz: Tz, date: NaiveDate, time: NaiveTime) -> Option<DateTime<Utc>> {
    tz.from_local_datetime(&date.and_time(time))
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Converts raw busy records into canonical `BusyInterval`s: timed events
/// buffered on both sides, qualifying all-day events expanded to one full
/// civil day per day spanned, everything else dropped.
pub fn normalize_events(
    events: &[RawEvent],
    tz: Tz,
    buffer: Duration,
    rules: &[LabelRule],
) -> NormalizeOutcome {
    let mut outcome = NormalizeOutcome::default();

    for event in events {
        let label = event.label();
        match classify(label, event.is_all_day(), rules) {
            EventClass::Ignored => {
                debug!("skipping ignored event: {label}");
            }
            EventClass::FullDayBlock => {
                if !push_full_day_block(event, tz, &mut outcome.busy) {
                    debug!("skipped malformed all-day event: {label}");
                    outcome.skipped += 1;
                }
            }
            EventClass::Timed => {
                if !push_timed(event, buffer, &mut outcome.busy) {
                    debug!("skipped malformed event: {label}");
                    outcome.skipped += 1;
                }
            }
        }
    }

    outcome
}

/// Emits one interval covering the full civil day for every day the all-day
/// event spans. The provider's end date is exclusive.
fn push_full_day_block(event: &RawEvent, tz: Tz, busy: &mut Vec<BusyInterval>) -> bool {
    let (Some(start_raw), Some(end_raw)) = (event.start.date.as_deref(), event.end.date.as_deref())
    else {
        return false;
    };
    let (Ok(start_date), Ok(end_date)) = (
        start_raw.parse::<NaiveDate>(),
        end_raw.parse::<NaiveDate>(),
    ) else {
        return false;
    };
    if start_date >= end_date {
        return false;
    }

    let day_end_time = NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999).unwrap();
    let mut date = start_date;
    while date < end_date {
        let (Some(day_start), Some(day_end)) = (
            local_to_utc(tz, date, NaiveTime::MIN),
            local_to_utc(tz, date, day_end_time),
        ) else {
            return false;
        };
        debug!("blocking entire day {date} for: {}", event.label());
        busy.push(BusyInterval {
            start: day_start,
            end: day_end,
            label: event.label().to_string(),
        });
        let Some(next) = date.succ_opt() else {
            return false;
        };
        date = next;
    }
    true
}

/// Parses a timed event and widens it by the buffer on both sides.
fn push_timed(event: &RawEvent, buffer: Duration, busy: &mut Vec<BusyInterval>) -> bool {
    let (Some(start_raw), Some(end_raw)) = (
        event.start.date_time.as_deref(),
        event.end.date_time.as_deref(),
    ) else {
        return false;
    };
    let (Ok(start), Ok(end)) = (
        DateTime::parse_from_rfc3339(start_raw),
        DateTime::parse_from_rfc3339(end_raw),
    ) else {
        return false;
    };
    let start = start.with_timezone(&Utc);
    let end = end.with_timezone(&Utc);
    if start >= end {
        return false;
    }

    busy.push(BusyInterval {
        start: start - buffer,
        end: end + buffer,
        label: event.label().to_string(),
    });
    true
}
