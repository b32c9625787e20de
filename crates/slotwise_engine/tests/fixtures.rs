//! Test fixtures for availability pipeline tests
//!
//! Factory functions producing raw events shaped like the calendar
//! provider's wire payloads, plus a schedule configuration for tests.

use chrono::{DateTime, Duration, Utc};
use slotwise_config::ScheduleConfig;
use slotwise_engine::{EventTime, RawEvent};

/// Creates a timed raw event from RFC 3339 strings.
#[allow(dead_code)]
pub fn timed_event(summary: &str, start: &str, end: &str) -> RawEvent {
    RawEvent {
        summary: Some(summary.to_string()),
        start: EventTime::timed(start),
        end: EventTime::timed(end),
    }
}

/// Creates an all-day raw event; the end date is exclusive, as providers
/// ship it.
#[allow(dead_code)]
pub fn all_day_event(summary: &str, start_date: &str, end_date: &str) -> RawEvent {
    RawEvent {
        summary: Some(summary.to_string()),
        start: EventTime::all_day(start_date),
        end: EventTime::all_day(end_date),
    }
}

/// Creates a run of back-to-back meetings for load-style tests.
#[allow(dead_code)]
pub fn meeting_run(
    base_time: DateTime<Utc>,
    count: usize,
    duration_minutes: i64,
    gap_minutes: i64,
) -> Vec<RawEvent> {
    let mut events = Vec::new();
    let mut current = base_time;
    for i in 0..count {
        let end = current + Duration::minutes(duration_minutes);
        events.push(timed_event(
            &format!("meeting {i}"),
            &current.to_rfc3339(),
            &end.to_rfc3339(),
        ));
        current = end + Duration::minutes(gap_minutes);
    }
    events
}

/// Schedule used by the integration suite: the documented defaults with a
/// 5 minute buffer and the holiday table cleared so tests control which
/// days block.
#[allow(dead_code)]
pub fn test_schedule() -> ScheduleConfig {
    ScheduleConfig {
        buffer_minutes: 5,
        holidays: Vec::new(),
        ..ScheduleConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_event_shape() {
        let event = timed_event(
            "Sync",
            "2025-05-05T10:00:00+02:00",
            "2025-05-05T11:00:00+02:00",
        );
        assert!(!event.is_all_day());
        assert_eq!(event.label(), "Sync");
    }

    #[test]
    fn test_all_day_event_shape() {
        let event = all_day_event("Public Holiday", "2025-05-05", "2025-05-06");
        assert!(event.is_all_day());
    }

    #[test]
    fn test_meeting_run_spacing() {
        let base = Utc::now();
        let events = meeting_run(base, 3, 30, 15);
        assert_eq!(events.len(), 3);
        let second_start =
            DateTime::parse_from_rfc3339(events[1].start.date_time.as_deref().unwrap()).unwrap();
        assert_eq!(second_start, base + Duration::minutes(45));
    }
}
