#[cfg(test)]
mod tests {
    use crate::chunk::split_gap_into_slots;
    use crate::engine::find_available_slots;
    use crate::event::{EventTime, RawEvent};
    use crate::merge::merge_busy_intervals;
    use crate::normalize::BusyInterval;
    use crate::scan::{FreeGap, SearchParameters};
    use crate::select::select_slots;
    use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
    use chrono_tz::Europe::Stockholm;
    use proptest::prelude::*;
    use slotwise_config::ScheduleConfig;
    use std::collections::HashSet;

    // Monday 2025-05-05, 00:00 UTC.
    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 5, 0, 0, 0).unwrap()
    }

    fn intervals_from_spans(spans: &[(i64, i64)]) -> Vec<BusyInterval> {
        spans
            .iter()
            .map(|&(offset_minutes, length_minutes)| BusyInterval {
                start: base() + Duration::minutes(offset_minutes),
                end: base() + Duration::minutes(offset_minutes + length_minutes),
                label: "busy".to_string(),
            })
            .collect()
    }

    proptest! {
        // merge(merge(X)) == merge(X), and the output is disjoint beyond
        // the tolerance.
        #[test]
        fn merge_is_idempotent_and_disjoint(
            spans in prop::collection::vec((0i64..10_000, 1i64..300), 0..20),
            tolerance_minutes in 0i64..10,
        ) {
            let tolerance = Duration::minutes(tolerance_minutes);
            let intervals = intervals_from_spans(&spans);

            let once = merge_busy_intervals(&intervals, tolerance);
            let twice = merge_busy_intervals(&once, tolerance);
            prop_assert_eq!(&once, &twice);

            for pair in once.windows(2) {
                prop_assert!(pair[1].start > pair[0].end + tolerance,
                    "merged intervals must be separated by more than the tolerance: {:?}", pair);
            }
        }

        // split(G, d) yields floor(len(G)/d) slots tiling G from its start.
        #[test]
        fn chunking_is_exhaustive_and_non_overlapping(
            gap_minutes in 0i64..2_000,
            duration_minutes in 1i64..120,
        ) {
            let gap = FreeGap {
                start: base(),
                end: base() + Duration::minutes(gap_minutes),
            };
            let duration = Duration::minutes(duration_minutes);

            let slots = split_gap_into_slots(&gap, duration);

            prop_assert_eq!(slots.len() as i64, gap_minutes / duration_minutes);
            let mut cursor = gap.start;
            for slot in &slots {
                prop_assert_eq!(slot.start, cursor);
                prop_assert_eq!(slot.end - slot.start, duration);
                cursor = slot.end;
            }
            prop_assert!(cursor + duration > gap.end, "a further slot would still fit");
        }

        // len(select(slots, n)) == min(n, len(slots)) for non-overlapping
        // candidates, and n distinct days are used when available.
        #[test]
        fn selection_cardinality_and_diversity(
            day_count in 1usize..6,
            slots_per_day in 1usize..6,
            requested in 1usize..20,
        ) {
            let mut candidates = Vec::new();
            for day in 0..day_count {
                for i in 0..slots_per_day {
                    let start = base()
                        + Duration::days(day as i64)
                        + Duration::hours(9)
                        + Duration::minutes(30 * i as i64);
                    candidates.push(crate::chunk::Slot {
                        start,
                        end: start + Duration::minutes(30),
                    });
                }
            }
            candidates.sort_by_key(|s| s.start);

            let chosen = select_slots(&candidates, requested, Stockholm);

            prop_assert_eq!(chosen.len(), requested.min(candidates.len()));

            let distinct_days: HashSet<_> = chosen
                .iter()
                .map(|s| s.start.with_timezone(&Stockholm).date_naive())
                .collect();
            if day_count >= requested {
                prop_assert_eq!(distinct_days.len(), requested);
            }
            for pair in chosen.windows(2) {
                prop_assert!(pair[0].start <= pair[1].start, "output must be sorted");
            }
        }

        // Every slot the full pipeline emits respects the hour boundaries:
        // start in [earliest, latest), end at or before latest:00.
        #[test]
        fn pipeline_respects_hour_boundaries(
            spans in prop::collection::vec((0i64..7 * 24 * 60, 15i64..240), 0..10),
            duration_minutes in 15i64..120,
        ) {
            let events: Vec<RawEvent> = spans
                .iter()
                .map(|&(offset, length)| RawEvent {
                    summary: Some("meeting".to_string()),
                    start: EventTime::timed(
                        (base() + Duration::minutes(offset)).to_rfc3339(),
                    ),
                    end: EventTime::timed(
                        (base() + Duration::minutes(offset + length)).to_rfc3339(),
                    ),
                })
                .collect();

            let params = SearchParameters {
                range_start: base(),
                range_end: base() + Duration::days(7),
                duration_minutes,
                earliest_hour: 9,
                latest_hour: 17,
                allowed_weekdays: None,
                requested_count: 100,
            };
            let schedule = ScheduleConfig::default();

            let outcome = find_available_slots(&events, &params, &schedule).unwrap();

            let work_start = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
            let work_end = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
            for slot in &outcome.slots {
                let start_local = slot.start.with_timezone(&Stockholm);
                let end_local = slot.end.with_timezone(&Stockholm);
                prop_assert!(start_local.time() >= work_start,
                    "slot starts before the work window: {}", start_local);
                prop_assert!(start_local.time() < work_end,
                    "slot starts at or after the latest hour: {}", start_local);
                prop_assert!(end_local.time() <= work_end,
                    "slot ends after the work window: {}", end_local);
                prop_assert_eq!(slot.duration_minutes(), duration_minutes);
            }
        }
    }
}
