// --- File: crates/slotwise_engine/src/select.rs ---
use crate::chunk::Slot;
use chrono_tz::Tz;
use std::collections::HashSet;
use tracing::debug;

/// Picks up to `count` slots from chronologically sorted candidates.
///
/// Pass 1 prefers day diversity: the first slot of every civil date (in the
/// given timezone) is taken until `count` is reached. Pass 2 fills any
/// shortfall with remaining slots that do not overlap an already chosen slot
/// on the same date. First match wins in both passes, so identical input
/// always yields the identical choice. The result is sorted by start and may
/// be shorter than `count` (never padded, never an error).
pub fn select_slots(slots: &[Slot], count: usize, tz: Tz) -> Vec<Slot> {
    let mut chosen: Vec<Slot> = Vec::with_capacity(count.min(slots.len()));
    let mut taken = vec![false; slots.len()];
    let mut seen_dates = HashSet::new();

    for (i, slot) in slots.iter().enumerate() {
        if chosen.len() >= count {
            break;
        }
        let date = slot.start.with_timezone(&tz).date_naive();
        if seen_dates.insert(date) {
            chosen.push(*slot);
            taken[i] = true;
        }
    }
    let from_distinct_days = chosen.len();

    if chosen.len() < count {
        for (i, slot) in slots.iter().enumerate() {
            if chosen.len() >= count {
                break;
            }
            if taken[i] {
                continue;
            }
            let date = slot.start.with_timezone(&tz).date_naive();
            let conflicts = chosen.iter().any(|existing| {
                existing.start.with_timezone(&tz).date_naive() == date
                    && slot.start < existing.end
                    && slot.end > existing.start
            });
            if !conflicts {
                chosen.push(*slot);
                taken[i] = true;
            }
        }
    }

    chosen.sort_by_key(|slot| slot.start);
    debug!(
        "selected {} of {} requested slots ({} from distinct days)",
        chosen.len(),
        count,
        from_distinct_days
    );
    chosen
}
