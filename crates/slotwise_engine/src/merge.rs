// --- File: crates/slotwise_engine/src/merge.rs ---
use crate::normalize::BusyInterval;
use chrono::Duration;

/// Coalesces overlapping or near-adjacent busy intervals into disjoint
/// blocks, sorted by start. Intervals whose gap is within `tolerance` are
/// treated as touching. Classic interval merge, O(n log n), idempotent:
/// merged output always has gaps strictly larger than the tolerance.
pub fn merge_busy_intervals(intervals: &[BusyInterval], tolerance: Duration) -> Vec<BusyInterval> {
    if intervals.is_empty() {
        return Vec::new();
    }

    let mut sorted = intervals.to_vec();
    // Secondary key keeps the order deterministic for equal starts.
    sorted.sort_by_key(|interval| (interval.start, interval.end));

    let mut merged: Vec<BusyInterval> = Vec::with_capacity(sorted.len());
    let mut current = sorted[0].clone();
    for next in &sorted[1..] {
        if next.start <= current.end + tolerance {
            // Extend; the earliest contributing label is kept.
            current.end = current.end.max(next.end);
        } else {
            merged.push(current);
            current = next.clone();
        }
    }
    merged.push(current);
    merged
}
