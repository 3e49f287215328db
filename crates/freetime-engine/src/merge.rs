//! Coalesce busy intervals into a minimal, sorted, non-overlapping set.

use crate::interval::BusyInterval;

/// Merge overlapping or touching busy intervals.
///
/// Returns intervals sorted by start with `merged[i].end < merged[i + 1].start`,
/// covering exactly the union of the input. Merging an already merged list
/// returns it unchanged.
pub fn merge_busy(mut intervals: Vec<BusyInterval>) -> Vec<BusyInterval> {
    // Order among equal starts does not affect the result.
    intervals.sort_unstable_by_key(|b| b.start());

    let mut merged: Vec<BusyInterval> = Vec::with_capacity(intervals.len());
    for busy in intervals {
        if let Some(last) = merged.last_mut() {
            if busy.start() <= last.end() {
                // Overlapping or adjacent — extend the current interval.
                last.extend_to(busy.end());
                continue;
            }
        }
        merged.push(busy);
    }

    merged
}
