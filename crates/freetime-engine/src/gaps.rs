//! Sweep merged busy time against the working window for free intervals.

use chrono::Duration;

use crate::interval::{BusyInterval, FreeInterval};
use crate::window::WorkWindow;

/// Find the free intervals of `window` not covered by `merged`.
///
/// `merged` must be sorted and disjoint, as produced by
/// [`merge_busy`](crate::merge::merge_busy), and lie within the window.
/// A gap is reported only if it lasts at least `min_duration`; a gap of
/// exactly `min_duration` is kept.
pub fn find_gaps(
    merged: &[BusyInterval],
    window: &WorkWindow,
    min_duration: Duration,
) -> Vec<FreeInterval> {
    let mut free = Vec::new();
    let mut cursor = window.day_start();

    let mut push_gap = |start, end| {
        let gap = FreeInterval { start, end };
        if gap.duration() >= min_duration {
            free.push(gap);
        }
    };

    for busy in merged {
        if cursor < busy.start() {
            push_gap(cursor, busy.start());
        }
        cursor = cursor.max(busy.end());
    }

    // Trailing gap after the last busy period.
    if cursor < window.day_end() {
        push_gap(cursor, window.day_end());
    }

    free
}
