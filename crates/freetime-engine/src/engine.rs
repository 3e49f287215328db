//! The availability pipeline: normalize → clamp → merge → find gaps.
//!
//! Any all-day event short-circuits the computation: the day counts as fully
//! occupied and no partial-day free time is reported, even around other
//! timed events.

use chrono::Duration;
use tracing::{debug, trace};

use crate::event::{normalize, NormalizedEvent, RawEvent};
use crate::gaps::find_gaps;
use crate::interval::{BusyInterval, FreeInterval};
use crate::merge::merge_busy;
use crate::window::WorkWindow;

/// Availability for one working window.
#[derive(Debug, Clone, PartialEq)]
pub struct Availability {
    /// The window that was analyzed.
    pub window: WorkWindow,
    /// Merged busy intervals clamped to the window (sorted, disjoint).
    /// Empty when `blocked_all_day` is set.
    pub busy: Vec<BusyInterval>,
    /// Free intervals meeting the minimum duration (sorted, disjoint).
    pub free: Vec<FreeInterval>,
    /// An all-day event occupied the day.
    pub blocked_all_day: bool,
}

/// Compute busy and free time for `window` from a day's raw events.
pub fn compute_availability(
    events: &[RawEvent],
    window: &WorkWindow,
    min_duration: Duration,
) -> Availability {
    let tz = window.timezone();
    let mut busy = Vec::with_capacity(events.len());

    for event in events {
        match normalize(event, tz) {
            NormalizedEvent::AllDay => {
                debug!(
                    id = ?event.id,
                    summary = ?event.summary,
                    "all-day event blocks the whole day"
                );
                return Availability {
                    window: *window,
                    busy: Vec::new(),
                    free: Vec::new(),
                    blocked_all_day: true,
                };
            }
            NormalizedEvent::Busy(interval) => busy.push(interval),
            NormalizedEvent::Ignored => {
                debug!(
                    id = ?event.id,
                    summary = ?event.summary,
                    "ignoring event without usable time"
                );
            }
        }
    }

    let clamped: Vec<BusyInterval> = busy.iter().filter_map(|b| window.clamp(b)).collect();
    trace!(
        events = events.len(),
        timed = busy.len(),
        in_window = clamped.len(),
        "normalized and clamped events"
    );

    let merged = merge_busy(clamped);
    let free = find_gaps(&merged, window, min_duration);
    trace!(busy = merged.len(), free = free.len(), "computed availability");

    Availability {
        window: *window,
        busy: merged,
        free,
        blocked_all_day: false,
    }
}

/// Free intervals within `window` lasting at least `min_duration`.
///
/// Returns an empty list when any event is an all-day event.
pub fn find_free_blocks(
    events: &[RawEvent],
    window: &WorkWindow,
    min_duration: Duration,
) -> Vec<FreeInterval> {
    compute_availability(events, window, min_duration).free
}
