//! Busy and free interval types.

use chrono::{DateTime, Duration};
use chrono_tz::Tz;

/// An absolute instant carrying the timezone it is displayed in.
pub type TimePoint = DateTime<Tz>;

/// A half-open span `[start, end)` during which the calendar owner is unavailable.
///
/// Construction goes through [`BusyInterval::new`], which rejects empty and
/// inverted spans, so every value satisfies `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BusyInterval {
    start: TimePoint,
    end: TimePoint,
}

impl BusyInterval {
    /// Build a busy interval, or `None` unless `start < end`.
    pub fn new(start: TimePoint, end: TimePoint) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    pub fn start(&self) -> TimePoint {
        self.start
    }

    pub fn end(&self) -> TimePoint {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Widen the end of this interval. Used by the merger; never shrinks.
    pub(crate) fn extend_to(&mut self, end: TimePoint) {
        self.end = self.end.max(end);
    }
}

/// A reportable gap inside the working window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FreeInterval {
    pub start: TimePoint,
    pub end: TimePoint,
}

impl FreeInterval {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whole minutes, rounded down.
    pub fn duration_minutes(&self) -> i64 {
        self.duration().num_minutes()
    }
}
