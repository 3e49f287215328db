//! The working-hours window and clamping of busy time to it.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;

use crate::error::{FreetimeError, Result};
use crate::interval::{BusyInterval, TimePoint};

/// The part of a day within which availability is evaluated.
///
/// Invariant: `day_start < day_end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkWindow {
    day_start: TimePoint,
    day_end: TimePoint,
}

impl WorkWindow {
    /// Build the window `[start_hour:00, end_hour:00)` on `day` in `tz`.
    ///
    /// # Errors
    /// Returns `FreetimeError::InvalidWindow` if either hour is above 23 or
    /// `start_hour >= end_hour`.
    ///
    /// A boundary inside a DST gap moves forward to the first local time after
    /// the transition.
    pub fn new(day: NaiveDate, start_hour: u32, end_hour: u32, tz: Tz) -> Result<Self> {
        if start_hour > 23 || end_hour > 23 {
            return Err(FreetimeError::InvalidWindow(format!(
                "hours must be within 0-23, got {}-{}",
                start_hour, end_hour
            )));
        }
        if start_hour >= end_hour {
            return Err(FreetimeError::InvalidWindow(format!(
                "start hour {} must be before end hour {}",
                start_hour, end_hour
            )));
        }

        let day_start = local_instant(day, start_hour, tz)?;
        let day_end = local_instant(day, end_hour, tz)?;
        Self::from_bounds(day_start, day_end)
    }

    /// Build a window from explicit bounds.
    ///
    /// # Errors
    /// Returns `FreetimeError::InvalidWindow` unless `day_start < day_end`.
    pub fn from_bounds(day_start: TimePoint, day_end: TimePoint) -> Result<Self> {
        if day_start >= day_end {
            return Err(FreetimeError::InvalidWindow(format!(
                "window start {} is not before end {}",
                day_start.to_rfc3339(),
                day_end.to_rfc3339()
            )));
        }
        Ok(Self { day_start, day_end })
    }

    pub fn day_start(&self) -> TimePoint {
        self.day_start
    }

    pub fn day_end(&self) -> TimePoint {
        self.day_end
    }

    pub fn duration(&self) -> Duration {
        self.day_end - self.day_start
    }

    pub fn timezone(&self) -> Tz {
        self.day_start.timezone()
    }

    /// Restrict `busy` to this window.
    ///
    /// Returns `None` when nothing of positive length remains: the interval
    /// lies outside the window or only touches one of its edges.
    pub fn clamp(&self, busy: &BusyInterval) -> Option<BusyInterval> {
        BusyInterval::new(
            busy.start().max(self.day_start),
            busy.end().min(self.day_end),
        )
    }
}

/// The full local day `[midnight, next midnight)` for `day` in `tz`.
///
/// This is the range a calendar query for that day covers. It is 23 or 25
/// hours long on DST transition days; where midnight itself is skipped the
/// day starts at the first local time after the transition.
pub fn day_bounds(day: NaiveDate, tz: Tz) -> Result<(TimePoint, TimePoint)> {
    let next = day
        .succ_opt()
        .ok_or_else(|| FreetimeError::InvalidDate(day.to_string()))?;
    Ok((local_instant(day, 0, tz)?, local_instant(next, 0, tz)?))
}

/// Longest DST gap searched when a local time does not exist.
const MAX_DST_GAP_MINUTES: i64 = 3 * 60;

/// Resolve `hour:00` on `day` in `tz`.
///
/// Ambiguous times take the earlier instant. Times skipped by a DST gap move
/// forward minute by minute to the first local time that exists.
fn local_instant(day: NaiveDate, hour: u32, tz: Tz) -> Result<TimePoint> {
    let time = NaiveTime::from_hms_opt(hour, 0, 0)
        .ok_or_else(|| FreetimeError::InvalidWindow(format!("invalid hour {}", hour)))?;
    let local = NaiveDateTime::new(day, time);

    (0..=MAX_DST_GAP_MINUTES)
        .find_map(|shift| {
            tz.from_local_datetime(&(local + Duration::minutes(shift)))
                .earliest()
        })
        .ok_or_else(|| {
            FreetimeError::InvalidWindow(format!("no local time near {} in {}", local, tz))
        })
}
