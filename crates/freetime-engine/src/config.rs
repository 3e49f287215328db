//! Availability parameters, passed explicitly rather than read from globals.

use chrono::{Duration, NaiveDate};
use chrono_tz::Tz;

use crate::error::{FreetimeError, Result};
use crate::window::WorkWindow;

pub const DEFAULT_DAY_START_HOUR: u32 = 9;
pub const DEFAULT_DAY_END_HOUR: u32 = 18;
pub const DEFAULT_MIN_DURATION_MINUTES: u32 = 15;
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::New_York;

/// Working hours, minimum free block length and the fixed timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityConfig {
    pub day_start_hour: u32,
    pub day_end_hour: u32,
    pub min_duration_minutes: u32,
    pub timezone: Tz,
}

impl Default for AvailabilityConfig {
    fn default() -> Self {
        Self {
            day_start_hour: DEFAULT_DAY_START_HOUR,
            day_end_hour: DEFAULT_DAY_END_HOUR,
            min_duration_minutes: DEFAULT_MIN_DURATION_MINUTES,
            timezone: DEFAULT_TIMEZONE,
        }
    }
}

impl AvailabilityConfig {
    /// The working window on `day`.
    ///
    /// # Errors
    /// See [`WorkWindow::new`].
    pub fn window_for(&self, day: NaiveDate) -> Result<WorkWindow> {
        WorkWindow::new(day, self.day_start_hour, self.day_end_hour, self.timezone)
    }

    pub fn min_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.min_duration_minutes))
    }
}

/// Parse an IANA timezone name such as `America/New_York`.
///
/// # Errors
/// Returns `FreetimeError::InvalidTimezone` for unknown names.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse()
        .map_err(|_| FreetimeError::InvalidTimezone(name.to_string()))
}
