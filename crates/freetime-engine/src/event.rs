//! Raw event records and their normalization into busy time.
//!
//! Calendar services hand back loosely shaped records: a timed event carries
//! `start.dateTime`/`end.dateTime`, an all-day event carries `start.date`,
//! and anything else may be missing or garbled. [`normalize`] resolves each
//! record exactly once into a [`NormalizedEvent`] so that later stages never
//! look at optional fields again.

use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::interval::{BusyInterval, TimePoint};

/// One event as returned by a calendar listing.
///
/// Every field is optional and decoded leniently: a field with an unexpected
/// JSON shape becomes `None` instead of failing the whole listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub start: Option<EventTime>,
    #[serde(default, deserialize_with = "lenient")]
    pub end: Option<EventTime>,
}

/// The `start` or `end` object of a raw event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTime {
    /// RFC 3339 timestamp, e.g. `2026-01-26T10:00:00-05:00`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    /// Calendar date for all-day events, e.g. `2026-01-26`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// IANA zone used when `date_time` has no offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

/// The result of normalizing a raw event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizedEvent {
    /// A timed event with `start < end`.
    Busy(BusyInterval),
    /// A date-only event occupying the whole day.
    AllDay,
    /// No usable time information.
    Ignored,
}

/// What one side of an event resolved to.
enum Side {
    At(TimePoint),
    Date,
    Missing,
}

impl EventTime {
    fn resolve(&self, tz: Tz) -> Side {
        if let Some(raw) = self.date_time.as_deref() {
            return parse_date_time(raw, self.time_zone.as_deref(), tz)
                .map_or(Side::Missing, Side::At);
        }
        if self.date.is_some() {
            Side::Date
        } else {
            Side::Missing
        }
    }
}

/// Normalize a raw event into busy time expressed in `tz`.
///
/// - both sides timed → [`NormalizedEvent::Busy`] (or `Ignored` if `end <= start`)
/// - date-only start, or date-only end with no start → [`NormalizedEvent::AllDay`]
/// - anything else → [`NormalizedEvent::Ignored`]
pub fn normalize(event: &RawEvent, tz: Tz) -> NormalizedEvent {
    let start = event.start.as_ref().map_or(Side::Missing, |t| t.resolve(tz));
    let end = event.end.as_ref().map_or(Side::Missing, |t| t.resolve(tz));

    match (start, end) {
        (Side::At(start), Side::At(end)) => {
            BusyInterval::new(start, end).map_or(NormalizedEvent::Ignored, NormalizedEvent::Busy)
        }
        // A date-only start marks an all-day event whatever the end holds.
        (Side::Date, _) | (Side::Missing, Side::Date) => NormalizedEvent::AllDay,
        _ => NormalizedEvent::Ignored,
    }
}

/// Parse a `dateTime` value into `tz`.
///
/// Offset-less values are read as wall-clock time in `zone` when it names a
/// valid IANA zone, else in `tz`. Ambiguous wall-clock times take the earlier
/// instant; nonexistent ones yield `None`.
fn parse_date_time(raw: &str, zone: Option<&str>, tz: Tz) -> Option<TimePoint> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&tz));
    }

    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()?;
    let local_tz = zone.and_then(|z| z.parse::<Tz>().ok()).unwrap_or(tz);
    local_tz
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&tz))
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
