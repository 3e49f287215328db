//! Decode calendar event listings and select the events touching one day.

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::event::{normalize, EventTime, NormalizedEvent, RawEvent};
use crate::window::day_bounds;

/// Either a list response (`{"items": [...]}`) or a bare array of events.
///
/// Records stay untyped here so one malformed record cannot fail the listing.
#[derive(Deserialize)]
#[serde(untagged)]
enum Listing {
    Events(Vec<Value>),
    Response {
        #[serde(default)]
        items: Vec<Value>,
    },
}

/// Parse a calendar event listing.
///
/// Records that are not JSON objects (`42`, `null`, a string) are skipped.
///
/// # Errors
/// Returns `FreetimeError::EventParse` if the input is not JSON of either
/// accepted shape.
pub fn parse_events(json: &str) -> Result<Vec<RawEvent>> {
    let listing: Listing = serde_json::from_str(json)?;
    let records = match listing {
        Listing::Events(records) => records,
        Listing::Response { items } => items,
    };

    Ok(records
        .into_iter()
        .filter_map(|record| {
            if !record.is_object() {
                debug!(%record, "skipping event record that is not an object");
                return None;
            }
            serde_json::from_value::<RawEvent>(record).ok()
        })
        .collect())
}

/// The local day an event starts on: the start instant's date for timed
/// events, `start.date` for all-day events, `None` otherwise.
pub fn start_day(event: &RawEvent, tz: Tz) -> Option<NaiveDate> {
    match normalize(event, tz) {
        NormalizedEvent::Busy(busy) => Some(busy.start().date_naive()),
        NormalizedEvent::AllDay => event
            .start
            .as_ref()
            .and_then(|t| t.date.as_deref())
            .and_then(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok()),
        NormalizedEvent::Ignored => None,
    }
}

/// Keep the events a calendar query for `day` would return.
///
/// Timed events must overlap the local day; all-day events must cover it,
/// with `end.date` exclusive and a missing end meaning a single day. Records
/// without usable times are kept so the engine can ignore them.
pub fn events_on_day(events: Vec<RawEvent>, day: NaiveDate, tz: Tz) -> Result<Vec<RawEvent>> {
    let (day_start, day_end) = day_bounds(day, tz)?;

    Ok(events
        .into_iter()
        .filter(|event| match normalize(event, tz) {
            NormalizedEvent::Busy(busy) => busy.start() < day_end && busy.end() > day_start,
            NormalizedEvent::AllDay => all_day_covers(event, day),
            NormalizedEvent::Ignored => true,
        })
        .collect())
}

fn all_day_covers(event: &RawEvent, day: NaiveDate) -> bool {
    let date_of = |t: Option<&EventTime>| {
        t.and_then(|t| t.date.as_deref())
            .and_then(|d| NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").ok())
    };

    match (date_of(event.start.as_ref()), date_of(event.end.as_ref())) {
        (Some(first), Some(end)) if end > first => first <= day && day < end,
        (Some(first), _) => first == day,
        (None, Some(end)) => end.pred_opt() == Some(day),
        // Unparseable dates: keep, the listing was already scoped to the day.
        (None, None) => true,
    }
}
