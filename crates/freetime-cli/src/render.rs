//! Text and JSON rendering of events and free blocks.

use anyhow::Result;
use chrono::NaiveDate;
use chrono_tz::Tz;
use freetime_engine::{
    normalize, Availability, AvailabilityConfig, EventTime, FreeInterval, NormalizedEvent,
    RawEvent, TimePoint,
};
use serde::Serialize;

#[derive(Serialize)]
struct FreeBlockDto {
    start: String,
    end: String,
    duration_minutes: i64,
}

impl From<&FreeInterval> for FreeBlockDto {
    fn from(f: &FreeInterval) -> Self {
        Self {
            start: f.start.to_rfc3339(),
            end: f.end.to_rfc3339(),
            duration_minutes: f.duration_minutes(),
        }
    }
}

#[derive(Serialize)]
struct EventDto<'a> {
    id: Option<&'a str>,
    summary: Option<&'a str>,
    start: Option<&'a EventTime>,
    end: Option<&'a EventTime>,
    location: Option<&'a str>,
    description: Option<&'a str>,
}

impl<'a> From<&'a RawEvent> for EventDto<'a> {
    fn from(e: &'a RawEvent) -> Self {
        Self {
            id: e.id.as_deref(),
            summary: e.summary.as_deref(),
            start: e.start.as_ref(),
            end: e.end.as_ref(),
            location: e.location.as_deref(),
            description: e.description.as_deref(),
        }
    }
}

pub fn free_json(free: &[FreeInterval]) -> Result<String> {
    let blocks: Vec<FreeBlockDto> = free.iter().map(FreeBlockDto::from).collect();
    Ok(serde_json::to_string_pretty(&blocks)?)
}

pub fn events_json(events: &[RawEvent]) -> Result<String> {
    let dtos: Vec<EventDto> = events.iter().map(EventDto::from).collect();
    Ok(serde_json::to_string_pretty(&dtos)?)
}

#[derive(Serialize)]
struct WeekDayDto<'a> {
    date: String,
    events: Vec<EventDto<'a>>,
}

pub fn week_json(week: &[(NaiveDate, Vec<RawEvent>)], tz: Tz) -> Result<String> {
    let days: Vec<WeekDayDto> = week
        .iter()
        .map(|(date, events)| WeekDayDto {
            date: date.to_string(),
            events: ordered(events, tz).into_iter().map(|(_, e)| EventDto::from(e)).collect(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&days)?)
}

pub fn free_report(
    date: NaiveDate,
    config: &AvailabilityConfig,
    availability: &Availability,
) -> String {
    let mut lines = vec![
        format!("Free time on {}", format_day(date)),
        format!(
            "   (Working hours: {}:00 - {}:00, min block: {}m)",
            config.day_start_hour, config.day_end_hour, config.min_duration_minutes
        ),
        String::new(),
    ];

    if availability.free.is_empty() {
        if availability.blocked_all_day {
            lines.push("  No free blocks found (all-day event).".to_string());
        } else {
            lines.push("  No free blocks found.".to_string());
        }
        return finish(lines);
    }

    for block in &availability.free {
        lines.push(format!(
            "  ✓ {} - {} ({})",
            format_time(&block.start),
            format_time(&block.end),
            format_duration(block.duration_minutes())
        ));
    }

    // Sum of the whole minutes listed per block.
    let total: i64 = availability.free.iter().map(|f| f.duration_minutes()).sum();
    lines.push(String::new());
    lines.push(format!("  Total free: {}", format_duration(total)));
    finish(lines)
}

pub fn events_report(date: NaiveDate, tz: Tz, events: &[RawEvent]) -> String {
    let mut lines = vec![format_day(date), String::new()];

    if events.is_empty() {
        lines.push("  No events scheduled.".to_string());
        return finish(lines);
    }

    for (normalized, event) in ordered(events, tz) {
        let summary = event.summary.as_deref().unwrap_or("(No title)");
        let line = match normalized {
            NormalizedEvent::Busy(b) => format!(
                "  • {} - {} ({}): {}",
                format_time(&b.start()),
                format_time(&b.end()),
                format_duration(b.duration().num_minutes()),
                summary
            ),
            NormalizedEvent::AllDay => format!("  • All day: {}", summary),
            NormalizedEvent::Ignored => format!("  • Time unknown: {}", summary),
        };
        lines.push(line);
    }
    finish(lines)
}

pub fn week_report(week: &[(NaiveDate, Vec<RawEvent>)], today: NaiveDate, tz: Tz) -> String {
    let mut lines = Vec::new();
    if let Some((monday, _)) = week.first() {
        lines.push(format!("Week of {}", monday.format("%B %-d, %Y")));
        lines.push(String::new());
    }

    for (date, events) in week {
        let marker = if *date == today { " ← today" } else { "" };
        lines.push(format!("  {}{}", date.format("%A %-m/%-d"), marker));

        if events.is_empty() {
            lines.push("    (free)".to_string());
        }
        for (normalized, event) in ordered(events, tz) {
            let summary = event.summary.as_deref().unwrap_or("(No title)");
            let line = match normalized {
                NormalizedEvent::Busy(b) => {
                    format!("    • {}: {}", format_time(&b.start()), summary)
                }
                NormalizedEvent::AllDay => format!("    • All day: {}", summary),
                NormalizedEvent::Ignored => format!("    • Time unknown: {}", summary),
            };
            lines.push(line);
        }
        lines.push(String::new());
    }
    finish(lines)
}

/// All-day events first, then timed events by start, then the rest.
fn ordered(events: &[RawEvent], tz: Tz) -> Vec<(NormalizedEvent, &RawEvent)> {
    let mut rows: Vec<(NormalizedEvent, &RawEvent)> =
        events.iter().map(|e| (normalize(e, tz), e)).collect();
    rows.sort_by_key(|(normalized, _)| match normalized {
        NormalizedEvent::AllDay => (0, None),
        NormalizedEvent::Busy(b) => (1, Some(b.start())),
        NormalizedEvent::Ignored => (2, None),
    });
    rows
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn format_day(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// `9:05am`, `12:30pm`.
fn format_time(t: &TimePoint) -> String {
    t.format("%-I:%M%P").to_string()
}

/// `45m`, `2h`, `1h 30m`.
fn format_duration(minutes: i64) -> String {
    if minutes < 60 {
        return format!("{}m", minutes);
    }
    match (minutes / 60, minutes % 60) {
        (hours, 0) => format!("{}h", hours),
        (hours, mins) => format!("{}h {}m", hours, mins),
    }
}
