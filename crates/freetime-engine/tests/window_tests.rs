//! Tests for working-window construction and clamping.

use chrono::{Duration, NaiveDate, TimeZone};
use chrono_tz::America::{New_York, Santiago};
use freetime_engine::{day_bounds, BusyInterval, FreetimeError, TimePoint, WorkWindow};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 26).unwrap()
}

fn at(hour: u32, min: u32) -> TimePoint {
    New_York.with_ymd_and_hms(2026, 1, 26, hour, min, 0).unwrap()
}

fn busy(start: TimePoint, end: TimePoint) -> BusyInterval {
    BusyInterval::new(start, end).unwrap()
}

fn window() -> WorkWindow {
    WorkWindow::new(day(), 9, 18, New_York).unwrap()
}

// ── Construction ────────────────────────────────────────────────────────────

#[test]
fn window_spans_configured_hours() {
    let w = window();

    assert_eq!(w.day_start(), at(9, 0));
    assert_eq!(w.day_end(), at(18, 0));
    assert_eq!(w.duration(), Duration::minutes(540));
    assert_eq!(w.timezone(), New_York);
}

#[test]
fn inverted_hours_are_rejected() {
    let err = WorkWindow::new(day(), 18, 9, New_York).unwrap_err();
    assert!(matches!(err, FreetimeError::InvalidWindow(_)), "got {:?}", err);
}

#[test]
fn equal_hours_are_rejected() {
    let err = WorkWindow::new(day(), 9, 9, New_York).unwrap_err();
    assert!(matches!(err, FreetimeError::InvalidWindow(_)), "got {:?}", err);
}

#[test]
fn out_of_range_hour_is_rejected() {
    let err = WorkWindow::new(day(), 9, 24, New_York).unwrap_err();
    assert!(matches!(err, FreetimeError::InvalidWindow(_)), "got {:?}", err);
}

#[test]
fn from_bounds_rejects_empty_window() {
    assert!(WorkWindow::from_bounds(at(9, 0), at(9, 0)).is_err());
    assert!(WorkWindow::from_bounds(at(10, 0), at(9, 0)).is_err());
    assert!(WorkWindow::from_bounds(at(9, 0), at(9, 1)).is_ok());
}

#[test]
fn boundary_inside_dst_gap_moves_past_the_transition() {
    // 2026-03-08 02:00 does not exist in New York (clocks jump 02:00 → 03:00).
    let spring_forward = NaiveDate::from_ymd_opt(2026, 3, 8).unwrap();

    let w = WorkWindow::new(spring_forward, 2, 18, New_York).unwrap();

    assert_eq!(
        w.day_start(),
        New_York.with_ymd_and_hms(2026, 3, 8, 3, 0, 0).unwrap()
    );
    assert_eq!(w.duration(), Duration::hours(15));
}

#[test]
fn day_bounds_when_midnight_is_skipped() {
    // Chile springs forward at local midnight: 2026-09-06 starts at 01:00.
    let spring_forward = NaiveDate::from_ymd_opt(2026, 9, 6).unwrap();

    let (start, end) = day_bounds(spring_forward, Santiago).unwrap();

    assert_eq!(
        start,
        Santiago.with_ymd_and_hms(2026, 9, 6, 1, 0, 0).unwrap()
    );
    assert_eq!(
        end,
        Santiago.with_ymd_and_hms(2026, 9, 7, 0, 0, 0).unwrap()
    );
    assert_eq!(end - start, Duration::hours(23));
}

#[test]
fn day_bounds_cover_local_midnight_to_midnight() {
    let (start, end) = day_bounds(day(), New_York).unwrap();

    assert_eq!(start, at(0, 0));
    assert_eq!(end, New_York.with_ymd_and_hms(2026, 1, 27, 0, 0, 0).unwrap());
}

#[test]
fn day_bounds_on_spring_forward_day_are_23_hours() {
    let spring_forward = NaiveDate::from_ymd_opt(2026, 3, 8).unwrap();

    let (start, end) = day_bounds(spring_forward, New_York).unwrap();

    assert_eq!(end - start, Duration::hours(23));
}

// ── Clamping ────────────────────────────────────────────────────────────────

#[test]
fn interval_inside_window_is_unchanged() {
    let b = busy(at(10, 0), at(11, 0));
    assert_eq!(window().clamp(&b), Some(b));
}

#[test]
fn interval_starting_before_window_is_truncated() {
    let clamped = window().clamp(&busy(at(8, 0), at(9, 10))).unwrap();

    assert_eq!(clamped.start(), at(9, 0));
    assert_eq!(clamped.end(), at(9, 10));
}

#[test]
fn interval_ending_after_window_is_truncated() {
    let clamped = window()
        .clamp(&busy(at(17, 50), at(18, 30)))
        .unwrap();

    assert_eq!(clamped.start(), at(17, 50));
    assert_eq!(clamped.end(), at(18, 0));
}

#[test]
fn interval_covering_window_becomes_the_window() {
    let clamped = window().clamp(&busy(at(7, 0), at(20, 0))).unwrap();

    assert_eq!(clamped.start(), at(9, 0));
    assert_eq!(clamped.end(), at(18, 0));
}

#[test]
fn interval_outside_window_is_discarded() {
    assert_eq!(window().clamp(&busy(at(6, 0), at(8, 0))), None);
    assert_eq!(window().clamp(&busy(at(19, 0), at(20, 0))), None);
}

#[test]
fn interval_touching_window_edge_is_discarded() {
    assert_eq!(window().clamp(&busy(at(8, 0), at(9, 0))), None);
    assert_eq!(window().clamp(&busy(at(18, 0), at(19, 0))), None);
}

#[test]
fn busy_interval_rejects_empty_span() {
    assert!(BusyInterval::new(at(10, 0), at(10, 0)).is_none());
    assert!(BusyInterval::new(at(11, 0), at(10, 0)).is_none());
}
