//! Tests for date expression resolution.

use chrono::{Datelike, NaiveDate, Weekday};
use freetime_engine::{resolve_day, week_start, FreetimeError};

/// Wednesday.
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 28).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn relative_keywords() {
    assert_eq!(resolve_day("today", today()).unwrap(), today());
    assert_eq!(resolve_day("", today()).unwrap(), today());
    assert_eq!(resolve_day("tomorrow", today()).unwrap(), date(2026, 1, 29));
    assert_eq!(resolve_day("yesterday", today()).unwrap(), date(2026, 1, 27));
}

#[test]
fn keywords_ignore_case_and_whitespace() {
    assert_eq!(resolve_day("  Tomorrow ", today()).unwrap(), date(2026, 1, 29));
    assert_eq!(resolve_day("TODAY", today()).unwrap(), today());
}

#[test]
fn next_weekday_later_this_week() {
    let friday = resolve_day("next friday", today()).unwrap();

    assert_eq!(friday, date(2026, 1, 30));
    assert_eq!(friday.weekday(), Weekday::Fri);
}

#[test]
fn next_weekday_wraps_into_next_week() {
    assert_eq!(resolve_day("next monday", today()).unwrap(), date(2026, 2, 2));
}

#[test]
fn next_same_weekday_is_a_week_away() {
    assert_eq!(resolve_day("next wednesday", today()).unwrap(), date(2026, 2, 4));
}

#[test]
fn absolute_date() {
    assert_eq!(
        resolve_day("2026-03-16", today()).unwrap(),
        date(2026, 3, 16)
    );
}

#[test]
fn month_day_uses_current_year() {
    assert_eq!(resolve_day("03-16", today()).unwrap(), date(2026, 3, 16));
    assert_eq!(resolve_day("12-31", today()).unwrap(), date(2026, 12, 31));
}

#[test]
fn impossible_month_day_is_rejected() {
    let err = resolve_day("02-30", today()).unwrap_err();
    assert!(matches!(err, FreetimeError::InvalidDate(_)), "got {:?}", err);
}

#[test]
fn unknown_expressions_are_rejected() {
    for expr in ["someday", "next fortnight", "2026-13-01", "26/01/2026"] {
        let err = resolve_day(expr, today()).unwrap_err();
        assert!(
            matches!(err, FreetimeError::InvalidDate(_)),
            "{:?} should be rejected, got {:?}",
            expr,
            err
        );
    }
}

#[test]
fn week_starts_on_monday() {
    assert_eq!(week_start(today()), date(2026, 1, 26));
    assert_eq!(week_start(date(2026, 1, 26)), date(2026, 1, 26));
    // Sunday belongs to the week that began the previous Monday.
    assert_eq!(week_start(date(2026, 2, 1)), date(2026, 1, 26));
}
