//! Tests for busy interval merging.

use chrono::TimeZone;
use chrono_tz::America::New_York;
use freetime_engine::{merge_busy, BusyInterval};

/// Busy interval between two times on 2026-01-26.
fn busy(start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> BusyInterval {
    BusyInterval::new(
        New_York
            .with_ymd_and_hms(2026, 1, 26, start_hour, start_min, 0)
            .unwrap(),
        New_York
            .with_ymd_and_hms(2026, 1, 26, end_hour, end_min, 0)
            .unwrap(),
    )
    .unwrap()
}

#[test]
fn empty_input_merges_to_empty() {
    assert!(merge_busy(Vec::new()).is_empty());
}

#[test]
fn overlapping_intervals_are_coalesced() {
    let merged = merge_busy(vec![busy(10, 0, 10, 30), busy(10, 15, 11, 0)]);

    assert_eq!(merged, vec![busy(10, 0, 11, 0)]);
}

#[test]
fn adjacent_intervals_are_coalesced() {
    // 10:00-11:00 and 11:00-12:00 touch at 11:00 → one block.
    let merged = merge_busy(vec![busy(10, 0, 11, 0), busy(11, 0, 12, 0)]);

    assert_eq!(merged, vec![busy(10, 0, 12, 0)]);
}

#[test]
fn disjoint_intervals_stay_separate_and_sorted() {
    let merged = merge_busy(vec![
        busy(15, 0, 16, 0),
        busy(9, 0, 10, 0),
        busy(12, 0, 13, 0),
    ]);

    assert_eq!(
        merged,
        vec![busy(9, 0, 10, 0), busy(12, 0, 13, 0), busy(15, 0, 16, 0)]
    );
}

#[test]
fn contained_interval_is_absorbed() {
    let merged = merge_busy(vec![busy(9, 0, 12, 0), busy(10, 0, 11, 0)]);

    assert_eq!(merged, vec![busy(9, 0, 12, 0)]);
}

#[test]
fn equal_starts_keep_longest_end() {
    let merged = merge_busy(vec![busy(10, 0, 10, 30), busy(10, 0, 12, 0), busy(10, 0, 11, 0)]);

    assert_eq!(merged, vec![busy(10, 0, 12, 0)]);
}

#[test]
fn chain_of_overlaps_collapses_to_one_block() {
    let merged = merge_busy(vec![
        busy(13, 0, 14, 0),
        busy(9, 0, 10, 30),
        busy(10, 0, 11, 30),
        busy(11, 30, 13, 0),
    ]);

    assert_eq!(merged, vec![busy(9, 0, 14, 0)]);
}

#[test]
fn merging_is_idempotent() {
    let once = merge_busy(vec![
        busy(9, 0, 10, 0),
        busy(9, 30, 10, 30),
        busy(14, 0, 15, 0),
    ]);
    let twice = merge_busy(once.clone());

    assert_eq!(once, twice);
}
