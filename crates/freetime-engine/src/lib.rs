//! # freetime-engine
//!
//! Deterministic free-time computation for a single calendar day.
//!
//! Given a day's raw event records and a working-hours window, the engine
//! normalizes each record, clamps busy time to the window, merges overlapping
//! busy periods and sweeps the window for gaps that meet a minimum duration.
//! The pipeline is pure: no I/O, no shared state, identical inputs give
//! identical outputs.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{Duration, NaiveDate};
//! use freetime_engine::{find_free_blocks, parse_events, WorkWindow};
//!
//! let events = parse_events(r#"{"items": [
//!     {"start": {"dateTime": "2026-01-26T10:00:00-05:00"},
//!      "end":   {"dateTime": "2026-01-26T11:00:00-05:00"}}
//! ]}"#).unwrap();
//!
//! let day = NaiveDate::from_ymd_opt(2026, 1, 26).unwrap();
//! let window = WorkWindow::new(day, 9, 18, chrono_tz::America::New_York).unwrap();
//! let free = find_free_blocks(&events, &window, Duration::minutes(15));
//!
//! assert_eq!(free.len(), 2);
//! assert_eq!(free[0].duration_minutes(), 60);
//! assert_eq!(free[1].duration_minutes(), 420);
//! ```
//!
//! ## Modules
//!
//! - [`event`] — raw event records → busy interval, all-day marker, or ignored
//! - [`window`] — working-hours window and clamping
//! - [`merge`] — coalesce overlapping/adjacent busy intervals
//! - [`gaps`] — sweep merged busy time for free intervals
//! - [`engine`] — the end-to-end availability pipeline
//! - [`day`] — resolve date expressions ("tomorrow", "next monday", ...) to a day
//! - [`source`] — decode calendar event listings and filter them to a day
//! - [`config`] — working hours, minimum duration and timezone parameters
//! - [`error`] — Error types

pub mod config;
pub mod day;
pub mod engine;
pub mod error;
pub mod event;
pub mod gaps;
pub mod interval;
pub mod merge;
pub mod source;
pub mod window;

pub use config::AvailabilityConfig;
pub use day::{resolve_day, today_in, week_start};
pub use engine::{compute_availability, find_free_blocks, Availability};
pub use error::FreetimeError;
pub use event::{normalize, EventTime, NormalizedEvent, RawEvent};
pub use gaps::find_gaps;
pub use interval::{BusyInterval, FreeInterval, TimePoint};
pub use merge::merge_busy;
pub use source::{events_on_day, parse_events, start_day};
pub use window::{day_bounds, WorkWindow};
