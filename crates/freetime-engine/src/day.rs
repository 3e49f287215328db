//! Resolve user-supplied date expressions to a calendar day.
//!
//! Accepted forms: `today` (or empty), `tomorrow`, `yesterday`,
//! `next <weekday>`, `YYYY-MM-DD`, and `MM-DD` (current year).

use chrono::{Datelike, Days, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;

use crate::error::{FreetimeError, Result};

/// The current local date in `tz`.
pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// Resolve `expr` relative to `today`.
///
/// # Errors
/// Returns `FreetimeError::InvalidDate` if the expression matches none of the
/// accepted forms or names an impossible date.
pub fn resolve_day(expr: &str, today: NaiveDate) -> Result<NaiveDate> {
    let expr = expr.trim().to_lowercase();
    let invalid = || FreetimeError::InvalidDate(expr.clone());

    match expr.as_str() {
        "" | "today" => return Ok(today),
        "tomorrow" => return today.succ_opt().ok_or_else(invalid),
        "yesterday" => return today.pred_opt().ok_or_else(invalid),
        _ => {}
    }

    if let Some(name) = expr.strip_prefix("next ") {
        let target: Weekday = name.trim().parse().map_err(|_| invalid())?;
        let current = today.weekday().num_days_from_monday();
        let delta = match (7 + target.num_days_from_monday() - current) % 7 {
            0 => 7,
            d => d,
        };
        return today
            .checked_add_days(Days::new(u64::from(delta)))
            .ok_or_else(invalid);
    }

    if let Ok(date) = NaiveDate::parse_from_str(&expr, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Some((month, day)) = expr.split_once('-') {
        if let (Ok(month), Ok(day)) = (month.parse::<u32>(), day.parse::<u32>()) {
            return NaiveDate::from_ymd_opt(today.year(), month, day).ok_or_else(invalid);
        }
    }

    Err(invalid())
}

/// The Monday starting the week that contains `day`.
pub fn week_start(day: NaiveDate) -> NaiveDate {
    day.week(Weekday::Mon).first_day()
}
