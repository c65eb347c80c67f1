//! Sunday anchoring and the date-rendering contract.
//!
//! [`sunday_on_or_after`] is the sole anchoring primitive behind every
//! "Nth Sunday of …" rule in this crate; everything else is plain
//! day-offset arithmetic on [`NaiveDate`].

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{ComputusError, Result};

/// Civil anchor date from `(year, month, day)`, with construction failures
/// surfaced instead of unwrapped.
pub(crate) fn civil(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(ComputusError::InvalidDate { year, month, day })
}

/// The Sunday on or after `date`: the date itself if it already is a
/// Sunday, otherwise the next one.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use paschalion::sunday_on_or_after;
///
/// // 2024-11-27 is a Wednesday; the following Sunday is December 1.
/// let anchor = NaiveDate::from_ymd_opt(2024, 11, 27).unwrap();
/// assert_eq!(
///     sunday_on_or_after(anchor),
///     NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()
/// );
/// ```
pub fn sunday_on_or_after(date: NaiveDate) -> NaiveDate {
    // num_days_from_monday: Mon = 0 .. Sun = 6.
    let to_sunday = 6 - i64::from(date.weekday().num_days_from_monday());
    date + Duration::days(to_sunday)
}

/// Renders a date as `"Month Day"` (e.g. `"April 20"`), the only form
/// consumed by downstream text-emitting collaborators.
pub fn month_day(date: NaiveDate) -> String {
    date.format("%B %-d").to_string()
}
