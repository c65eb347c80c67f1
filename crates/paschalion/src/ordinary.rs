//! Ordinary Time numbering.
//!
//! Ordinary Time runs in two stretches with one continuous week count:
//! from after the Baptism of the Lord to Ash Wednesday, and from after
//! Pentecost to the eve of Advent. Each stretch has its own Sunday
//! counter anchored on a fixed civil date ("week 0"), while the week
//! numbers at the seam derive from how far Easter sits from March 1.
//!
//! By convention the 0th Sunday before Lent is the Sunday on or after
//! December 31 of the previous year (so that the Baptism lands on the
//! Sunday after January 6), and the 0th Sunday after Pentecost is the
//! Sunday on or after March 27 (so that Christ the King is the Sunday
//! after November 19 and Advent begins on the Sunday after that).

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::computus::easter_date;
use crate::config::CalendarConfig;
use crate::error::Result;
use crate::sunday::{civil, sunday_on_or_after};

/// The Ordinary Time week counters of one liturgical year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrdinaryTime {
    before_lent_anchor: NaiveDate,
    after_pentecost_anchor: NaiveDate,
    /// Number of the last Sunday of Ordinary Time before Ash Wednesday.
    pub last_week_before_lent: u32,
    /// Nominal week number at which the counter resumes after Pentecost.
    pub resumption_week: u32,
    /// The 34th after-Pentecost Sunday: the last Sunday of the
    /// liturgical year.
    pub christ_the_king: NaiveDate,
}

impl OrdinaryTime {
    /// Computes the Ordinary Time counters of the given liturgical year.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ComputusError::YearOutOfRange`] outside `1..=9999`.
    pub fn new(year: i32, config: CalendarConfig) -> Result<Self> {
        let easter = easter_date(year, config.system)?;
        let before_lent_anchor = sunday_on_or_after(civil(year - 1, 12, 31)?);
        let after_pentecost_anchor = sunday_on_or_after(civil(year, 3, 27)?);

        let days_from_march_1 = (easter - civil(year, 3, 1)?).num_days() + 1;
        // Proleptic-Gregorian leap test; February's length shifts both
        // bounds by one.
        let leap = NaiveDate::from_ymd_opt(year, 2, 29).is_some();
        let last_week_before_lent =
            (4 + (days_from_march_1 - if leap { 17 } else { 18 }) / 7) as u32;
        let resumption_week = (6 + (days_from_march_1 - 20) / 7) as u32;

        Ok(Self {
            before_lent_anchor,
            after_pentecost_anchor,
            last_week_before_lent,
            resumption_week,
            christ_the_king: after_pentecost_anchor + Duration::weeks(34),
        })
    }

    /// The Sunday of the given Ordinary Time week in the stretch before
    /// Lent. Week numbers past [`Self::last_week_before_lent`] name
    /// Sundays that Lent has absorbed.
    pub fn sunday_before_lent(&self, week: u32) -> NaiveDate {
        self.before_lent_anchor + Duration::weeks(i64::from(week))
    }

    /// The Sunday of the given Ordinary Time week in the stretch after
    /// Pentecost. Week numbers below [`Self::resumption_week`] name
    /// Sundays that Eastertide has absorbed.
    pub fn sunday_after_pentecost(&self, week: u32) -> NaiveDate {
        self.after_pentecost_anchor + Duration::weeks(i64::from(week))
    }
}
