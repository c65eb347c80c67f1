//! Advent and Christmastide.
//!
//! These seasons are anchored on civil dates, not on Easter: each Sunday
//! is the Sunday on or after a fixed date of the *previous* calendar year
//! (the liturgical year begins on the first Sunday of Advent of the
//! preceding civil year), and the feasts around them carry their own
//! collision-transfer rules.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

use crate::config::CalendarConfig;
use crate::error::{validate_year, Result};
use crate::sunday::{civil, sunday_on_or_after};

/// The four Sundays of Advent and the Immaculate Conception, for one
/// liturgical year.
///
/// All five dates fall in the calendar year before the liturgical year
/// they open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Advent {
    /// Sunday on or after November 27; the liturgical new year.
    pub first_sunday: NaiveDate,
    /// Sunday on or after December 4.
    pub second_sunday: NaiveDate,
    /// Sunday on or after December 11 (Gaudete Sunday).
    pub third_sunday: NaiveDate,
    /// Sunday on or after December 18 (Rorate Sunday).
    pub fourth_sunday: NaiveDate,
    /// December 8, transferred to December 9 when it falls on a Sunday
    /// (the Second Sunday of Advent takes precedence).
    pub immaculate_conception: NaiveDate,
}

impl Advent {
    /// Computes the Advent dates opening the given liturgical year.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ComputusError::YearOutOfRange`] outside `1..=9999`.
    pub fn new(year: i32) -> Result<Self> {
        validate_year(year)?;
        let dec8 = civil(year - 1, 12, 8)?;
        let immaculate_conception = if dec8.weekday() == Weekday::Sun {
            dec8 + Duration::days(1)
        } else {
            dec8
        };
        Ok(Self {
            first_sunday: sunday_on_or_after(civil(year - 1, 11, 27)?),
            second_sunday: sunday_on_or_after(civil(year - 1, 12, 4)?),
            third_sunday: sunday_on_or_after(civil(year - 1, 12, 11)?),
            fourth_sunday: sunday_on_or_after(civil(year - 1, 12, 18)?),
            immaculate_conception,
        })
    }
}

/// Christmastide: the nativity cycle from Christmas Day through the
/// Baptism of the Lord.
///
/// The Epiphany branch is the only flag-sensitive part: fixed January 6,
/// or the Sunday on or after January 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Christmastide {
    /// December 25 of the previous calendar year.
    pub christmas: NaiveDate,
    /// Sunday on or after December 26 — except when Christmas Day itself
    /// is a Sunday, in which case the feast is fixed on December 30.
    pub holy_family: NaiveDate,
    /// January 1, the Solemnity of Mary, Mother of God.
    pub mary_mother_of_god: NaiveDate,
    /// January 6 fixed, or the Sunday on or after January 2, by flag.
    pub epiphany: NaiveDate,
    /// Present only under the fixed-January-6 variant, and only when
    /// January 6 is not a Friday, Saturday, or Sunday.
    pub second_sunday_after_christmas: Option<NaiveDate>,
    /// Sunday after Epiphany, with the two Monday transfers of the
    /// transferred-Epiphany variant.
    pub baptism_of_the_lord: NaiveDate,
}

impl Christmastide {
    /// Computes the Christmastide dates of the given liturgical year.
    ///
    /// Only `config.epiphany_on_jan6` participates; the calendar system
    /// and the other flags change nothing here.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ComputusError::YearOutOfRange`] outside `1..=9999`.
    pub fn new(year: i32, config: CalendarConfig) -> Result<Self> {
        validate_year(year)?;
        let christmas = civil(year - 1, 12, 25)?;
        let holy_family = if christmas.weekday() == Weekday::Sun {
            civil(year - 1, 12, 30)?
        } else {
            sunday_on_or_after(civil(year - 1, 12, 26)?)
        };

        let epiphany = if config.epiphany_on_jan6 {
            civil(year, 1, 6)?
        } else {
            sunday_on_or_after(civil(year, 1, 2)?)
        };

        let second_sunday_after_christmas = if config.epiphany_on_jan6
            && !matches!(
                epiphany.weekday(),
                Weekday::Fri | Weekday::Sat | Weekday::Sun
            ) {
            Some(sunday_on_or_after(civil(year, 1, 2)?))
        } else {
            None
        };

        let baptism_of_the_lord = if config.epiphany_on_jan6 {
            sunday_on_or_after(civil(year, 1, 7)?)
        } else if epiphany == civil(year, 1, 7)? {
            civil(year, 1, 8)?
        } else if epiphany == civil(year, 1, 8)? {
            civil(year, 1, 9)?
        } else {
            epiphany + Duration::days(7)
        };

        Ok(Self {
            christmas,
            holy_family,
            mary_mother_of_god: civil(year, 1, 1)?,
            epiphany,
            second_sunday_after_christmas,
            baptism_of_the_lord,
        })
    }
}
