//! One-call aggregation of a full liturgical year.
//!
//! [`LiturgicalYear`] takes the year and one [`CalendarConfig`] and
//! computes Easter once, then every season and attribute value from it.
//! This is the entry point for consumers that announce or lay out a whole
//! year, including the set of dates the Epiphany proclamation of Easter
//! and the movable feasts requires.

use chrono::NaiveDate;
use serde::Serialize;

use crate::advent::{Advent, Christmastide};
use crate::attributes::YearAttributes;
use crate::computus::easter_date;
use crate::config::CalendarConfig;
use crate::error::Result;
use crate::lent::{AfterPentecost, Eastertide, Lent, MovableFeasts};
use crate::ordinary::OrdinaryTime;
use crate::sunday::{civil, sunday_on_or_after};

/// Every movable date of one liturgical year under one configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LiturgicalYear {
    /// The liturgical year (begins on [`Advent::first_sunday`] of the
    /// previous calendar year).
    pub year: i32,
    /// The configuration every date was derived under.
    pub config: CalendarConfig,
    /// Easter Sunday, proleptic Gregorian.
    pub easter: NaiveDate,
    /// The opening Advent season.
    pub advent: Advent,
    /// The nativity cycle.
    pub christmastide: Christmastide,
    /// The penitential season.
    pub lent: Lent,
    /// The fifty days of Easter.
    pub eastertide: Eastertide,
    /// Trinity, Corpus Christi, Sacred Heart.
    pub after_pentecost: AfterPentecost,
    /// Saint Joseph and the Annunciation with their transfers.
    pub movable_feasts: MovableFeasts,
    /// The two Ordinary Time counters.
    pub ordinary_time: OrdinaryTime,
    /// The almanac numbers of the year.
    pub attributes: YearAttributes,
    /// First Sunday of Advent of the *following* liturgical year — the
    /// date that closes the proclamation of the movable feasts.
    pub first_sunday_of_next_advent: NaiveDate,
}

/// The six dates announced in the Epiphany proclamation, in announcement
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProclamationDates {
    pub ash_wednesday: NaiveDate,
    pub easter: NaiveDate,
    pub ascension: NaiveDate,
    pub pentecost: NaiveDate,
    pub corpus_christi: NaiveDate,
    pub first_sunday_of_advent: NaiveDate,
}

impl LiturgicalYear {
    /// Computes the whole liturgical year.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ComputusError::YearOutOfRange`] outside `1..=9999`.
    ///
    /// # Examples
    ///
    /// ```
    /// use paschalion::{CalendarConfig, LiturgicalYear};
    ///
    /// let year = LiturgicalYear::new(2025, CalendarConfig::default()).unwrap();
    /// assert_eq!(year.easter.to_string(), "2025-04-20");
    /// assert_eq!(year.lent.ash_wednesday.to_string(), "2025-03-05");
    /// ```
    pub fn new(year: i32, config: CalendarConfig) -> Result<Self> {
        Ok(Self {
            year,
            config,
            easter: easter_date(year, config.system)?,
            advent: Advent::new(year)?,
            christmastide: Christmastide::new(year, config)?,
            lent: Lent::new(year, config)?,
            eastertide: Eastertide::new(year, config)?,
            after_pentecost: AfterPentecost::new(year, config)?,
            movable_feasts: MovableFeasts::new(year, config)?,
            ordinary_time: OrdinaryTime::new(year, config)?,
            attributes: YearAttributes::new(year, config.system)?,
            first_sunday_of_next_advent: sunday_on_or_after(civil(year, 11, 27)?),
        })
    }

    /// The dates a deacon announces after the Gospel of Epiphany.
    pub fn proclamation(&self) -> ProclamationDates {
        ProclamationDates {
            ash_wednesday: self.lent.ash_wednesday,
            easter: self.easter,
            ascension: self.eastertide.ascension,
            pentecost: self.eastertide.pentecost,
            corpus_christi: self.after_pentecost.corpus_christi,
            first_sunday_of_advent: self.first_sunday_of_next_advent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn aggregates_are_consistent() {
        let year = LiturgicalYear::new(2024, CalendarConfig::default()).unwrap();
        assert_eq!(year.easter, date(2024, 3, 31));
        assert_eq!(year.easter, year.eastertide.easter_sunday);
        assert_eq!(year.lent.holy_saturday, year.eastertide.easter_vigil);
        assert_eq!(
            year.eastertide.pentecost,
            year.easter + chrono::Duration::days(49)
        );
    }

    #[test]
    fn proclamation_2024() {
        let year = LiturgicalYear::new(2024, CalendarConfig::default()).unwrap();
        let p = year.proclamation();
        assert_eq!(p.ash_wednesday, date(2024, 2, 14));
        assert_eq!(p.easter, date(2024, 3, 31));
        assert_eq!(p.ascension, date(2024, 5, 12));
        assert_eq!(p.pentecost, date(2024, 5, 19));
        assert_eq!(p.corpus_christi, date(2024, 6, 2));
        // Advent of the next liturgical year opens December 1, 2024.
        assert_eq!(p.first_sunday_of_advent, date(2024, 12, 1));
    }

    #[test]
    fn next_advent_matches_next_years_advent() {
        for year in [2020, 2024, 2025] {
            let this = LiturgicalYear::new(year, CalendarConfig::default()).unwrap();
            let next = Advent::new(year + 1).unwrap();
            assert_eq!(this.first_sunday_of_next_advent, next.first_sunday);
        }
    }

    #[test]
    fn identical_inputs_yield_identical_years() {
        let config = CalendarConfig {
            ascension_on_thursday: true,
            ..CalendarConfig::default()
        };
        let a = LiturgicalYear::new(2026, config).unwrap();
        let b = LiturgicalYear::new(2026, config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn year_9999_still_aggregates() {
        // year + 1 would be out of range, but the next Advent opening is
        // derived directly from this year's November.
        let year = LiturgicalYear::new(9999, CalendarConfig::default()).unwrap();
        assert_eq!(
            year.first_sunday_of_next_advent,
            sunday_on_or_after(date(9999, 11, 27))
        );
    }
}
