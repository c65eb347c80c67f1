//! Lent, Eastertide, the post-Pentecost solemnities, and the movable
//! feasts inside them.
//!
//! Every date here is a fixed day offset from Easter, so each is
//! weekday-locked: Easter cannot fall on any day but Sunday, and the
//! offsets carry the weekday with them. The only branching is the three
//! regional variants (Ascension and Corpus Christi on Thursday) and the
//! Holy Week transfer rules for Saint Joseph and the Annunciation.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

use crate::computus::easter_date;
use crate::config::{CalendarConfig, CalendarSystem};
use crate::error::Result;
use crate::sunday::civil;

/// The penitential season: Ash Wednesday through Holy Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Lent {
    /// Easter − 46 days; the first day of Lent.
    pub ash_wednesday: NaiveDate,
    /// Easter − 42 days (Invocabit).
    pub first_sunday: NaiveDate,
    /// Easter − 35 days (Reminiscere).
    pub second_sunday: NaiveDate,
    /// Easter − 28 days (Oculi).
    pub third_sunday: NaiveDate,
    /// Easter − 21 days (Laetare).
    pub fourth_sunday: NaiveDate,
    /// Easter − 14 days (Judica).
    pub fifth_sunday: NaiveDate,
    /// Easter − 7 days; the start of Holy Week.
    pub palm_sunday: NaiveDate,
    /// Easter − 3 days; the Triduum begins this evening.
    pub maundy_thursday: NaiveDate,
    /// Easter − 2 days.
    pub good_friday: NaiveDate,
    /// Easter − 1 day.
    pub holy_saturday: NaiveDate,
}

impl Lent {
    /// Computes the Lent dates of the given liturgical year.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ComputusError::YearOutOfRange`] outside `1..=9999`.
    pub fn new(year: i32, config: CalendarConfig) -> Result<Self> {
        let easter = easter_date(year, config.system)?;
        Ok(Self {
            ash_wednesday: easter - Duration::days(46),
            first_sunday: easter - Duration::days(42),
            second_sunday: easter - Duration::days(35),
            third_sunday: easter - Duration::days(28),
            fourth_sunday: easter - Duration::days(21),
            fifth_sunday: easter - Duration::days(14),
            palm_sunday: easter - Duration::days(7),
            maundy_thursday: easter - Duration::days(3),
            good_friday: easter - Duration::days(2),
            holy_saturday: easter - Duration::days(1),
        })
    }
}

/// The fifty days from the Easter Vigil to Pentecost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Eastertide {
    /// The night before Easter Sunday; the first Mass of Easter.
    pub easter_vigil: NaiveDate,
    /// Easter itself.
    pub easter_sunday: NaiveDate,
    /// Easter + 7 days (Divine Mercy Sunday).
    pub second_sunday: NaiveDate,
    /// Easter + 14 days (Jubilate).
    pub third_sunday: NaiveDate,
    /// Easter + 21 days (Good Shepherd Sunday).
    pub fourth_sunday: NaiveDate,
    /// Easter + 28 days (Cantate).
    pub fifth_sunday: NaiveDate,
    /// Easter + 35 days (Rogation Sunday).
    pub sixth_sunday: NaiveDate,
    /// Easter + 39 days under the Thursday variant, Easter + 42 otherwise.
    pub ascension: NaiveDate,
    /// Easter + 42 days — defined only under the Thursday-Ascension
    /// variant; under the Sunday variant that Sunday *is* the Ascension.
    pub seventh_sunday: Option<NaiveDate>,
    /// Easter + 49 days; the close of Eastertide.
    pub pentecost: NaiveDate,
}

impl Eastertide {
    /// Computes the Eastertide dates of the given liturgical year.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ComputusError::YearOutOfRange`] outside `1..=9999`.
    pub fn new(year: i32, config: CalendarConfig) -> Result<Self> {
        let easter = easter_date(year, config.system)?;
        let ascension_offset = if config.ascension_on_thursday { 39 } else { 42 };
        let seventh_sunday = config
            .ascension_on_thursday
            .then(|| easter + Duration::days(42));
        Ok(Self {
            easter_vigil: easter - Duration::days(1),
            easter_sunday: easter,
            second_sunday: easter + Duration::days(7),
            third_sunday: easter + Duration::days(14),
            fourth_sunday: easter + Duration::days(21),
            fifth_sunday: easter + Duration::days(28),
            sixth_sunday: easter + Duration::days(35),
            ascension: easter + Duration::days(ascension_offset),
            seventh_sunday,
            pentecost: easter + Duration::days(49),
        })
    }
}

/// The three solemnities of the Lord after Pentecost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AfterPentecost {
    /// Easter + 56 days; the Sunday after Pentecost.
    pub trinity: NaiveDate,
    /// Easter + 60 days under the Thursday variant, Easter + 63 otherwise.
    pub corpus_christi: NaiveDate,
    /// Easter + 68 days; the Friday after the second Sunday after
    /// Pentecost.
    pub sacred_heart: NaiveDate,
}

impl AfterPentecost {
    /// Computes the post-Pentecost solemnities of the given liturgical
    /// year.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ComputusError::YearOutOfRange`] outside `1..=9999`.
    pub fn new(year: i32, config: CalendarConfig) -> Result<Self> {
        let easter = easter_date(year, config.system)?;
        let corpus_offset = if config.corpus_christi_on_thursday { 60 } else { 63 };
        Ok(Self {
            trinity: easter + Duration::days(56),
            corpus_christi: easter + Duration::days(corpus_offset),
            sacred_heart: easter + Duration::days(68),
        })
    }
}

/// Fixed-date feasts that Lent and Holy Week can displace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MovableFeasts {
    /// March 19. When Easter falls before March 27, March 19 sits in Holy
    /// Week and the feast moves to the Saturday before Palm Sunday
    /// (Easter − 8); a March 19 on an ordinary Lenten Sunday moves to
    /// March 20.
    pub saint_joseph: NaiveDate,
    /// March 25. When Easter falls before April 2, March 25 sits in Holy
    /// Week or the Easter Octave and the feast moves to the Monday after
    /// Divine Mercy Sunday (Easter + 8); a March 25 on an ordinary
    /// Lenten Sunday moves to March 26.
    pub annunciation: NaiveDate,
}

impl MovableFeasts {
    /// Computes the transferable March feasts of the given liturgical
    /// year.
    ///
    /// The Holy Week rule is checked before the Sunday rule: when
    /// March 19 or 25 is itself Palm Sunday, the Holy Week transfer is
    /// the one that applies.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ComputusError::YearOutOfRange`] outside `1..=9999`.
    pub fn new(year: i32, config: CalendarConfig) -> Result<Self> {
        let easter = easter_date(year, config.system)?;

        let joseph = civil(year, 3, 19)?;
        let saint_joseph = if easter < civil(year, 3, 27)? {
            easter - Duration::days(8)
        } else if joseph.weekday() == Weekday::Sun {
            joseph + Duration::days(1)
        } else {
            joseph
        };

        let annunciation_day = civil(year, 3, 25)?;
        let annunciation = if easter < civil(year, 4, 2)? {
            easter + Duration::days(8)
        } else if annunciation_day.weekday() == Weekday::Sun {
            annunciation_day + Duration::days(1)
        } else {
            annunciation_day
        };

        Ok(Self {
            saint_joseph,
            annunciation,
        })
    }
}

/// The day before the Julian Easter, when the Holy Fire is kindled at the
/// Holy Sepulchre. Always reckoned by the Julian Paschalion, whatever
/// system the rest of the year uses.
///
/// # Errors
///
/// Returns [`crate::ComputusError::YearOutOfRange`] outside `1..=9999`.
pub fn holy_fire(year: i32) -> Result<NaiveDate> {
    Ok(easter_date(year, CalendarSystem::Julian)? - Duration::days(1))
}
