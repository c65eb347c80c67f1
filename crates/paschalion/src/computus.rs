//! Gaussian computus: the date of Easter.
//!
//! [`easter`] returns the nominal `(day, month)` under the requested
//! reckoning; [`easter_date`] expresses it in the proleptic Gregorian
//! calendar so that every downstream derivation works on one uniform
//! [`NaiveDate`] axis.
//!
//! The Gregorian century corrections apply only when the Gregorian system
//! is requested **and** the year is after 1582; for earlier years the
//! Julian constants are forced regardless of the flag, since the reform
//! did not yet exist.

use chrono::{Duration, NaiveDate};

use crate::config::CalendarSystem;
use crate::error::{validate_year, ComputusError, Result};

/// Whether `(year, system)` selects the Gregorian computus formulas.
pub(crate) fn gregorian_rules(year: i32, system: CalendarSystem) -> bool {
    system == CalendarSystem::Gregorian && year > 1582
}

/// Nominal Easter date as `(day, month)` under the given reckoning.
///
/// Month is 3 (March) or 4 (April). The result is expressed in the
/// calendar the computus ran in: Julian results are Julian calendar
/// dates; use [`easter_date`] for the proleptic-Gregorian date.
///
/// # Errors
///
/// Returns [`ComputusError::YearOutOfRange`] outside `1..=9999`.
///
/// # Examples
///
/// ```
/// use paschalion::{easter, CalendarSystem};
///
/// assert_eq!(easter(2024, CalendarSystem::Gregorian).unwrap(), (31, 3));
/// assert_eq!(easter(2025, CalendarSystem::Gregorian).unwrap(), (20, 4));
/// ```
pub fn easter(year: i32, system: CalendarSystem) -> Result<(u32, u32)> {
    validate_year(year)?;

    let a = year % 19;
    let b = year % 4;
    let c = year % 7;
    let k = year / 100;
    let p = (13 + 8 * k) / 25;
    let q = k / 4;
    let (m, n) = if gregorian_rules(year, system) {
        ((15 + k - p - q) % 30, (4 + k - q) % 7)
    } else {
        (15, 6)
    };

    let mut d = (19 * a + m) % 30;
    // Epact-table edge: moons 29 (and 28 with golden numbers past 11)
    // would duplicate a paschal date; pull d back one before the weekday
    // term so that the wrap at e = 6 lands Easter a week earlier.
    if d == 29 || (d == 28 && a > 10) {
        d -= 1;
    }
    let e = (2 * b + 4 * c + 6 * d + n) % 7;

    let day_of_march = 22 + d + e;
    if day_of_march > 31 {
        Ok(((d + e - 9) as u32, 4))
    } else {
        Ok((day_of_march as u32, 3))
    }
}

/// Easter as a proleptic-Gregorian [`NaiveDate`].
///
/// When the nominal computation ran under Julian rules (Julian system, or
/// any system at year ≤ 1582) the Julian→Gregorian day difference
/// `year/100 − year/400 − 2` is added; Gregorian results need no
/// correction.
///
/// # Errors
///
/// Returns [`ComputusError::YearOutOfRange`] outside `1..=9999`.
pub fn easter_date(year: i32, system: CalendarSystem) -> Result<NaiveDate> {
    let (day, month) = easter(year, system)?;
    let correction = if gregorian_rules(year, system) {
        0
    } else {
        i64::from(year / 100 - year / 400 - 2)
    };
    let nominal = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(ComputusError::InvalidDate { year, month, day })?;
    Ok(nominal + Duration::days(correction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn gregorian_easter_2001_to_2025() {
        let known = [
            (2001, 4, 15),
            (2002, 3, 31),
            (2003, 4, 20),
            (2004, 4, 11),
            (2005, 3, 27),
            (2006, 4, 16),
            (2007, 4, 8),
            (2008, 3, 23),
            (2009, 4, 12),
            (2010, 4, 4),
            (2011, 4, 24),
            (2012, 4, 8),
            (2013, 3, 31),
            (2014, 4, 20),
            (2015, 4, 5),
            (2016, 3, 27),
            (2017, 4, 16),
            (2018, 4, 1),
            (2019, 4, 21),
            (2020, 4, 12),
            (2021, 4, 4),
            (2022, 4, 17),
            (2023, 4, 9),
            (2024, 3, 31),
            (2025, 4, 20),
        ];
        for (year, month, day) in known {
            assert_eq!(
                easter_date(year, CalendarSystem::Gregorian).unwrap(),
                date(year, month, day),
                "easter {year}"
            );
        }
    }

    #[test]
    fn nominal_tuples_for_recent_years() {
        assert_eq!(easter(2024, CalendarSystem::Gregorian).unwrap(), (31, 3));
        assert_eq!(easter(2025, CalendarSystem::Gregorian).unwrap(), (20, 4));
        assert_eq!(easter(2008, CalendarSystem::Gregorian).unwrap(), (23, 3));
    }

    #[test]
    fn epact_correction_years_stay_on_sunday() {
        // d = 28 with a > 10: without the correction Easter 1954 would
        // land on Saturday April 24 instead of April 18.
        assert_eq!(
            easter_date(1954, CalendarSystem::Gregorian).unwrap(),
            date(1954, 4, 18)
        );
        // d = 29: Easter 1981 is April 19, not April 25.
        assert_eq!(
            easter_date(1981, CalendarSystem::Gregorian).unwrap(),
            date(1981, 4, 19)
        );
        assert_eq!(
            easter_date(2049, CalendarSystem::Gregorian).unwrap(),
            date(2049, 4, 18)
        );
    }

    #[test]
    fn latest_possible_easter() {
        assert_eq!(
            easter_date(2038, CalendarSystem::Gregorian).unwrap(),
            date(2038, 4, 25)
        );
    }

    #[test]
    fn julian_easter_converted_to_gregorian() {
        // Julian Easter 2024: nominal April 22, thirteen days behind.
        assert_eq!(easter(2024, CalendarSystem::Julian).unwrap(), (22, 4));
        assert_eq!(
            easter_date(2024, CalendarSystem::Julian).unwrap(),
            date(2024, 5, 5)
        );
        // 2025: both reckonings coincide on April 20.
        assert_eq!(
            easter_date(2025, CalendarSystem::Julian).unwrap(),
            easter_date(2025, CalendarSystem::Gregorian).unwrap()
        );
    }

    #[test]
    fn pre_reform_years_force_julian_constants() {
        // 1582 predates the reform: the Gregorian flag must not change
        // the result.
        assert_eq!(
            easter(1582, CalendarSystem::Gregorian).unwrap(),
            easter(1582, CalendarSystem::Julian).unwrap()
        );
        assert_eq!(easter(1582, CalendarSystem::Gregorian).unwrap(), (15, 4));
        // 1583 is the first year the formulas diverge.
        assert_eq!(easter(1583, CalendarSystem::Gregorian).unwrap(), (10, 4));
        assert_ne!(
            easter(1583, CalendarSystem::Gregorian).unwrap(),
            easter(1583, CalendarSystem::Julian).unwrap()
        );
    }

    #[test]
    fn pre_reform_date_gets_day_correction() {
        // Julian April 19, 1500 is proleptic-Gregorian April 29
        // (10-day gap in the 1500s).
        assert_eq!(
            easter_date(1500, CalendarSystem::Gregorian).unwrap(),
            date(1500, 4, 29)
        );
    }

    #[test]
    fn gregorian_result_is_always_sunday() {
        for year in [1583, 1700, 1900, 2000, 2024, 2025, 9999] {
            let easter = easter_date(year, CalendarSystem::Gregorian).unwrap();
            assert_eq!(easter.weekday(), Weekday::Sun, "easter {year}");
        }
    }

    #[test]
    fn year_out_of_range_is_rejected() {
        for year in [0, -1, 10000] {
            let err = easter_date(year, CalendarSystem::Gregorian).unwrap_err();
            assert_eq!(err, ComputusError::YearOutOfRange { year });
            assert!(easter(year, CalendarSystem::Julian).is_err());
        }
        assert!(easter_date(1, CalendarSystem::Gregorian).is_ok());
        assert!(easter_date(9999, CalendarSystem::Gregorian).is_ok());
    }
}
