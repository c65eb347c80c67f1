//! Cyclic year attributes: the almanac numbers printed alongside a year.
//!
//! Golden number, epact, solar cycle, indiction, doomsday, dominical
//! letter, and the boundary key. These exist for display and
//! cross-checking — none of them feeds back into the computus, which
//! derives Easter independently in [`crate::computus`].
//!
//! The epact carries one genuinely tricky edge: "black epact 25". When
//! the epact is 25 **and** the golden number exceeds 11, the paschal full
//! moon falls on April 17 instead of April 18, and almanacs print the
//! Arabic "25" in black ink instead of the Roman numeral XXV. Both the
//! label and the full-moon formula here distinguish it.

use chrono::Weekday;
use serde::Serialize;

use crate::computus::easter;
use crate::config::CalendarSystem;
use crate::error::Result;

/// Roman numerals I–XXX, indexed by value − 1.
const ROMAN_NUMERALS: [&str; 30] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII", "XIV", "XV",
    "XVI", "XVII", "XVIII", "XIX", "XX", "XXI", "XXII", "XXIII", "XXIV", "XXV", "XXVI", "XXVII",
    "XXVIII", "XXIX", "XXX",
];

/// Roman Martyrology lunar letters, indexed by epact.
const MARTYROLOGY_LETTERS: [char; 30] = [
    'P', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't',
    'u', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'M', 'N',
];

/// Slavonic boundary letters, indexed by nominal Easter day − March 22.
const BOUNDARY_KEYS: [char; 35] = [
    'А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ж', 'Ѕ', 'З', 'И', 'І', 'К', 'Л', 'М', 'Н', 'О', 'П', 'Р', 'С',
    'Т', 'У', 'Ф', 'Х', 'Ѿ', 'Ц', 'Ч', 'Ш', 'Щ', 'Ъ', 'Ы', 'Ь', 'Ѣ', 'Ю', 'Ѫ', 'Я',
];

/// Dominical letters for common years, indexed by doomsday (0 = Sunday).
const DOMINICAL_COMMON: [&str; 7] = ["C", "B", "A", "G", "F", "E", "D"];

/// Dominical letter pairs for leap years, indexed by doomsday.
const DOMINICAL_LEAP: [&str; 7] = ["DC", "CB", "BA", "AG", "GF", "FE", "ED"];

/// Weekdays in almanac order, indexed by doomsday (0 = Sunday).
const WEEKDAYS_FROM_SUNDAY: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// The cyclic numbers of one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearAttributes {
    /// The year the attributes describe.
    pub year: i32,
    /// Position in the 19-year lunar-solar cycle: year mod 19 + 1.
    pub golden_number: u32,
    /// Age of the moon on the day before January 1, 0..=29.
    pub epact: u32,
    /// Epact 25 with a golden number past 11: the paschal full moon
    /// shifts one day earlier than ordinary epact 25.
    pub black_epact: bool,
    /// Roman Martyrology lunar letter for the epact.
    pub martyrology_letter: char,
    /// Nominal paschal full moon as `(day, month)`.
    pub paschal_full_moon: (u32, u32),
    /// Position in the 28-year Julian solar cycle.
    pub solar_cycle: u32,
    /// Position in the 15-year Roman indiction cycle.
    pub indiction: u32,
    /// Conway's anchor weekday for the year.
    pub doomsday: Weekday,
    /// Dominical letter(s); two letters in leap years, "GC" for the
    /// reform year 1582 with its ten omitted October days.
    pub dominical_letter: &'static str,
    /// Slavonic boundary letter classifying the year by its Easter date.
    pub boundary_key: char,
    /// Age of the moon on Christmas Day.
    pub christmas_moon: u32,
}

impl YearAttributes {
    /// Computes the attributes of the given year. The calendar system
    /// only affects the boundary key, which classifies the nominal
    /// Easter date.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ComputusError::YearOutOfRange`] outside `1..=9999`.
    pub fn new(year: i32, system: CalendarSystem) -> Result<Self> {
        let (easter_day, easter_month) = easter(year, system)?;

        let golden_number = year % 19 + 1;
        let epact = epact_of(year, golden_number);
        let black_epact = epact == 25 && golden_number > 11;

        let mut christmas_moon = (epact + 4) % 30 + 1;
        if black_epact {
            christmas_moon -= 1;
        }

        let doomsday = doomsday_of(year);
        let dominical_letter = if year == 1582 {
            "GC"
        } else if historical_leap_year(year) {
            DOMINICAL_LEAP[doomsday as usize]
        } else {
            DOMINICAL_COMMON[doomsday as usize]
        };

        let boundary_index = if easter_month == 4 {
            easter_day + 31 - 22
        } else {
            easter_day - 22
        };

        Ok(Self {
            year,
            golden_number: golden_number as u32,
            epact: epact as u32,
            black_epact,
            martyrology_letter: MARTYROLOGY_LETTERS[epact as usize],
            paschal_full_moon: paschal_full_moon(epact, golden_number),
            solar_cycle: ((year + 8) % 28 + 1) as u32,
            indiction: ((year + 2) % 15 + 1) as u32,
            doomsday: WEEKDAYS_FROM_SUNDAY[doomsday as usize],
            dominical_letter,
            boundary_key: BOUNDARY_KEYS[boundary_index as usize],
            christmas_moon: christmas_moon as u32,
        })
    }

    /// Almanac rendering of the epact: "*" for zero, the black "25", or
    /// the Roman numeral.
    pub fn epact_label(&self) -> String {
        if self.epact == 0 {
            "*".to_string()
        } else if self.black_epact {
            "25".to_string()
        } else {
            ROMAN_NUMERALS[self.epact as usize - 1].to_string()
        }
    }
}

/// Epact from the 1582 base value, with century corrections after the
/// reform and the fixed +7 offset before it.
fn epact_of(year: i32, golden_number: i32) -> i32 {
    let base1582 = (11 * golden_number - 10) % 30;
    if year > 1582 {
        let century = year / 100 + 1;
        let solar_correction = (3 * century) / 4 - 12;
        let lunar_correction = (8 * century + 5) / 25 - 5;
        (base1582 - solar_correction + lunar_correction).rem_euclid(30)
    } else {
        (base1582 + 7) % 30
    }
}

/// Nominal paschal full moon `(day, month)`.
///
/// The epact bump for value 24 and for black 25 happens on a scratch
/// copy: the canonical epact other consumers see stays untouched.
fn paschal_full_moon(epact: i32, golden_number: i32) -> (u32, u32) {
    let mut e = epact;
    if (e == 25 && golden_number > 11) || e == 24 {
        e += 1;
    }
    let day_of_march = if e < 24 { 44 - e } else { 74 - e };
    if day_of_march > 31 {
        ((day_of_march - 31) as u32, 4)
    } else {
        (day_of_march as u32, 3)
    }
}

/// Conway's doomsday, 0 = Sunday. The century anchor switches formula at
/// the reform.
fn doomsday_of(year: i32) -> i32 {
    let k = year / 100;
    let anchor = if year > 1582 {
        (5 * (k % 4) + 2) % 7
    } else {
        (6 * k) % 7
    };
    let t = year % 100;
    let a = t / 12;
    let b = t % 12;
    let c = b / 4;
    (a + b + c + anchor) % 7
}

/// Leap year under the rules in force at the time: Julian every fourth
/// year at or before 1582, Gregorian afterwards. Distinct from the
/// proleptic-Gregorian test used for Ordinary Time bounds.
fn historical_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0 || year <= 1582)
}
