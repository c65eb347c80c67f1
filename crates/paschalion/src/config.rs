//! Calendar system selection and regional ritual options.
//!
//! Every query in this crate is keyed by a year plus one immutable
//! [`CalendarConfig`] value. Collapsing the regional flags into a single
//! configuration passed once per query keeps the derivation graph free of
//! positional-boolean call sites.

use serde::Serialize;

/// Which reckoning drives the computus: the Gregorian formulas with their
/// century corrections, or the Julian Paschalion constants.
///
/// The switch is keyed strictly on `Gregorian` **and** `year > 1582`; for
/// year ≤ 1582 the Julian constants apply regardless, since the reform did
/// not yet exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum CalendarSystem {
    /// Gregorian computus (post-reform years).
    #[default]
    Gregorian,
    /// Historical Julian Paschalion rules.
    Julian,
}

/// Immutable per-query configuration: calendar system plus the three
/// regional variants. Each flag changes exactly one downstream offset or
/// anchor, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CalendarConfig {
    /// Gregorian or Julian Easter reckoning.
    pub system: CalendarSystem,
    /// Ascension on the 40th day of Eastertide (Thursday) rather than the
    /// following Sunday. Thursday in France, England, the northeastern USA,
    /// northern Vietnam; Sunday in most of the rest of the world.
    pub ascension_on_thursday: bool,
    /// Corpus Christi on the Thursday after Trinity rather than the
    /// following Sunday. Thursday in Germany, Brazil, Australia.
    pub corpus_christi_on_thursday: bool,
    /// Epiphany fixed on January 6 rather than transferred to the Sunday
    /// on or after January 2.
    pub epiphany_on_jan6: bool,
}

impl CalendarConfig {
    /// Configuration with the given system and all regional flags at their
    /// defaults (Sunday Ascension, Sunday Corpus Christi, transferred
    /// Epiphany).
    pub fn with_system(system: CalendarSystem) -> Self {
        Self {
            system,
            ..Self::default()
        }
    }
}
